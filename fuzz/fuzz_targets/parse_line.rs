use cjk_table::{parse_line, verify_line, CharRecord};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            if let Ok(parsed) = parse_line(1, text) {
                // A line that parses and verifies must be the generated line.
                if verify_line(1, &parsed).is_ok() && !parsed.gbk.is_empty() {
                    let record = CharRecord::from_char(parsed.ch).unwrap();
                    assert_eq!(record.to_string(), text.trim_end_matches('\r'));
                }
            }
        });
    }
}
