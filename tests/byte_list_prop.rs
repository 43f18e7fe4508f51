use quickcheck::quickcheck;
use cjk_table::{format_byte_list, parse_byte_list};

quickcheck! {
    fn byte_list_parses_back(bytes: Vec<u8>) -> bool {
        parse_byte_list(&format_byte_list(&bytes)) == Some(bytes)
    }
}
