use clap::Parser;
use cjk_table::{io_utils::simple_cli_error, CharRecord};

/// Print the table line of each character given.
#[derive(Parser)]
struct Args {
    /// Text made of characters in U+4E00..U+9FA5
    #[arg(required = true)]
    text: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    for ch in args.text.iter().flat_map(|s| s.chars()) {
        let record = CharRecord::from_char(ch)
            .map_err(|e| simple_cli_error(&format!("{e}. Only U+4E00..U+9FA5 are listed.")))?;
        println!("{record}");
    }
    Ok(())
}
