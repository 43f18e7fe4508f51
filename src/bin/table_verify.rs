use clap::Parser;
use cjk_table::{
    io_utils::{simple_cli_error, table_cli_error},
    verify_file, DEFAULT_OUTPUT, TABLE_LEN,
};
use std::path::PathBuf;

/// Check that every line of a generated table decodes back to its character.
#[derive(Parser)]
struct Args {
    /// Table file to verify
    #[arg(default_value = DEFAULT_OUTPUT)]
    input: PathBuf,
    /// Also require the full U+4E00..U+9FA5 range
    #[arg(long)]
    strict: bool,
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
    let report = verify_file(&args.input)
        .map_err(|e| table_cli_error("verifying table", &args.input, e))?;

    println!("{}: {} lines OK", args.input.display(), report.lines);
    if let (Some(first), Some(last)) = (report.first, report.last) {
        println!(
            "  range: {} (U+{:04X}) .. {} (U+{:04X})",
            first, first as u32, last, last as u32
        );
    }
    if report.placeholders > 0 {
        println!("  placeholders: {}", report.placeholders);
    }

    if args.strict && !report.is_complete() {
        return Err(simple_cli_error(&format!(
            "Incomplete table: {} of {} lines. Regenerate the table.",
            report.lines, TABLE_LEN
        ))
        .into());
    }
    Ok(())
}
