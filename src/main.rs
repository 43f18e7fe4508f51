use std::path::PathBuf;

use cjk_table::{
    io_utils::{simple_cli_error, table_cli_error},
    Config, TableFormat, TableGenerator, UnmappedPolicy, DEFAULT_OUTPUT,
};
use clap::Parser;

/// Write the UTF-8 / GBK code table of U+4E00..U+9FA5.
#[derive(Parser)]
struct Args {
    /// Output file, created or truncated
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// What to do with a character GBK cannot encode: abort, skip or placeholder
    #[arg(long, default_value_t = UnmappedPolicy::Abort)]
    on_unmapped: UnmappedPolicy,
    /// Output format: text or csv
    #[arg(long, default_value_t = TableFormat::Text)]
    format: TableFormat,
    /// Do not echo lines to stdout
    #[arg(long, short)]
    quiet: bool,
    /// Print the run summary as JSON to stderr
    #[arg(long)]
    json: bool,
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
    let config = Config {
        output: args.output,
        policy: args.on_unmapped,
        format: args.format,
        echo: !args.quiet,
    };
    let generator = TableGenerator::new(config);
    let summary = generator
        .generate()
        .map_err(|e| table_cli_error("writing table", &generator.config().output, e))?;

    if args.json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| simple_cli_error(&format!("serializing summary: {e}")))?;
        eprintln!("{out}");
    }
    Ok(())
}
