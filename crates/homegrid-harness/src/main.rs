#![forbid(unsafe_code)]

use clap::Parser;
use homegrid_harness::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    homegrid_harness::init_logging(cli.verbose);
    if let Err(error) = homegrid_harness::run(cli) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
