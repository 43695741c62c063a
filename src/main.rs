use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use passforge::cli::{handlers, Args};

fn main() -> ExitCode {
    // Load environment defaults before clap reads them.
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match handlers::handle_generate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::from(1)
        }
    }
}
