// src/cli/mod.rs
use clap::Parser;

pub mod handlers;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Password length in characters (1-1000)
    #[arg(long, short = 'l', env = "PASSFORGE_LENGTH", default_value_t = 12)]
    pub length: usize,

    /// Build the charset without symbols (symbols are on by default)
    #[arg(long)]
    pub no_symbols: bool,

    /// Drop visually ambiguous characters (O, 0, I, l, 1, |)
    #[arg(long, short = 'r')]
    pub readable: bool,

    /// Print charset size, character classes and an entropy estimate
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,
}
