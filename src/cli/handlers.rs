// src/cli/handlers.rs
use anyhow::Context;
use console::style;

use crate::cli::Args;
use crate::generators::{self, Charset};
use crate::models::{GenerationOptions, GenerationReport};
use crate::utils::{char_classes, entropy_bits, strength_label, yes_no};

// Build options from the parsed flags, run the generator exactly once,
// render the result. All retry and failure policy lives in the generator;
// this layer only formats.
pub fn handle_generate(args: &Args) -> anyhow::Result<()> {
    let options = GenerationOptions {
        length: args.length,
        include_symbols: !args.no_symbols,
        readable_only: args.readable,
    };

    log::debug!(
        "generating password: length={} symbols={} readable={}",
        options.length,
        options.include_symbols,
        options.readable_only
    );

    let password = generators::generate_password(&options)?;

    // Derived stats come from the options alone, never by inspecting how
    // the secret was produced.
    let charset_size = Charset::for_options(&options).len();
    let bits = entropy_bits(options.length, charset_size);

    if args.json {
        let report = GenerationReport {
            password,
            length: options.length,
            charset_size,
            entropy_bits: bits,
            include_symbols: options.include_symbols,
            readable_only: options.readable_only,
        };
        let line = serde_json::to_string(&report).context("serializing generation report")?;
        println!("{line}");
        return Ok(());
    }

    if args.verbose {
        let classes = char_classes(&password);
        println!("{}", style(&password).bold());
        println!("{}", style(format!("length:  {}", options.length)).dim());
        println!("{}", style(format!("charset: {charset_size} characters")).dim());
        println!(
            "{}",
            style(format!("entropy: {bits:.1} bits ({})", strength_label(bits))).dim()
        );
        println!(
            "{}",
            style(format!(
                "classes: lowercase {}, uppercase {}, digits {}, symbols {}",
                yes_no(classes.lowercase),
                yes_no(classes.uppercase),
                yes_no(classes.digits),
                yes_no(classes.symbols)
            ))
            .dim()
        );
    } else {
        // Bare password on stdout so the tool composes in pipelines.
        println!("{password}");
    }

    Ok(())
}
