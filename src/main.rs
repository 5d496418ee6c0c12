//! # chatlab CLI
//!
//! Command-line interface for chatlab library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlab::ChatlabError;
use chatlab::cli::Args;
use chatlab::core::{EnvelopeBuilder, write_json};
use chatlab::parser::parse_file;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!("fatal: {e}");
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info,chatlab=debug",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlabError> {
    let total_start = Instant::now();
    let config = args.export_config();

    // Print header
    println!("📦 chatlab v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💬 Talker:  {}", args.talker);
    println!("💾 Output:  {}", args.output);
    println!("🌐 Locale:  {}", config.locale);
    println!();

    println!("⏳ Reading messages...");
    let parse_start = Instant::now();
    let messages = parse_file(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("🔀 Converting...");
    let mut builder = EnvelopeBuilder::with_config(&args.talker, &args.name, config);
    builder.reserve(messages.len());
    builder.extend(&messages);
    let mut envelope = builder.finish();
    if args.sort_members {
        envelope.sort_members();
    }

    println!("💾 Writing JSON...");
    let write_start = Instant::now();
    write_json(&envelope, &args.output, args.pretty)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", args.output);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Chat:      {} ({})", envelope.meta.name, envelope.meta.chat_type);
    println!("   Members:   {}", envelope.members.len());
    println!("   Messages:  {}", envelope.messages.len());
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
