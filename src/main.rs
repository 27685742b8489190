//! # chatrecap CLI
//!
//! Command-line interface for the chatrecap library.

use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatrecap::analyzer::{Analyzer, current_year};
use chatrecap::cli::Args;
use chatrecap::config::RecapConfig;
use chatrecap::format::{render, write_to_format};
use chatrecap::parser::WhatsAppParser;
use chatrecap::source::chat_title_from_file_name;
use chatrecap::{RecapError, Result};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "chatrecap=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    check_size(&args.input, args.max_size)?;

    let config = match &args.config {
        Some(path) => RecapConfig::load(path)?,
        None => RecapConfig::default(),
    };

    let title = args.title.clone().unwrap_or_else(|| {
        let name = args
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        chat_title_from_file_name(&name)
    });

    let parser = WhatsAppParser::with_config(config.parser).with_source_config(config.source);
    let messages = parser.parse_file(&args.input)?;

    let year = args.year.unwrap_or_else(current_year);
    let stats = Analyzer::with_config(config.analyzer).analyze(&messages, &title, year)?;
    tracing::info!(
        messages = stats.total_messages,
        participants = stats.participant_count,
        year,
        "recap ready"
    );

    match &args.output {
        Some(path) => write_to_format(&stats, path, args.format)?,
        None => {
            let rendered = render(&stats, args.format)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
        }
    }

    Ok(())
}

fn check_size(path: &Path, limit: u64) -> Result<()> {
    let size = std::fs::metadata(path)?.len();
    if size > limit {
        return Err(RecapError::InputTooLarge { size, limit });
    }
    Ok(())
}
