//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::format::OutputFormat;

/// Default upper bound on the input file size (100 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 100 * 1024 * 1024;

/// Turn a WhatsApp chat export into a year-in-review summary.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatrecap")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatrecap \"WhatsApp Chat with Family.zip\"
    chatrecap chat.txt --year 2024 --format text
    chatrecap chat.zip --title \"Book club\" -o recap.json
    chatrecap chat.txt --config recap.toml -v")]
pub struct Args {
    /// Path to the export (.txt or .zip)
    pub input: PathBuf,

    /// Chat title (derived from the file name when omitted)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Year to summarize (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Output format
    #[arg(short, long, default_value = "json", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject inputs larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: u64,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chatrecap", "chat.zip"]).unwrap();
        assert_eq!(args.input, PathBuf::from("chat.zip"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.max_size, DEFAULT_MAX_SIZE);
        assert!(args.year.is_none());
        assert!(args.title.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "chatrecap",
            "chat.txt",
            "--title",
            "Trip",
            "--year",
            "2023",
            "--format",
            "text",
            "-o",
            "out.txt",
            "--max-size",
            "10",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.title.as_deref(), Some("Trip"));
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.max_size, 10);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["chatrecap", "chat.txt", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_requires_input() {
        assert!(Args::try_parse_from(["chatrecap"]).is_err());
    }
}
