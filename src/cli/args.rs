/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// nsd2j — convert an `NSDictionary` description literal to JSON.
#[derive(Debug, Parser)]
#[command(
    name = "nsd2j",
    about = "Convert an NSDictionary object to a JSON object",
    version,
    disable_help_flag = true
)]
pub struct Cli {
    /// The NSDictionary description to convert. Read from stdin when omitted.
    #[arg(value_name = "OBJECT")]
    pub object: Option<String>,

    /// Show the manual page and exit.
    #[arg(short = 'h', long)]
    pub help: bool,

    /// JSON layout on stdout.
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    pub output: OutputFormat,

    /// How errors are written to stderr.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub error_format: ErrorFormat,

    /// Print input-source decisions and timing to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Indented with four spaces.
    #[default]
    Pretty,
    /// Single-line JSON.
    Compact,
}

/// Error format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ErrorFormat {
    /// `Error: <message>` lines.
    #[default]
    Text,
    /// `{"ok": false, "error": {...}}` envelope.
    Json,
}
