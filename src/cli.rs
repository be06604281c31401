use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tag-extractor")]
#[command(about = "Extract ranked word-frequency tags from a text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan one text file and print its tags.
    Extract(ExtractArgs),
    /// Read load/scan/save commands from stdin.
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text file to scan.
    #[arg(long)]
    pub text: PathBuf,
    /// Stop-word file, one word per line (defaults to $TAG_EXTRACTOR_STOP_WORDS).
    #[arg(long)]
    pub stop_words: Option<PathBuf>,
    /// Save tags to tags_output.txt beside the text file.
    #[arg(long)]
    pub save: bool,
    /// Save tags to this path instead (implies --save).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Only print the N highest-ranked tags.
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Stop-word file loaded before the first command.
    #[arg(long)]
    pub stop_words: Option<PathBuf>,
    /// Only print the N highest-ranked tags.
    #[arg(long)]
    pub top: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}
