use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pygrep", version, about = "Syntax-aware grep for Python")]
pub struct Args {
    /// Pattern to search for (regular expression, matched anywhere inside
    /// a derived name)
    #[arg(
        value_name = "PATTERN",
        required_unless_present_any = ["list_extractors", "list_target_files"]
    )]
    pub pattern: Option<String>,

    /// Files or directories to search
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Run only the specified extractors (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json", "files", "quiet"])]
    pub format: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List all registered extractor names, one per line, then exit
    #[arg(long)]
    pub list_extractors: bool,

    /// Print files that would be searched, then exit
    #[arg(short = 'L', long)]
    pub list_target_files: bool,

    /// Read source from stdin, use PATH for display
    #[arg(long, value_name = "PATH")]
    pub stdin: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}
