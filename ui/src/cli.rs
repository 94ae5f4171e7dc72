use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "swatchy", version, about = "Terminal color theme switcher")]
pub struct Cli {
    /// Apply this theme at startup (an empty string resets to the default)
    #[arg(long)]
    pub theme: Option<String>,

    /// Reset to the default theme at startup
    #[arg(long, conflicts_with = "theme")]
    pub reset: bool,

    /// Path of the selection state file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,
}
