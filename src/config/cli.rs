use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "say")]
#[command(about = "Write each message, followed by a newline, to standard error")]
pub struct CliConfig {
    /// Messages to write, in order
    pub messages: Vec<String>,

    /// TOML file with a [say] table; its messages are written first
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the whole message list this many times (default: the file's value, else 1)
    #[arg(long)]
    pub repeat: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(repeat) = self.repeat {
            validate_positive_number("repeat", repeat, 1)?;
        }
        Ok(())
    }
}
