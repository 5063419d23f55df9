pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sink::{MemorySink, StderrSink};
pub use config::{resolve_script, Script, TomlConfig};
pub use crate::core::{
    say::{say, say_to, try_say},
    speaker::Speaker,
};
pub use domain::ports::Sink;
pub use utils::error::{Result, SayError};
