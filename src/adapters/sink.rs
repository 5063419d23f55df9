use crate::core::say::{say_to, try_say};
use crate::domain::ports::Sink;
use crate::utils::error::Result;
use std::sync::Mutex;

/// Writes to the process's standard error, holding the lock for the whole line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn emit(&self, message: &str) -> Result<()> {
        try_say(message)?;
        Ok(())
    }
}

/// Collects output in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }
}

impl Sink for MemorySink {
    fn emit(&self, message: &str) -> Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        say_to(&mut *buffer, message)?;
        Ok(())
    }
}
