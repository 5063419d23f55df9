use crate::core::Sink;
use crate::utils::error::Result;

pub struct Speaker<S: Sink> {
    sink: S,
}

impl<S: Sink> Speaker<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Emits every message in order, stopping at the first sink error.
    pub fn speak(&self, messages: &[String]) -> Result<usize> {
        self.speak_repeated(messages, 1)
    }

    /// Emits the whole list `repeat` times without materialising the repetitions.
    /// Returns the number of messages emitted, saturating at `usize::MAX`.
    pub fn speak_repeated(&self, messages: &[String], repeat: usize) -> Result<usize> {
        if messages.is_empty() || repeat == 0 {
            tracing::debug!("Nothing to speak");
            return Ok(0);
        }

        tracing::debug!("Speaking {} message(s) x{}", messages.len(), repeat);

        let mut emitted: usize = 0;
        for round in 0..repeat {
            for (index, message) in messages.iter().enumerate() {
                if let Err(e) = self.sink.emit(message) {
                    tracing::error!(
                        "Failed to emit message #{} in round {}: {}",
                        index,
                        round,
                        e
                    );
                    return Err(e);
                }
                emitted = emitted.saturating_add(1);
            }
        }

        tracing::info!("Spoke {} message(s)", emitted);
        Ok(emitted)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
