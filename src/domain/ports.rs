use crate::utils::error::Result;

/// Destination for spoken messages. Each call writes one message and its line terminator.
pub trait Sink: Send + Sync {
    fn emit(&self, message: &str) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, message: &str) -> Result<()> {
        (**self).emit(message)
    }
}
