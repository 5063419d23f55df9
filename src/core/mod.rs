pub mod say;
pub mod speaker;

pub use crate::domain::ports::Sink;
pub use crate::utils::error::Result;
