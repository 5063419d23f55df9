// Adapters layer: concrete sinks the speaker can write to.

pub mod sink;
