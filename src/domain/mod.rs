// Domain layer: the ports the speaker writes through. No external dependencies.

pub mod ports;
