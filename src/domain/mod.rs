// Domain layer: volume models and ports (interfaces) to the host OS.

pub mod model;
pub mod ports;
