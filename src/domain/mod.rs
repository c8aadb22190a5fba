// Domain layer: timer models and the ports (interfaces) to the terminal, audio and asset adapters.

pub mod model;
pub mod ports;
