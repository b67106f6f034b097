// Domain layer: shared models and ports (interfaces) used by every playground.

pub mod model;
pub mod ports;
