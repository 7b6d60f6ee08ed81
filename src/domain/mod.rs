// Domain layer: page models and ports (interfaces).

pub mod model;
pub mod ports;
