// Domain layer: core models and ports (interfaces). Only std here.

pub mod model;
pub mod ports;
