// Domain layer: request/response models and the exchange port.

pub mod model;
pub mod ports;
