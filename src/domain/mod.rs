// Domain layer: plain value types and the ports the client depends on.

pub mod model;
pub mod ports;
