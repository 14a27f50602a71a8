// Domain layer: the choreography model and the capability ports. No I/O here.

pub mod model;
pub mod ports;
