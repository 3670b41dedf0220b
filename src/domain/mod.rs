// Domain layer: advocate records and the ports the controller depends on.

pub mod model;
pub mod ports;
