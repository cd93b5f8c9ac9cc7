// Domain layer: the ring/module/ideal model and the ports the core drives.

pub mod model;
pub mod ports;
