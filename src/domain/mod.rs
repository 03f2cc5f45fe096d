// Domain layer: variant tags and the capability traits each pattern group implements.

pub mod model;
pub mod ports;
