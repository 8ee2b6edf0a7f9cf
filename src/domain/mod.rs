// Domain layer: records, report types and the ports the pipeline talks through.

pub mod model;
pub mod ports;
