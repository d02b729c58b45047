// Domain layer: binding records, VLAN mappings and the ports the pipeline talks through.

pub mod model;
pub mod ports;
