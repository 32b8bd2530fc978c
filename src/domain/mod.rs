// Domain layer: DTOs, the tri-state resource, and the ports adapters implement.

pub mod analytics;
pub mod format;
pub mod model;
pub mod ports;
pub mod resource;
