// Domain layer: catalog entities and the traits the query engine works against.
// No I/O here; loading lives in adapters.

pub mod model;
pub mod ports;
