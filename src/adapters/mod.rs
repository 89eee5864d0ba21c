// Adapters layer: concrete dataset sources behind the DatasetSource port.

pub mod dataset;
