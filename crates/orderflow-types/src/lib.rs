//! orderflow-types: domain values and capability ports shared by every layer.

pub mod domain;
pub mod ports;
