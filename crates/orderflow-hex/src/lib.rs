//! orderflow-hex: order workflow core + inbound HTTP adapter

pub mod config;
pub mod errors;

pub mod application;

pub use orderflow_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
