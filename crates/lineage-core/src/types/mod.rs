//! Type definitions shared across the lineage crates

mod runtime_config;

pub use runtime_config::*;
