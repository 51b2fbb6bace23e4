//! CLI library components for Compliance Compass.

pub mod config;
pub mod logging;
pub mod pipeline;
