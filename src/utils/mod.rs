//! Utility modules: file persistence and log setup.

pub mod logging;
pub mod persistence;
