//! CLI library components for the kartei scheduler.

pub mod logging;
