//! CLI library components for the response matrix cleaner.

pub mod logging;
pub mod pipeline;
