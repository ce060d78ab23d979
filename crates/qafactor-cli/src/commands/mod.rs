//! CLI command implementations.

pub mod common;
pub mod factor;
pub mod report;
pub mod search;
pub mod sweep;
pub mod version;
