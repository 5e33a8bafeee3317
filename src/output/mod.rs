//! Report types and output formatting

pub mod formatter;
pub mod report;

pub use formatter::{format_pool_report, format_screening_report};
pub use report::{PoolEntry, PoolReport, ScreeningReport};
