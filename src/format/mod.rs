//! Formatting helpers for rendering expressions and analysis reports.

pub mod expr;
pub mod report;

pub use expr::pretty;
pub use report::render_report;
