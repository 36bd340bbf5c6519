//! Report output: plain-text batch summaries.

mod text_report;

pub use text_report::{ReportError, TextReportWriter};
