//! Business logic for the Garden Records Server

pub mod culture;
pub mod report;
pub mod view;

pub use report::ReportService;
