mod report;

pub use report::{Report, DEFAULT_REPORT_STATUS, REPORT_SCHEMA};
