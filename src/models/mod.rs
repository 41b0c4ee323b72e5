pub mod config;
pub mod report;

pub use config::{AppConfig, OutputNames, MAX_DIFF_SCALE};
pub use report::{Report, ReportIssue, SpriteOutputs};
