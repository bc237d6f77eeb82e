//! The fixed maintenance-reporting deployment: survey definition and seed
//! reports for dashboard previews.

mod maintenance;
pub use maintenance::{maintenance_survey, seed_reports};
