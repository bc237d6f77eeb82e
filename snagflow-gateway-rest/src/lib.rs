//! # snagflow-gateway-rest
//!
//! Gateway implementation over a hosted PostgREST-style backend: report
//! rows live in a table, photos in a storage bucket with public URLs.
//!
//! Implements both `SubmissionGateway` (reporter side) and `AdminGateway`
//! (triage side). All timeout policy lives here, at the boundary - a
//! timed-out request surfaces to the flow controller as an ordinary
//! failure.

mod config;
pub use config::{ConfigError, RestConfig};

mod row;

mod gateway;
pub use gateway::RestGateway;
