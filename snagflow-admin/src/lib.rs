//! # snagflow-admin
//!
//! Admin-side logic over persisted maintenance reports: the triage board
//! projection, list filtering, CSV export, analytics aggregation, the
//! work-order text summary, and the dashboard passcode gate.
//!
//! Everything here is presentation-agnostic. The board talks to the
//! backend through the `AdminGateway` trait; the rest are pure functions
//! over already-fetched `Report`s.

mod gateway;
pub use gateway::AdminGateway;

mod board;
pub use board::ReportBoard;

mod filter;
pub use filter::{ReportFilter, filter_reports};

mod export;
pub use export::to_csv;

mod analytics;
pub use analytics::{recent_texts, tally, top_answers};

mod summary;
pub use summary::clipboard_text;

mod auth;
pub use auth::Passcode;

mod qr;
pub use qr::qr_image_url;
