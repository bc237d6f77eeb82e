//! # snagflow-flow
//!
//! The guided flow controller for maintenance-reporting surveys.
//!
//! A `FlowController` walks a reporter through one survey: it sequences
//! questions, records answers for the currently shown step, gates
//! advancement on the current answer, and - at the terminal step -
//! assembles a `SubmissionRecord` and hands it to a `SubmissionGateway`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use snagflow_flow::{FlowController, Progress, TestGateway};
//!
//! let mut flow = FlowController::new(survey, TestGateway::new());
//! flow.start()?;
//! flow.record_answer(&"name".into(), "Alice".into())?;
//! match flow.advance().await? {
//!     Progress::Step(next) => { /* render the next question */ }
//!     Progress::Submitted(report_id) => { /* show the thank-you screen */ }
//!     Progress::Held => { /* gate closed; nothing changed */ }
//! }
//! ```
//!
//! ## Backends
//!
//! Gateways are separate crates that implement `SubmissionGateway`:
//! - `snagflow-gateway-rest` - hosted PostgREST-style backend
//! - `TestGateway` (this crate) - in-memory, for tests

// Re-export all types from snagflow-types
pub use snagflow_types::*;

mod controller;
pub use controller::{FlowController, FlowError, NextAction, Phase, Progress};

// Test gateway for exercising flows without a live backend
mod test_gateway;
pub use test_gateway::TestGateway;
