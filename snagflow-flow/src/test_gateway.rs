//! Test gateway for exercising flows without a live backend.
//!
//! `TestGateway` keeps accepted submissions in memory and can be scripted
//! to reject the next few attempts, which makes the rollback path easy to
//! drive in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use snagflow_flow::{FlowController, TestGateway};
//!
//! let gateway = TestGateway::new().fail_next(1, "insert failed");
//! let mut flow = FlowController::new(survey, gateway.clone());
//! // ... the first terminal advance() is rejected, the second succeeds
//! assert_eq!(gateway.accepted().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use snagflow_types::{GatewayError, SubmissionGateway, SubmissionRecord};

/// A gateway that records accepted submissions in memory.
///
/// Clones share the same store, so a test can hand one clone to the
/// controller and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct TestGateway {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    accepted: Vec<SubmissionRecord>,
    failures_left: u32,
    failure_message: String,
}

impl TestGateway {
    /// Create a new gateway that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `count` submissions with the given message.
    pub fn fail_next(self, count: u32, message: impl Into<String>) -> Self {
        {
            let mut inner = self.inner.lock().expect("TestGateway lock poisoned");
            inner.failures_left = count;
            inner.failure_message = message.into();
        }
        self
    }

    /// All submissions accepted so far, in arrival order.
    pub fn accepted(&self) -> Vec<SubmissionRecord> {
        self.inner
            .lock()
            .expect("TestGateway lock poisoned")
            .accepted
            .clone()
    }

    /// How many submissions were accepted.
    pub fn accepted_count(&self) -> usize {
        self.inner
            .lock()
            .expect("TestGateway lock poisoned")
            .accepted
            .len()
    }
}

#[async_trait]
impl SubmissionGateway for TestGateway {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), GatewayError> {
        let mut inner = self.inner.lock().expect("TestGateway lock poisoned");
        if inner.failures_left > 0 {
            inner.failures_left -= 1;
            return Err(GatewayError::rejected(inner.failure_message.clone()));
        }
        inner.accepted.push(record.clone());
        Ok(())
    }
}
