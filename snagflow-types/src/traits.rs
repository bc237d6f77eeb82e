use async_trait::async_trait;

use crate::{GatewayError, SubmissionRecord};

/// The persistence boundary for finished submissions.
///
/// Implementations decide where records go (hosted backend, memory, ...)
/// and own their timeout policy; a timeout surfaces as an ordinary error.
/// The call is fire-once per submission attempt: no retrying, no queuing
/// of failed records.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Accept a finalized submission record.
    ///
    /// Suspends the caller until the backend answers. An `Err` means the
    /// record was not persisted and the flow rolls back for a manual
    /// retry.
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), GatewayError>;
}
