use async_trait::async_trait;

use snagflow_types::{GatewayError, Report, ReportId, ReportStatus};

/// The admin-side persistence boundary.
///
/// Fetches authoritative report state and applies triage mutations.
/// Implementations own their timeout policy; errors carry displayable
/// messages the dashboard shows verbatim.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    /// Fetch all reports, newest first.
    async fn fetch_reports(&self) -> Result<Vec<Report>, GatewayError>;

    /// Set the workflow status of one report.
    async fn update_status(&self, id: &ReportId, status: ReportStatus)
    -> Result<(), GatewayError>;

    /// Replace the internal notes of one report.
    async fn update_notes(&self, id: &ReportId, notes: &str) -> Result<(), GatewayError>;

    /// Delete one report.
    async fn delete_report(&self, id: &ReportId) -> Result<(), GatewayError>;
}
