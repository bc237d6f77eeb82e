use tracing::warn;

use snagflow_types::{GatewayError, Report, ReportId, ReportStatus};

use crate::AdminGateway;

/// Local projection of the persisted reports, as shown on the triage
/// board.
///
/// Mutations apply optimistically so the board reflects the action at
/// once. When the gateway then rejects one, the projection is reconciled
/// by re-fetching authoritative state rather than being left to diverge
/// silently.
#[derive(Debug)]
pub struct ReportBoard<G> {
    gateway: G,
    reports: Vec<Report>,
}

impl<G: AdminGateway> ReportBoard<G> {
    /// Create an empty board over the given gateway. Call `refresh` to
    /// load it.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            reports: Vec::new(),
        }
    }

    /// The current projection, in the gateway's order (newest first).
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Look up one report by id.
    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|report| &report.id == id)
    }

    /// Replace the projection with authoritative state.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        self.reports = self.gateway.fetch_reports().await?;
        Ok(())
    }

    /// Set a report's workflow status.
    pub async fn set_status(
        &mut self,
        id: &ReportId,
        status: ReportStatus,
    ) -> Result<(), GatewayError> {
        if let Some(report) = self.reports.iter_mut().find(|report| &report.id == id) {
            report.status = status;
        }
        match self.gateway.update_status(id, status).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(report_id = %id, error = %err, "status update rejected");
                self.reconcile().await;
                Err(err)
            }
        }
    }

    /// Replace a report's internal notes.
    pub async fn save_notes(&mut self, id: &ReportId, notes: &str) -> Result<(), GatewayError> {
        if let Some(report) = self.reports.iter_mut().find(|report| &report.id == id) {
            report.internal_notes = notes.to_string();
        }
        match self.gateway.update_notes(id, notes).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(report_id = %id, error = %err, "notes update rejected");
                self.reconcile().await;
                Err(err)
            }
        }
    }

    /// Delete a report.
    pub async fn delete(&mut self, id: &ReportId) -> Result<(), GatewayError> {
        self.reports.retain(|report| &report.id != id);
        match self.gateway.delete_report(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(report_id = %id, error = %err, "delete rejected");
                self.reconcile().await;
                Err(err)
            }
        }
    }

    /// Re-fetch after a rejected mutation. A failed re-fetch leaves the
    /// stale projection in place; the next `refresh` catches up.
    async fn reconcile(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "reconciliation fetch failed");
        }
    }
}
