//! Integration tests for the triage board projection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use snagflow_admin::{AdminGateway, ReportBoard};
use snagflow_types::{
    Answers, GatewayError, Report, ReportId, ReportStatus, SubmissionRecord,
};

/// In-memory admin gateway. Mutations can be scripted to fail while the
/// authoritative store stays unchanged, which is exactly the divergence
/// the board has to reconcile.
#[derive(Clone, Default)]
struct MemoryAdmin {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    reports: Vec<Report>,
    reject_mutations: bool,
}

impl MemoryAdmin {
    fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                reports,
                reject_mutations: false,
            })),
        }
    }

    fn reject_mutations(&self, reject: bool) {
        self.inner.lock().unwrap().reject_mutations = reject;
    }
}

#[async_trait]
impl AdminGateway for MemoryAdmin {
    async fn fetch_reports(&self) -> Result<Vec<Report>, GatewayError> {
        Ok(self.inner.lock().unwrap().reports.clone())
    }

    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
    ) -> Result<(), GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reject_mutations {
            return Err(GatewayError::rejected("update blocked"));
        }
        if let Some(report) = inner.reports.iter_mut().find(|r| &r.id == id) {
            report.status = status;
        }
        Ok(())
    }

    async fn update_notes(&self, id: &ReportId, notes: &str) -> Result<(), GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reject_mutations {
            return Err(GatewayError::rejected("update blocked"));
        }
        if let Some(report) = inner.reports.iter_mut().find(|r| &r.id == id) {
            report.internal_notes = notes.to_string();
        }
        Ok(())
    }

    async fn delete_report(&self, id: &ReportId) -> Result<(), GatewayError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reject_mutations {
            return Err(GatewayError::rejected("delete blocked"));
        }
        inner.reports.retain(|r| &r.id != id);
        Ok(())
    }
}

fn report(id: &str) -> Report {
    let mut answers = Answers::new();
    answers.insert("name", "Alice");
    Report::from_submission(SubmissionRecord::new(
        ReportId::parse(id).unwrap(),
        "maintenance",
        answers,
    ))
}

#[tokio::test]
async fn refresh_loads_the_projection() {
    let gateway = MemoryAdmin::with_reports(vec![report("8507294"), report("9211051")]);
    let mut board = ReportBoard::new(gateway);
    assert!(board.reports().is_empty());

    board.refresh().await.unwrap();
    assert_eq!(board.reports().len(), 2);
    assert!(board.get(&ReportId::parse("9211051").unwrap()).is_some());
}

#[tokio::test]
async fn accepted_mutations_stick() {
    let id = ReportId::parse("8507294").unwrap();
    let gateway = MemoryAdmin::with_reports(vec![report("8507294")]);
    let mut board = ReportBoard::new(gateway.clone());
    board.refresh().await.unwrap();

    board
        .set_status(&id, ReportStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(board.get(&id).unwrap().status, ReportStatus::InProgress);

    board.save_notes(&id, "technician assigned").await.unwrap();
    assert_eq!(board.get(&id).unwrap().internal_notes, "technician assigned");

    // The authoritative store agrees.
    let authoritative = gateway.fetch_reports().await.unwrap();
    assert_eq!(authoritative[0].status, ReportStatus::InProgress);
}

#[tokio::test]
async fn rejected_status_update_is_reconciled() {
    let id = ReportId::parse("8507294").unwrap();
    let gateway = MemoryAdmin::with_reports(vec![report("8507294")]);
    let mut board = ReportBoard::new(gateway.clone());
    board.refresh().await.unwrap();

    gateway.reject_mutations(true);
    let err = board.set_status(&id, ReportStatus::Completed).await;
    assert!(err.is_err());

    // The optimistic change was rolled back to authoritative state.
    assert_eq!(board.get(&id).unwrap().status, ReportStatus::New);
}

#[tokio::test]
async fn rejected_delete_restores_the_row() {
    let id = ReportId::parse("8507294").unwrap();
    let gateway = MemoryAdmin::with_reports(vec![report("8507294")]);
    let mut board = ReportBoard::new(gateway.clone());
    board.refresh().await.unwrap();

    gateway.reject_mutations(true);
    assert!(board.delete(&id).await.is_err());
    assert_eq!(board.reports().len(), 1);
}

#[tokio::test]
async fn accepted_delete_removes_the_row() {
    let id = ReportId::parse("8507294").unwrap();
    let gateway = MemoryAdmin::with_reports(vec![report("8507294"), report("9211051")]);
    let mut board = ReportBoard::new(gateway.clone());
    board.refresh().await.unwrap();

    board.delete(&id).await.unwrap();
    assert_eq!(board.reports().len(), 1);
    assert_eq!(gateway.fetch_reports().await.unwrap().len(), 1);
}
