use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use snagflow_admin::AdminGateway;
use snagflow_types::{
    AnswerValue, Attachment, GatewayError, Report, ReportId, ReportStatus, SubmissionGateway,
    SubmissionRecord,
};

use crate::config::RestConfig;
use crate::row::{NewReportRow, ReportRow};

/// Table holding report rows.
const REPORTS_TABLE: &str = "maintenance_requests";

/// Storage bucket holding report photos.
const PHOTO_BUCKET: &str = "maintenance-photos";

/// Survey id attached to fetched reports; the deployment is fixed.
const SURVEY_ID: &str = "maintenance_request_fixed";

/// Gateway over a hosted PostgREST-style backend.
///
/// One instance serves the whole process; requests carry the configured
/// API key and are bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    config: RestConfig,
}

impl RestGateway {
    /// Build a gateway from the given config.
    pub fn new(config: RestConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GatewayError::backend)?;
        Ok(Self { client, config })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{REPORTS_TABLE}", self.config.base_url)
    }

    fn upload_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/{PHOTO_BUCKET}/{object}",
            self.config.base_url
        )
    }

    fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{PHOTO_BUCKET}/{object}",
            self.config.base_url
        )
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Upload the record's photo, if it carries one, and return the
    /// public URL.
    ///
    /// An upload failure is logged and swallowed; the insert proceeds
    /// with a null photo reference instead of aborting the submission.
    async fn upload_photo(&self, record: &SubmissionRecord) -> Option<String> {
        let (file_name, media_type, data) =
            record.answers.iter().find_map(|(_, value)| match value {
                AnswerValue::Image(Some(Attachment::File {
                    file_name,
                    media_type,
                    data,
                })) => Some((file_name, media_type, data)),
                _ => None,
            })?;

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("jpg");
        let object = format!(
            "{}_{}.{extension}",
            record.id,
            record.created_at.timestamp_millis()
        );

        let result = self
            .authed(self.client.post(self.upload_url(&object)))
            .header(CONTENT_TYPE, media_type.as_str())
            .body(data.clone())
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!(object, "photo uploaded");
                Some(self.public_url(&object))
            }
            Ok(response) => {
                warn!(
                    object,
                    status = %response.status(),
                    "photo upload rejected, submitting without it"
                );
                None
            }
            Err(err) => {
                warn!(object, error = %err, "photo upload failed, submitting without it");
                None
            }
        }
    }
}

/// Turn a non-success response into a rejection carrying the backend's
/// message.
async fn reject_on_error(response: Response, action: &str) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body
    };
    Err(GatewayError::rejected(format!("{action} failed: {detail}")))
}

#[async_trait]
impl SubmissionGateway for RestGateway {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), GatewayError> {
        let image_url = self.upload_photo(record).await;
        let row = NewReportRow::from_record(record, image_url);

        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await
            .map_err(GatewayError::backend)?;
        reject_on_error(response, "Saving the report").await?;

        debug!(report_id = %record.id, "report row inserted");
        Ok(())
    }
}

#[async_trait]
impl AdminGateway for RestGateway {
    async fn fetch_reports(&self) -> Result<Vec<Report>, GatewayError> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(GatewayError::backend)?;
        let response = reject_on_error(response, "Loading reports").await?;

        let rows: Vec<ReportRow> = response.json().await.map_err(GatewayError::backend)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| row.into_report(SURVEY_ID))
            .collect())
    }

    async fn update_status(
        &self,
        id: &ReportId,
        status: ReportStatus,
    ) -> Result<(), GatewayError> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("report_id", format!("eq.{id}"))])
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await
            .map_err(GatewayError::backend)?;
        reject_on_error(response, "Updating the status").await?;
        Ok(())
    }

    async fn update_notes(&self, id: &ReportId, notes: &str) -> Result<(), GatewayError> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("report_id", format!("eq.{id}"))])
            .json(&serde_json::json!({ "internal_notes": notes }))
            .send()
            .await
            .map_err(GatewayError::backend)?;
        reject_on_error(response, "Saving the notes").await?;
        Ok(())
    }

    async fn delete_report(&self, id: &ReportId) -> Result<(), GatewayError> {
        let response = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("report_id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(GatewayError::backend)?;
        reject_on_error(response, "Deleting the report").await?;
        Ok(())
    }
}
