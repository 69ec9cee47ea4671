use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::Report;
use crate::shared::constants::DEFAULT_API_BASE_URL;
use crate::shared::types::MessageResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// HTTP client for the report resource
#[derive(Debug, Clone)]
pub struct ReportsClient {
    http: Client,
    base_url: String,
}

impl Default for ReportsClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ReportsClient {
    /// `base_url` points at the API root, e.g. `http://localhost:5000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn reports_url(&self) -> String {
        format!("{}/reports", self.base_url)
    }

    fn report_url(&self, id: i64) -> String {
        format!("{}/reports/{}", self.base_url, id)
    }

    pub async fn fetch_reports(&self) -> ClientResult<Vec<Report>> {
        let response = self.http.get(self.reports_url()).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn create_report(&self, report: &CreateReportDto) -> ClientResult<Report> {
        let response = self
            .http
            .post(self.reports_url())
            .json(report)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn update_report(
        &self,
        id: i64,
        report: &CreateReportDto,
    ) -> ClientResult<MessageResponse> {
        let response = self
            .http
            .put(self.report_url(id))
            .json(report)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    pub async fn delete_report(&self, id: i64) -> ClientResult<MessageResponse> {
        let response = self.http.delete(self.report_url(id)).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

/// Turn a non-2xx response into [`ClientError::Api`], keeping the server's message
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&body)
        .map(|m| m.message)
        .unwrap_or(body);

    tracing::warn!("Report API request failed: status={}, message={}", status, message);
    Err(ClientError::Api { status, message })
}
