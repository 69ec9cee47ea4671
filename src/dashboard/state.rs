use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use validator::{Validate, ValidationErrors};

use crate::dashboard::client::{ClientError, ReportsClient};
use crate::dashboard::notifications::{NotificationQueue, NotificationTicker, SharedNotifications};
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::Report;

/// Dashboard views, keyed the way the navigation refers to them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Report,
    Water,
    Waste,
    Wastewater,
    AirQuality,
    DiseaseVector,
    Edu,
    Community,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 10] = [
        Tab::Home,
        Tab::Report,
        Tab::Water,
        Tab::Waste,
        Tab::Wastewater,
        Tab::AirQuality,
        Tab::DiseaseVector,
        Tab::Edu,
        Tab::Community,
        Tab::Analytics,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Report => "report",
            Tab::Water => "water",
            Tab::Waste => "waste",
            Tab::Wastewater => "wastewater",
            Tab::AirQuality => "airQuality",
            Tab::DiseaseVector => "diseaseVector",
            Tab::Edu => "edu",
            Tab::Community => "community",
            Tab::Analytics => "analytics",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.key() == s)
            .ok_or_else(|| format!("Unknown tab: '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

/// Fields of the report submission form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    pub location: String,
}

impl ReportForm {
    pub fn to_dto(&self) -> CreateReportDto {
        CreateReportDto {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            status: None,
        }
    }
}

impl From<&Report> for ReportForm {
    fn from(report: &Report) -> Self {
        Self {
            title: report.title.clone(),
            description: report.description.clone(),
            location: report.location.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid report form: {0}")]
    InvalidForm(#[from] ValidationErrors),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// In-memory state behind the dashboard shell
pub struct DashboardState {
    client: ReportsClient,
    active_tab: Tab,
    reports: Vec<Report>,
    form: ReportForm,
    editing: Option<i64>,
    notifications: SharedNotifications,
}

impl DashboardState {
    pub fn new(client: ReportsClient) -> Self {
        Self {
            client,
            active_tab: Tab::default(),
            reports: Vec::new(),
            form: ReportForm::default(),
            editing: None,
            notifications: Arc::new(Mutex::new(NotificationQueue::default())),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReportForm {
        &mut self.form
    }

    pub fn form_mode(&self) -> FormMode {
        match self.editing {
            Some(id) => FormMode::Update(id),
            None => FormMode::Create,
        }
    }

    pub fn notifications(&self) -> SharedNotifications {
        Arc::clone(&self.notifications)
    }

    /// Start the synthetic notification ticker on the current runtime
    pub fn spawn_notification_ticker(&self) -> JoinHandle<()> {
        let ticker = NotificationTicker::new(self.notifications());
        tokio::spawn(async move { ticker.run().await })
    }

    /// Refresh the cached report list. On failure the previous list is kept.
    pub async fn load_reports(&mut self) -> Result<(), DashboardError> {
        match self.client.fetch_reports().await {
            Ok(reports) => {
                self.reports = reports;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching reports: {}", e);
                Err(e.into())
            }
        }
    }

    /// Select a report for editing and copy its fields into the form
    pub fn begin_edit(&mut self, report: &Report) {
        self.form = ReportForm::from(report);
        self.editing = Some(report.id);
    }

    pub fn cancel_edit(&mut self) {
        self.form = ReportForm::default();
        self.editing = None;
    }

    /// Create or update depending on the form mode, then reset the form and
    /// reload the list. The form is left untouched when submission fails.
    pub async fn submit_report(&mut self) -> Result<(), DashboardError> {
        let dto = self.form.to_dto();
        dto.validate()?;

        let submitted = match self.form_mode() {
            FormMode::Create => self.client.create_report(&dto).await.map(|_| ()),
            FormMode::Update(id) => self.client.update_report(id, &dto).await.map(|_| ()),
        };

        if let Err(e) = submitted {
            tracing::error!("Error submitting report: {}", e);
            return Err(e.into());
        }

        self.cancel_edit();
        self.load_reports().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::spawn_api;

    fn fill_form(state: &mut DashboardState) {
        let form = state.form_mut();
        form.title = "Saluran tersumbat".to_string();
        form.description = "Air menggenang di depan pasar".to_string();
        form.location = "Pasar Baru".to_string();
    }

    #[test]
    fn test_tab_keys_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.key().parse::<Tab>(), Ok(tab));
        }
        assert_eq!(Tab::default(), Tab::Home);
        assert_eq!(Tab::AirQuality.to_string(), "airQuality");
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn test_form_mode_follows_selection() {
        let mut state = DashboardState::new(ReportsClient::default());
        assert_eq!(state.form_mode(), FormMode::Create);

        state.select_tab(Tab::Report);
        assert_eq!(state.active_tab(), Tab::Report);

        let report = Report {
            id: 3,
            title: "Bau menyengat".to_string(),
            description: "Dari TPS".to_string(),
            location: "RT 04".to_string(),
            status: "pending".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        state.begin_edit(&report);
        assert_eq!(state.form_mode(), FormMode::Update(3));
        assert_eq!(state.form().title, "Bau menyengat");

        state.cancel_edit();
        assert_eq!(state.form_mode(), FormMode::Create);
        assert_eq!(state.form(), &ReportForm::default());
    }

    #[tokio::test]
    async fn test_submit_creates_report_resets_form_and_reloads() {
        let mut state = DashboardState::new(ReportsClient::new(spawn_api().await));
        fill_form(&mut state);

        state.submit_report().await.unwrap();

        assert_eq!(state.form(), &ReportForm::default());
        assert_eq!(state.reports().len(), 1);
        assert_eq!(state.reports()[0].title, "Saluran tersumbat");
        assert_eq!(state.reports()[0].status, "pending");
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_form_without_calling_api() {
        let mut state = DashboardState::new(ReportsClient::new(spawn_api().await));

        let err = state.submit_report().await.unwrap_err();
        assert!(matches!(err, DashboardError::InvalidForm(_)));

        state.load_reports().await.unwrap();
        assert!(state.reports().is_empty());
    }

    #[tokio::test]
    async fn test_update_submission_surfaces_api_error_and_keeps_form() {
        let mut state = DashboardState::new(ReportsClient::new(spawn_api().await));
        fill_form(&mut state);
        state.submit_report().await.unwrap();

        let report = state.reports()[0].clone();
        state.begin_edit(&report);
        state.form_mut().title = "Saluran sudah dibersihkan".to_string();

        let err = state.submit_report().await.unwrap_err();
        assert!(matches!(err, DashboardError::Client(ClientError::Api { .. })));
        assert_eq!(state.form_mode(), FormMode::Update(report.id));
        assert_eq!(state.form().title, "Saluran sudah dibersihkan");
    }
}
