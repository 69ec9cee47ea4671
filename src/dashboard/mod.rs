//! Dashboard client: report API client, UI-shell state, synthetic
//! notifications and the static panel series.

pub mod client;
pub mod mock_data;
pub mod notifications;
pub mod state;

pub use client::{ClientError, ReportsClient};
pub use notifications::{Notification, NotificationQueue, NotificationTicker};
pub use state::{DashboardError, DashboardState, FormMode, ReportForm, Tab};
