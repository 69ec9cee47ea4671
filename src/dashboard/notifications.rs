use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::{interval_at, Instant};

use crate::shared::constants::{
    NOTIFICATION_INTERVAL_SECS, NOTIFICATION_MESSAGE, NOTIFICATION_QUEUE_CAPACITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    /// Creation time in epoch milliseconds
    pub id: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            message: message.into(),
            kind: NotificationKind::Warning,
        }
    }
}

/// In-memory notification list that evicts the oldest entry when full
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_capacity(NOTIFICATION_QUEUE_CAPACITY)
    }
}

impl NotificationQueue {
    /// A capacity of zero is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the evicted notification, if any
    pub fn push(&mut self, notification: Notification) -> Option<Notification> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(notification);
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

pub type SharedNotifications = Arc<Mutex<NotificationQueue>>;

/// Background ticker that appends a synthetic warning every period
pub struct NotificationTicker {
    queue: SharedNotifications,
    period: Duration,
    message: String,
}

impl NotificationTicker {
    pub fn new(queue: SharedNotifications) -> Self {
        Self {
            queue,
            period: Duration::from_secs(NOTIFICATION_INTERVAL_SECS),
            message: NOTIFICATION_MESSAGE.to_string(),
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Run the ticker until the task is aborted. The first notification
    /// arrives one full period after start.
    pub async fn run(&self) {
        tracing::info!(
            "Starting notification ticker (every {:?})",
            self.period
        );

        let mut interval = interval_at(Instant::now() + self.period, self.period);

        loop {
            interval.tick().await;

            let mut queue = self.queue.lock().await;
            if let Some(evicted) = queue.push(Notification::warning(self.message.clone())) {
                tracing::debug!("Evicted notification {}", evicted.id);
            }
        }
    }
}
