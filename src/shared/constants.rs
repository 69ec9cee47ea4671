/// Fixed location of the SQLite database file
pub const DATABASE_URL: &str = "sqlite://database.sqlite";

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Base URL the dashboard client talks to by default
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

// =============================================================================
// DASHBOARD NOTIFICATIONS
// =============================================================================

/// Interval between synthetic dashboard notifications
pub const NOTIFICATION_INTERVAL_SECS: u64 = 10;

/// Maximum notifications kept in memory; the oldest are evicted first
pub const NOTIFICATION_QUEUE_CAPACITY: usize = 50;

/// Text of the synthetic notification
pub const NOTIFICATION_MESSAGE: &str =
    "Ada laporan baru tentang kebocoran pipa di Jalan Merdeka";
