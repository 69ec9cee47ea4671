pub mod app;
pub mod core;
pub mod dashboard;
pub mod features;
pub mod shared;
