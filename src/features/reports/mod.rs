//! Citizen sanitation reports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reports` | List all reports |
//! | POST | `/api/reports` | Submit a report |
//! | GET | `/api/reports/{id}` | Get a report |
//!
//! Reports cannot be updated or deleted through the API; `PUT` and `DELETE`
//! on `/api/reports/{id}` answer 405.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

use crate::core::repository::SqlRepository;

pub type ReportRepository = SqlRepository<models::Report>;
