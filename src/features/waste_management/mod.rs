//! Waste collection records (organic, plastic, paper and metal quantities).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/waste-management` | List all records |
//! | POST | `/api/waste-management` | Record a collection |
//! | GET | `/api/waste-management/{id}` | Get a record |
//! | PUT | `/api/waste-management/{id}` | Update supplied fields |
//! | DELETE | `/api/waste-management/{id}` | Delete a record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

use crate::core::repository::SqlRepository;

pub type WasteManagementRepository = SqlRepository<models::WasteManagement>;
