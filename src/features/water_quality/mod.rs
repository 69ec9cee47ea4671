//! Water quality samples (pH, turbidity, E. coli count).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/water-quality` | List all samples |
//! | POST | `/api/water-quality` | Record a sample |
//! | GET | `/api/water-quality/{id}` | Get a sample |
//! | PUT | `/api/water-quality/{id}` | Update supplied fields |
//! | DELETE | `/api/water-quality/{id}` | Delete a sample |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;

use crate::core::repository::SqlRepository;

pub type WaterQualityRepository = SqlRepository<models::WaterQuality>;
