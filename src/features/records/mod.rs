//! Citizen records registry, read-only.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/records` | Search records, paginated |
//! | GET | `/api/records/summary` | Registry counters |
//! | GET | `/api/records/{id}` | Single record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use services::RecordService;
