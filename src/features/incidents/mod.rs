//! Dispatcher incident board.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/incidents` | Active incidents, newest first |
//! | POST | `/api/incidents` | Create incident from the "new call" form |
//! | GET | `/api/incidents/archive` | Search archived incidents |
//! | GET | `/api/incidents/{id}` | Single incident |
//! | PATCH | `/api/incidents/{id}/status` | Advance the lifecycle |
//! | POST | `/api/incidents/{id}/archive` | Archive a resolved incident |

pub mod dtos;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use services::IncidentService;
