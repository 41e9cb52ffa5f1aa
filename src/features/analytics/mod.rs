//! Analytics page.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/analytics/stats` | Mock monthly statistics for the charts |
//! | GET | `/api/analytics/summary` | Live counts over the incident board |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AnalyticsService;
