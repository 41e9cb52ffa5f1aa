//! Simulated live incident feed.
//!
//! Stands in for a real-time notification channel: once connected it
//! fabricates incidents at random intervals and hands them to every
//! listener, the incident board included.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/feed` | Connection status |
//! | POST | `/api/feed/connect` | Start the feed |
//! | POST | `/api/feed/disconnect` | Stop the feed |
//! | GET | `/api/feed/stream` | SSE stream of emitted incidents |

pub mod dtos;
pub mod generator;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::IncidentFeed;
