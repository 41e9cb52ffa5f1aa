//! Crew shift session shown in the operator panel.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/shift` | Current shift, if any |
//! | POST | `/api/shift` | Start a shift |
//! | DELETE | `/api/shift` | End the shift |
//! | POST | `/api/shift/online` | Toggle online/away |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ShiftService;
