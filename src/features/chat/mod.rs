//! Operator chat with the dispatch centre.
//!
//! The centre side is simulated: every operator message gets a canned
//! acknowledgement after a short delay.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/chat/messages` | Conversation, oldest first |
//! | POST | `/api/chat/messages` | Send a message |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ChatService;
