pub mod analytics;
pub mod chat;
pub mod feed;
pub mod incidents;
pub mod records;
pub mod shifts;
