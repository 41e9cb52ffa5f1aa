mod incident_feed;

pub use incident_feed::{IncidentFeed, ListenerHandle};
