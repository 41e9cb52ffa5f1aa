#[cfg(test)]
use crate::core::config::FeedConfig;
#[cfg(test)]
use crate::features::incidents::models::{Incident, IncidentStatus, IncidentType, Priority};

/// Reference feed timing with a fixed seed, not auto-connected
#[cfg(test)]
pub fn test_feed_config() -> FeedConfig {
    FeedConfig {
        auto_connect: false,
        rng_seed: Some(1),
        ..FeedConfig::default()
    }
}

/// New, unassigned incident with the given id
#[cfg(test)]
pub fn sample_incident(id: &str) -> Incident {
    Incident {
        id: id.to_string(),
        incident_type: IncidentType::Fire,
        location: "ул. Пушкина, 23".to_string(),
        description: "Возгорание в подъезде".to_string(),
        priority: Priority::High,
        timestamp: chrono::Utc::now(),
        status: IncidentStatus::New,
        caller: None,
        assigned_crew: None,
        report: None,
    }
}
