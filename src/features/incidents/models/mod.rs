mod crew;
mod incident;

pub use crew::Crew;
pub use incident::{
    active_incidents, Caller, Incident, IncidentStatus, IncidentType, NewIncident, Priority,
};
