use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::core::error::{AppError, Result};
use crate::features::feed::services::{IncidentFeed, ListenerHandle};
use crate::features::incidents::dtos::{CreateIncidentDto, UpdateIncidentStatusDto};
use crate::features::incidents::lifecycle::{attempt_transition, TransitionContext};
use crate::features::incidents::models::{
    active_incidents, Incident, IncidentStatus, NewIncident,
};
use crate::features::incidents::seed;
use crate::shared::types::PaginationQuery;

/// Service owning the dispatcher's incident board.
///
/// The board is seeded with the canned incidents and listens on the feed,
/// so generated and operator-created incidents both arrive through
/// `receive`, newest first.
pub struct IncidentService {
    incidents: RwLock<Vec<Incident>>,
    feed: Arc<IncidentFeed>,
    subscription: Mutex<Option<ListenerHandle>>,
}

impl IncidentService {
    pub fn new(feed: Arc<IncidentFeed>, now: DateTime<Utc>) -> Arc<Self> {
        let incidents = seed::initial_incidents(now)
            .into_iter()
            .chain(seed::archived_incidents(now))
            .collect();

        let service = Arc::new(Self {
            incidents: RwLock::new(incidents),
            feed: Arc::clone(&feed),
            subscription: Mutex::new(None),
        });

        let board = Arc::downgrade(&service);
        let handle = feed.add_listener(move |incident| {
            if let Some(board) = board.upgrade() {
                board.receive(incident.clone());
            }
        });
        *service
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);

        service
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Incident>> {
        self.incidents.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Incident>> {
        self.incidents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Put an emitted incident at the top of the board.
    /// Returns false when an incident with the same id is already present.
    pub fn receive(&self, incident: Incident) -> bool {
        let mut incidents = self.write();
        if incidents.iter().any(|i| i.id == incident.id) {
            tracing::warn!("Dropping duplicate incident id={}", incident.id);
            return false;
        }

        tracing::debug!("Incident {} added to board", incident.id);
        incidents.insert(0, incident);
        true
    }

    /// Incidents that are not archived, newest first
    pub fn list_active(&self) -> Vec<Incident> {
        active_incidents(&self.read())
    }

    /// Everything on the board, archived included
    pub fn snapshot(&self) -> Vec<Incident> {
        self.read().clone()
    }

    pub fn get(&self, id: &str) -> Result<Incident> {
        self.read()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    /// Archived incidents matching `search`, paginated.
    /// Returns (incidents, total_count)
    pub fn list_archived(
        &self,
        search: Option<&str>,
        pagination: &PaginationQuery,
    ) -> (Vec<Incident>, i64) {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let matching: Vec<Incident> = self
            .read()
            .iter()
            .filter(|i| i.status == IncidentStatus::Archived)
            .filter(|i| match &needle {
                Some(needle) => {
                    i.incident_type.label().to_lowercase().contains(needle)
                        || i.location.to_lowercase().contains(needle)
                        || i.description.to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect();

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit() as usize)
            .collect();

        (page, total)
    }

    /// Create an incident from the operator form and broadcast it on the feed
    pub fn create(&self, dto: CreateIncidentDto) -> Incident {
        let incident = Incident::from_new(NewIncident::from(dto), Utc::now());

        tracing::info!(
            "Incident created: id={}, type={}, priority={}",
            incident.id,
            incident.incident_type,
            incident.priority
        );

        // The board's own listener stores it
        self.feed.add_incident(incident)
    }

    /// Advance an incident through the lifecycle
    pub fn update_status(&self, id: &str, dto: &UpdateIncidentStatusDto) -> Result<Incident> {
        self.apply_transition(id, dto.status, &TransitionContext::from(dto))
    }

    /// Move a resolved incident into the archive
    pub fn archive(&self, id: &str) -> Result<Incident> {
        self.apply_transition(id, IncidentStatus::Archived, &TransitionContext::default())
    }

    fn apply_transition(
        &self,
        id: &str,
        target: IncidentStatus,
        context: &TransitionContext,
    ) -> Result<Incident> {
        let mut incidents = self.write();
        let slot = incidents
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))?;

        let updated = attempt_transition(slot, target, context).map_err(|rejection| {
            tracing::debug!("Transition of incident {} rejected: {}", id, rejection);
            AppError::from(rejection)
        })?;

        tracing::info!(
            "Incident status updated: id={}, {} -> {}, crew={}",
            id,
            slot.status,
            updated.status,
            updated
                .assigned_crew
                .map(|c| c.call_sign())
                .unwrap_or("-")
        );

        *slot = updated.clone();
        Ok(updated)
    }
}

impl Drop for IncidentService {
    fn drop(&mut self) {
        let handle = self
            .subscription
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.unsubscribe();
        }
    }
}
