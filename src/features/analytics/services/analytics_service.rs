use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::features::analytics::dtos::*;
use crate::features::incidents::models::{Incident, IncidentStatus, IncidentType, Priority};
use crate::features::incidents::IncidentService;

/// Number of months covered by the trend charts
const MONTHS_SHOWN: u32 = 6;

const MONTH_LABELS: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

/// Service for the analytics page
pub struct AnalyticsService {
    incidents: Arc<IncidentService>,
    rng: Mutex<StdRng>,
}

impl AnalyticsService {
    pub fn new(incidents: Arc<IncidentService>, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            incidents,
            rng: Mutex::new(rng),
        }
    }

    /// Fresh mock statistics
    pub fn stats(&self) -> IncidentStatsDto {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_incident_stats(&mut *rng, Utc::now())
    }

    /// Live counts over the board
    pub fn summary(&self) -> BoardSummaryDto {
        summarize(&self.incidents.snapshot())
    }
}

/// Labels of the last `MONTHS_SHOWN` months, oldest first
fn month_labels(now: DateTime<Utc>) -> Vec<String> {
    let current = now.month0();
    (0..MONTHS_SHOWN)
        .rev()
        .map(|back| MONTH_LABELS[((current + 12 - back) % 12) as usize].to_string())
        .collect()
}

/// Random statistics in the shape the analytics charts expect
pub fn generate_incident_stats<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> IncidentStatsDto {
    let months = month_labels(now);

    let incidents_by_type: Vec<TypeSeriesDto> = IncidentType::ALL
        .iter()
        .map(|t| TypeSeriesDto {
            incident_type: *t,
            name: t.label().to_string(),
            data: (0..months.len()).map(|_| rng.gen_range(5..=50)).collect(),
        })
        .collect();

    let priority_distribution = Priority::ALL
        .iter()
        .map(|p| PriorityShareDto {
            priority: *p,
            name: p.label().to_string(),
            value: rng.gen_range(10..=100),
        })
        .collect();

    let total_incidents: u32 = incidents_by_type
        .iter()
        .filter_map(|series| series.data.last())
        .sum();
    let resolved_incidents = rng.gen_range(total_incidents / 2..=total_incidents);
    let average_response_time = rng.gen_range(5..=25);

    IncidentStatsDto {
        months,
        incidents_by_type,
        priority_distribution,
        total_incidents,
        resolved_incidents,
        average_response_time,
    }
}

/// Counts by status, type and priority; every variant is listed, zeros included
pub fn summarize(incidents: &[Incident]) -> BoardSummaryDto {
    let by_status = IncidentStatus::ALL
        .iter()
        .map(|s| StatusCountDto {
            status: *s,
            count: incidents.iter().filter(|i| i.status == *s).count(),
        })
        .collect();

    let by_type = IncidentType::ALL
        .iter()
        .map(|t| TypeCountDto {
            incident_type: *t,
            name: t.label().to_string(),
            count: incidents.iter().filter(|i| i.incident_type == *t).count(),
        })
        .collect();

    let by_priority = Priority::ALL
        .iter()
        .map(|p| PriorityCountDto {
            priority: *p,
            name: p.label().to_string(),
            count: incidents.iter().filter(|i| i.priority == *p).count(),
        })
        .collect();

    BoardSummaryDto {
        total: incidents.len(),
        active: incidents.iter().filter(|i| i.is_active()).count(),
        by_status,
        by_type,
        by_priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::incidents::seed;
    use chrono::TimeZone;

    #[test]
    fn test_month_labels_wrap_year() {
        let february = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        assert_eq!(
            month_labels(february),
            vec!["Сен", "Окт", "Ноя", "Дек", "Янв", "Фев"]
        );
    }

    #[test]
    fn test_generated_stats_are_consistent() {
        let mut rng = StdRng::seed_from_u64(9);
        let stats = generate_incident_stats(&mut rng, Utc::now());

        assert_eq!(stats.months.len(), MONTHS_SHOWN as usize);
        assert_eq!(stats.incidents_by_type.len(), IncidentType::ALL.len());
        assert!(stats
            .incidents_by_type
            .iter()
            .all(|s| s.data.len() == stats.months.len()));
        assert_eq!(stats.priority_distribution.len(), 3);

        let latest: u32 = stats
            .incidents_by_type
            .iter()
            .map(|s| *s.data.last().unwrap())
            .sum();
        assert_eq!(stats.total_incidents, latest);
        assert!(stats.resolved_incidents <= stats.total_incidents);
        assert!((5..=25).contains(&stats.average_response_time));
    }

    #[test]
    fn test_summary_counts_seed_board() {
        let now = Utc::now();
        let board: Vec<Incident> = seed::initial_incidents(now)
            .into_iter()
            .chain(seed::archived_incidents(now))
            .collect();

        let summary = summarize(&board);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.active, 2);

        let archived = summary
            .by_status
            .iter()
            .find(|c| c.status == IncidentStatus::Archived)
            .unwrap();
        assert_eq!(archived.count, 3);

        let fires = summary
            .by_type
            .iter()
            .find(|c| c.incident_type == IncidentType::Fire)
            .unwrap();
        assert_eq!(fires.count, 0);

        let total_by_priority: usize = summary.by_priority.iter().map(|c| c.count).sum();
        assert_eq!(total_by_priority, 5);
    }
}
