//! Canned incidents the board starts with.

use chrono::{DateTime, Duration, Utc};

use crate::features::incidents::models::{
    Caller, Crew, Incident, IncidentStatus, IncidentType, Priority,
};

/// Incidents on the board when the service starts
pub fn initial_incidents(now: DateTime<Utc>) -> Vec<Incident> {
    vec![
        Incident {
            id: "inc-001".to_string(),
            incident_type: IncidentType::Accident,
            location: "ул. Ленина, 42".to_string(),
            description: "Столкновение двух автомобилей, есть пострадавшие".to_string(),
            priority: Priority::High,
            timestamp: now - Duration::minutes(15),
            status: IncidentStatus::InProgress,
            caller: Some(Caller {
                name: "Петров В.А.".to_string(),
                phone: "+79123456789".to_string(),
            }),
            assigned_crew: Some(Crew::Ap1),
            report: None,
        },
        Incident {
            id: "inc-002".to_string(),
            incident_type: IncidentType::Theft,
            location: "Торговый центр 'Заря', пр. Мира, 78".to_string(),
            description: "Кража сумки у посетителя".to_string(),
            priority: Priority::Medium,
            timestamp: now - Duration::minutes(45),
            status: IncidentStatus::New,
            caller: Some(Caller {
                name: "Иванова Е.С.".to_string(),
                phone: "+79234567890".to_string(),
            }),
            assigned_crew: None,
            report: None,
        },
    ]
}

/// Closed incidents shown in the archive
pub fn archived_incidents(now: DateTime<Utc>) -> Vec<Incident> {
    vec![
        Incident {
            id: "arc-001".to_string(),
            incident_type: IncidentType::PublicDisorder,
            location: "Парк Культуры".to_string(),
            description: "Группа молодых людей нарушает общественный порядок".to_string(),
            priority: Priority::Low,
            timestamp: now - Duration::days(2),
            status: IncidentStatus::Archived,
            caller: None,
            assigned_crew: Some(Crew::Pps101),
            report: Some(
                "Проведена профилактическая беседа, нарушители покинули парк".to_string(),
            ),
        },
        Incident {
            id: "arc-002".to_string(),
            incident_type: IncidentType::Medical,
            location: "ул. Советская, 12".to_string(),
            description: "Пожилому человеку стало плохо на улице".to_string(),
            priority: Priority::Medium,
            timestamp: now - Duration::days(3),
            status: IncidentStatus::Archived,
            caller: None,
            assigned_crew: Some(Crew::Ap2),
            report: Some("Вызвана скорая помощь, пострадавший госпитализирован".to_string()),
        },
        Incident {
            id: "arc-003".to_string(),
            incident_type: IncidentType::Assault,
            location: "Клуб 'Фортуна', ул. Гагарина, 56".to_string(),
            description: "Драка между посетителями".to_string(),
            priority: Priority::High,
            timestamp: now - Duration::days(4),
            status: IncidentStatus::Archived,
            caller: None,
            assigned_crew: Some(Crew::Pps103),
            report: Some("Зачинщики доставлены в отдел, составлены протоколы".to_string()),
        },
    ]
}
