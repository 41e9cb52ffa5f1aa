//! Sample registry contents.

use chrono::NaiveDate;

use crate::features::records::models::{CitizenRecord, RecordStatus};

const SAMPLE_RECORDS: [(&str, &str, (i32, u32, u32), &str, RecordStatus); 4] = [
    (
        "rec1",
        "Иванов Иван Иванович",
        (1985, 5, 15),
        "ул. Ленина, 45",
        RecordStatus::Wanted,
    ),
    (
        "rec2",
        "Петров Петр Петрович",
        (1990, 10, 22),
        "пр. Гагарина, 12",
        RecordStatus::UnderSurveillance,
    ),
    (
        "rec3",
        "Сидорова Анна Васильевна",
        (1978, 2, 3),
        "ул. Пушкина, 78",
        RecordStatus::Closed,
    ),
    (
        "rec4",
        "Козлов Александр Николаевич",
        (1982, 12, 11),
        "ул. Мира, 34",
        RecordStatus::Active,
    ),
];

pub fn sample_records() -> Vec<CitizenRecord> {
    SAMPLE_RECORDS
        .iter()
        .map(|(id, name, (y, m, d), address, status)| CitizenRecord {
            id: id.to_string(),
            full_name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap_or(NaiveDate::MIN),
            address: address.to_string(),
            status: *status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records() {
        let records = sample_records();
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0].date_of_birth,
            NaiveDate::from_ymd_opt(1985, 5, 15).unwrap()
        );
        assert_eq!(records[2].status, RecordStatus::Closed);
    }
}
