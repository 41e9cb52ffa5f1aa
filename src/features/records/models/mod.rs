mod record;

pub use record::{CitizenRecord, RecordStatus};
