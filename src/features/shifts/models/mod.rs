mod shift;

pub use shift::{Shift, ShiftType};
