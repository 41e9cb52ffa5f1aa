mod shift_service;

pub use shift_service::ShiftService;
