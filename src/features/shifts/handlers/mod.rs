mod shift_handler;

pub use shift_handler::*;
