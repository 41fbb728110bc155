// src/utils/mod.rs

//! Small helpers shared by the API client and the UI

pub mod format;
pub mod time;

pub use format::{format_currency, format_datetime, format_percent, short_id};
pub use time::Time;
