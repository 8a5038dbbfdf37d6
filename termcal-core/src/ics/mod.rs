//! ICS document generation.
//!
//! Renders built events into iCalendar text that common calendar
//! applications can open.

mod generate;

pub use generate::{format_datetime, generate_ics};
