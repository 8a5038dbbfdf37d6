//! Core types for the termcal ecosystem.
//!
//! This crate provides everything needed to turn saved course-section
//! records into downloadable iCalendar files, one per worklist:
//! - `section` holds the externally-supplied wire model
//! - `builder` turns sections into grouped recurring events
//! - `ics` serializes events into .ics documents
//! - `download` assembles the per-worklist delivery triples

pub mod builder;
pub mod download;
pub mod error;
pub mod event;
pub mod ics;
pub mod section;
pub mod term;
pub mod weekday;

pub use builder::build_worklist_events;
pub use download::{CALENDAR_MIME, Download, worklist_downloads};
pub use error::{ExportError, ExportResult};
pub use event::CalendarEvent;
pub use section::{SectionDetail, SectionRecord, sections_from_json};
pub use term::TermConvention;
pub use weekday::MeetingDay;
