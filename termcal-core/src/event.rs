//! Derived calendar event type.

use chrono::NaiveDateTime;

/// A weekly-recurring calendar event derived from one course section.
///
/// Start and end are floating local times (no timezone) on the same
/// calendar day: the section's first actual meeting. The weekly pattern and
/// the inclusive end bound live in `recurrence_rule`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub recurrence_rule: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
