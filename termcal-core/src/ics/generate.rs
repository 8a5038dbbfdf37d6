//! ICS file generation.

use chrono::NaiveDateTime;
use icalendar::{Calendar, Component, EventLike};
use uuid::Uuid;

use crate::event::CalendarEvent;

/// Format a floating local date-time as the fixed-width token used for
/// DTSTART/DTEND values and RRULE UNTIL bounds: `YYYYMMDDTHHMMSS`.
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Generate one .ics document containing every event in the slice.
///
/// Events are emitted in input order, each as a weekly-recurring VEVENT
/// with floating local start/end times (no Z, no TZID) and the recurrence
/// rule verbatim.
pub fn generate_ics(events: &[CalendarEvent]) -> String {
    let mut cal = Calendar::new();

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@termcal", Uuid::new_v4()));
        ics_event.summary(&event.title);
        ics_event.description(&event.description);

        // DTSTAMP - required by RFC 5545
        let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);

        ics_event.add_property("DTSTART", format_datetime(&event.start));
        ics_event.add_property("DTEND", format_datetime(&event.end));

        if let Some(ref loc) = event.location {
            ics_event.location(loc);
        }

        ics_event.add_property("RRULE", &event.recurrence_rule);

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    strip_ics_bloat(&cal.to_string())
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with TERMCAL (we post-process the output)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:TERMCAL\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
