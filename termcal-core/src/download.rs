//! File-delivery triples for exported worklists.
//!
//! The delivery mechanism (writing to disk, serving over HTTP, a browser
//! save dialog) lives with the caller; this module only assembles what it
//! needs: a filename, the document text, and a MIME type per worklist.

use std::collections::BTreeMap;

use crate::event::CalendarEvent;
use crate::ics::generate_ics;

/// MIME type for delivered calendar files.
pub const CALENDAR_MIME: &str = "text/calendar;charset=utf-8";

/// One downloadable calendar file, ready for the delivery mechanism.
#[derive(Debug, Clone)]
pub struct Download {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

/// Render one download per worklist, in ascending worklist order.
pub fn worklist_downloads(groups: &BTreeMap<u32, Vec<CalendarEvent>>) -> Vec<Download> {
    groups
        .iter()
        .map(|(worklist, events)| Download {
            filename: format!("worklist_{}.ics", worklist),
            content: generate_ics(events),
            mime_type: CALENDAR_MIME,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_worklist_events;
    use crate::section::{SectionDetail, SectionRecord};
    use crate::term::TermConvention;
    use chrono::NaiveDate;

    fn event(title: &str) -> CalendarEvent {
        let start = NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        CalendarEvent {
            title: title.to_string(),
            description: "Some course".to_string(),
            location: None,
            recurrence_rule: "FREQ=WEEKLY;BYDAY=TU;INTERVAL=1;UNTIL=20250307T235900".to_string(),
            start,
            end: start + chrono::Duration::hours(1),
        }
    }

    #[test]
    fn one_download_per_worklist_in_ascending_order() {
        let mut groups = BTreeMap::new();
        groups.insert(3, vec![event("PHYS 131 T1B")]);
        groups.insert(1, vec![event("CPSC 310 L1A"), event("MATH 100 101")]);

        let downloads = worklist_downloads(&groups);

        let filenames: Vec<&str> = downloads.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(filenames, vec!["worklist_1.ics", "worklist_3.ics"]);
        assert!(downloads.iter().all(|d| d.mime_type == CALENDAR_MIME));
    }

    #[test]
    fn content_carries_only_the_group_events() {
        let mut groups = BTreeMap::new();
        groups.insert(1, vec![event("CPSC 310 L1A"), event("MATH 100 101")]);
        groups.insert(2, vec![event("PHYS 131 T1B")]);

        let downloads = worklist_downloads(&groups);

        assert!(downloads[0].content.contains("SUMMARY:CPSC 310 L1A"));
        assert!(downloads[0].content.contains("SUMMARY:MATH 100 101"));
        assert!(!downloads[0].content.contains("SUMMARY:PHYS 131 T1B"));
        assert!(downloads[1].content.contains("SUMMARY:PHYS 131 T1B"));
    }

    #[test]
    fn built_events_round_trip_into_their_group_document() {
        let sections = [SectionRecord {
            code: "CPSC 310 L1A".to_string(),
            name: "Introduction to Software Engineering".to_string(),
            worklist_number: 4,
            section_details: vec![SectionDetail {
                term: "Winter Term 2".to_string(),
                days: vec!["Mon".to_string(), "Wed".to_string()],
                start_time: "10:00".to_string(),
                end_time: "11:00".to_string(),
                location: Some("SWNG 121".to_string()),
                date_range: "2025-01-06 - 2025-03-07".to_string(),
            }],
        }];

        let groups = build_worklist_events(&sections, TermConvention::Winter).unwrap();
        let downloads = worklist_downloads(&groups);

        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].filename, "worklist_4.ics");

        let content = &downloads[0].content;
        assert_eq!(content.matches("BEGIN:VEVENT").count(), 1);
        assert!(content.contains("SUMMARY:CPSC 310 L1A"));
        assert!(content.contains("DESCRIPTION:Introduction to Software Engineering"));
        assert!(content.contains("LOCATION:SWNG 121"));
        assert!(content.contains("DTSTART:20250107T100000"));
        assert!(content.contains("DTEND:20250107T110000"));
        assert!(content.contains(
            "RRULE:FREQ=WEEKLY;BYDAY=MO,WE;INTERVAL=1;UNTIL=20250307T235900"
        ));
    }
}
