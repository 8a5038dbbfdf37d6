//! Externally-supplied course-section records.
//!
//! These mirror the JSON exported by the course-planner frontend. They are
//! treated as read-only input: validation happens in `builder`, not here.

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;

/// One saved course section, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    /// Display code, e.g. "CPSC 310 L1A" (becomes the event title).
    pub code: String,
    /// Full course name (becomes the event description).
    pub name: String,
    /// Grouping key: one calendar file is produced per worklist.
    pub worklist_number: u32,
    /// Meeting patterns; only the first entry is considered.
    pub section_details: Vec<SectionDetail>,
}

/// One meeting pattern of a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDetail {
    pub term: String,
    /// Ordered short weekday names, e.g. ["Mon", "Wed", "Fri"].
    pub days: Vec<String>,
    /// 24-hour "HH:MM".
    pub start_time: String,
    /// 24-hour "HH:MM".
    pub end_time: String,
    pub location: Option<String>,
    /// "YYYY-MM-DD - YYYY-MM-DD". Multi-term sections may list more dates,
    /// of which only the first and last bound the recurrence window.
    pub date_range: String,
}

/// Parse a JSON array of section records.
pub fn sections_from_json(json: &str) -> ExportResult<Vec<SectionRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;

    #[test]
    fn parses_camel_case_records() {
        let json = r#"[{
            "code": "CPSC 310 L1A",
            "name": "Introduction to Software Engineering",
            "worklistNumber": 2,
            "sectionDetails": [{
                "term": "Winter Term 2",
                "days": ["Mon", "Wed"],
                "startTime": "10:00",
                "endTime": "11:00",
                "location": "SWNG 121",
                "dateRange": "2025-01-06 - 2025-03-07"
            }]
        }]"#;

        let sections = sections_from_json(json).unwrap();
        assert_eq!(sections.len(), 1);

        let section = &sections[0];
        assert_eq!(section.code, "CPSC 310 L1A");
        assert_eq!(section.worklist_number, 2);

        let detail = &section.section_details[0];
        assert_eq!(detail.days, vec!["Mon", "Wed"]);
        assert_eq!(detail.start_time, "10:00");
        assert_eq!(detail.location.as_deref(), Some("SWNG 121"));
        assert_eq!(detail.date_range, "2025-01-06 - 2025-03-07");
    }

    #[test]
    fn location_is_optional() {
        let json = r#"[{
            "code": "MATH 100 101",
            "name": "Differential Calculus",
            "worklistNumber": 1,
            "sectionDetails": [{
                "term": "Winter Term 1",
                "days": ["Tue"],
                "startTime": "09:00",
                "endTime": "10:00",
                "dateRange": "2024-09-03 - 2024-12-06"
            }]
        }]"#;

        let sections = sections_from_json(json).unwrap();
        assert_eq!(sections[0].section_details[0].location, None);
    }

    #[test]
    fn invalid_json_is_a_typed_error() {
        let err = sections_from_json("not json").unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }
}
