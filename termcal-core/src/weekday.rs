//! Weekday enumeration for section meeting patterns.

use serde::{Deserialize, Serialize};

/// A weekday on which a section can meet.
///
/// Sections only meet Monday through Friday. Anything else in the input
/// (weekend days, misspellings) is rejected at parse time instead of being
/// carried through to the rendered calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl MeetingDay {
    /// Parse the short English day name used in section records.
    pub fn from_short_name(name: &str) -> Option<Self> {
        match name {
            "Mon" => Some(MeetingDay::Mon),
            "Tue" => Some(MeetingDay::Tue),
            "Wed" => Some(MeetingDay::Wed),
            "Thu" => Some(MeetingDay::Thu),
            "Fri" => Some(MeetingDay::Fri),
            _ => None,
        }
    }

    /// The two-letter weekday code used in RRULE BYDAY lists.
    pub fn byday_code(&self) -> &'static str {
        match self {
            MeetingDay::Mon => "MO",
            MeetingDay::Tue => "TU",
            MeetingDay::Wed => "WE",
            MeetingDay::Thu => "TH",
            MeetingDay::Fri => "FR",
        }
    }
}
