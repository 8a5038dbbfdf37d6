//! Term-start conventions for locating a section's first meeting.

use crate::weekday::MeetingDay;

/// How a term anchors its first week.
///
/// A section's date range starts on the first day of the term, not on the
/// section's first meeting day. The convention knows which weekday the term
/// opens on and how many days separate it from each meeting day. Other term
/// types (e.g. a summer term opening on a different weekday) become new
/// variants here without touching the builder loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermConvention {
    /// Winter terms begin on a Tuesday.
    #[default]
    Winter,
}

impl TermConvention {
    /// Days from the term's opening day to the first occurrence of `day`.
    ///
    /// Winter terms open on a Tuesday, so a Monday meeting wraps into the
    /// following week.
    pub fn day_offset(&self, day: MeetingDay) -> i64 {
        match self {
            TermConvention::Winter => match day {
                MeetingDay::Mon => 6,
                MeetingDay::Tue => 0,
                MeetingDay::Wed => 1,
                MeetingDay::Thu => 2,
                MeetingDay::Fri => 3,
            },
        }
    }

    /// Days from the term's opening day to the section's first meeting.
    ///
    /// The first listed day drives the offset, except when it is a Monday:
    /// a Monday-only section first meets in week two, while a section that
    /// also meets later in the week first meets on its second listed day.
    pub fn first_meeting_offset(&self, days: &[MeetingDay]) -> i64 {
        match days {
            [MeetingDay::Mon] => self.day_offset(MeetingDay::Mon),
            [MeetingDay::Mon, second, ..] => self.day_offset(*second),
            [first, ..] => self.day_offset(*first),
            [] => 0,
        }
    }
}
