//! Event Builder: course sections to grouped recurring events.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{ExportError, ExportResult};
use crate::event::CalendarEvent;
use crate::ics::format_datetime;
use crate::section::{SectionDetail, SectionRecord};
use crate::term::TermConvention;
use crate::weekday::MeetingDay;

/// Build one ordered event list per worklist number.
///
/// Pure and deterministic: the same sections and convention always produce
/// the same grouping. Groups iterate in ascending worklist order; events
/// within a group keep section input order. The first malformed record
/// aborts the build, so no partially-corrupt calendar can be emitted
/// downstream.
pub fn build_worklist_events(
    sections: &[SectionRecord],
    convention: TermConvention,
) -> ExportResult<BTreeMap<u32, Vec<CalendarEvent>>> {
    let mut by_worklist: BTreeMap<u32, Vec<CalendarEvent>> = BTreeMap::new();

    for (index, section) in sections.iter().enumerate() {
        let event = build_event(section, index, convention)?;
        by_worklist
            .entry(section.worklist_number)
            .or_default()
            .push(event);
    }

    Ok(by_worklist)
}

/// Build the recurring event for a single section.
fn build_event(
    section: &SectionRecord,
    index: usize,
    convention: TermConvention,
) -> ExportResult<CalendarEvent> {
    let detail = section.section_details.first().ok_or_else(|| {
        malformed(
            "sectionDetails",
            index,
            "section has no meeting pattern".to_string(),
        )
    })?;

    let days = parse_days(detail, index)?;
    let (range_start, range_end) = parse_date_range(detail, index)?;
    let start_time = parse_time(&detail.start_time, "startTime", index)?;
    let end_time = parse_time(&detail.end_time, "endTime", index)?;

    // The range starts on the term's opening day, not the section's first
    // meeting day; advance to the first occurrence.
    let first_meeting = range_start + Duration::days(convention.first_meeting_offset(&days));

    // End the recurrence at 23:59 on the last day of the range so the final
    // calendar day is included regardless of meeting time.
    let until = range_end.and_hms_opt(23, 59, 0).unwrap();

    let byday = days
        .iter()
        .map(|day| day.byday_code())
        .collect::<Vec<_>>()
        .join(",");

    let recurrence_rule = format!(
        "FREQ=WEEKLY;BYDAY={};INTERVAL=1;UNTIL={}",
        byday,
        format_datetime(&until)
    );

    Ok(CalendarEvent {
        title: section.code.clone(),
        description: section.name.clone(),
        location: detail.location.clone(),
        recurrence_rule,
        start: first_meeting.and_time(start_time),
        end: first_meeting.and_time(end_time),
    })
}

fn parse_days(detail: &SectionDetail, index: usize) -> ExportResult<Vec<MeetingDay>> {
    if detail.days.is_empty() {
        return Err(malformed("days", index, "no meeting days listed".to_string()));
    }

    detail
        .days
        .iter()
        .map(|name| {
            MeetingDay::from_short_name(name)
                .ok_or_else(|| malformed("days", index, format!("unknown weekday '{}'", name)))
        })
        .collect()
}

/// Split "YYYY-MM-DD - YYYY-MM-DD" into its first and last dates.
///
/// Multi-term sections list more than two dates; interior dates do not
/// bound the recurrence window and are ignored.
fn parse_date_range(detail: &SectionDetail, index: usize) -> ExportResult<(NaiveDate, NaiveDate)> {
    let tokens: Vec<&str> = detail.date_range.split(" - ").collect();

    if tokens.len() < 2 {
        return Err(malformed(
            "dateRange",
            index,
            format!("expected at least two dates, got '{}'", detail.date_range),
        ));
    }

    let start = parse_date(tokens[0], index)?;
    let end = parse_date(tokens[tokens.len() - 1], index)?;

    Ok((start, end))
}

fn parse_date(s: &str, index: usize) -> ExportResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        malformed(
            "dateRange",
            index,
            format!("invalid date '{}'. Expected YYYY-MM-DD", s),
        )
    })
}

fn parse_time(s: &str, field: &'static str, index: usize) -> ExportResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        malformed(field, index, format!("invalid time '{}'. Expected HH:MM", s))
    })
}

fn malformed(field: &'static str, section_index: usize, reason: String) -> ExportError {
    ExportError::MalformedSection {
        field,
        section_index,
        reason,
    }
}
