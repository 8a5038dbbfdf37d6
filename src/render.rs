//! Terminal rendering helpers for termcal output.

use owo_colors::OwoColorize;
use termcal_core::CalendarEvent;

/// Bold header line for one worklist group.
pub fn render_worklist_header(worklist: u32, count: usize) -> String {
    let label = format!(
        "Worklist {} ({} {})",
        worklist,
        count,
        pluralize("event", count)
    );
    label.bold().to_string()
}

/// One-line event summary: first meeting date, time span, title, dimmed
/// location.
pub fn render_event(event: &CalendarEvent) -> String {
    let date = event.start.format("%a %b %-d").to_string();
    let span = format!(
        "{}-{}",
        event.start.format("%H:%M"),
        event.end.format("%H:%M")
    );

    let mut line = format!("  {} {} {}", date, span, event.title);

    if let Some(ref loc) = event.location {
        line.push_str(&format!(" {}", loc.dimmed()));
    }

    line
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
