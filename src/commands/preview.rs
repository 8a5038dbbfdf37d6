use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::{SectionRecord, TermConvention, build_worklist_events};

use crate::render;

pub fn run(sections: Vec<SectionRecord>) -> Result<()> {
    let groups = super::group_by_worklist(sections);
    let total = groups.len();

    for (i, (worklist, group)) in groups.into_iter().enumerate() {
        match build_worklist_events(&group, TermConvention::Winter) {
            Ok(events) => {
                for list in events.values() {
                    println!("{}", render::render_worklist_header(worklist, list.len()));
                    for event in list {
                        println!("{}", render::render_event(event));
                    }
                }
            }
            Err(e) => {
                println!("{}", render::render_worklist_header(worklist, group.len()));
                println!("  {}", e.to_string().red());
            }
        }

        // Spacing between worklists, but not after the last one
        if i < total - 1 {
            println!();
        }
    }

    Ok(())
}
