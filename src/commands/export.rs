use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use termcal_core::{SectionRecord, TermConvention, build_worklist_events, worklist_downloads};

use crate::config::GlobalConfig;
use crate::render;

pub fn run(sections: Vec<SectionRecord>, out: Option<PathBuf>) -> Result<()> {
    let out_dir = match out {
        Some(dir) => dir,
        None => GlobalConfig::load()?.output_dir,
    };

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Could not create output directory {}", out_dir.display()))?;

    let groups = super::group_by_worklist(sections);
    let total = groups.len();
    let mut written = 0;

    // One worklist at a time so a malformed record only fails its own file.
    for (worklist, group) in groups {
        match build_worklist_events(&group, TermConvention::Winter) {
            Ok(events) => {
                let count: usize = events.values().map(Vec::len).sum();

                for download in worklist_downloads(&events) {
                    let path = out_dir.join(&download.filename);
                    fs::write(&path, &download.content)
                        .with_context(|| format!("Could not write {}", path.display()))?;

                    let detail = format!("({} {})", count, render::pluralize("event", count));
                    println!("  {} {}", download.filename.green(), detail.dimmed());
                    written += 1;
                }
            }
            Err(e) => {
                println!(
                    "  {} {}",
                    format!("worklist {}", worklist).red(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    println!(
        "Exported {} of {} {} to {}",
        written,
        total,
        render::pluralize("worklist", total),
        out_dir.display()
    );

    if written == 0 {
        anyhow::bail!("All worklists failed to export");
    }

    Ok(())
}
