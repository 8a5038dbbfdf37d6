mod commands;
mod config;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use termcal_core::{SectionRecord, sections_from_json};

#[derive(Parser)]
#[command(name = "termcal")]
#[command(about = "Export course-section worklists as iCalendar files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one .ics file per worklist
    Export {
        /// JSON file containing the saved section records
        sections: PathBuf,

        /// Directory to write the .ics files into (defaults to the
        /// configured output_dir, then the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Only export this worklist number
        #[arg(short, long)]
        worklist: Option<u32>,
    },
    /// Print the events that would be exported, without writing files
    Preview {
        /// JSON file containing the saved section records
        sections: PathBuf,

        /// Only preview this worklist number
        #[arg(short, long)]
        worklist: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            sections,
            out,
            worklist,
        } => {
            let records = load_sections(&sections, worklist)?;
            commands::export::run(records, out)
        }
        Commands::Preview { sections, worklist } => {
            let records = load_sections(&sections, worklist)?;
            commands::preview::run(records)
        }
    }
}

/// Read and parse the section records file, optionally keeping one worklist.
fn load_sections(path: &Path, worklist: Option<u32>) -> Result<Vec<SectionRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    let mut sections = sections_from_json(&json)
        .with_context(|| format!("Could not parse section records from {}", path.display()))?;

    if let Some(number) = worklist {
        sections.retain(|s| s.worklist_number == number);
    }

    if sections.is_empty() {
        match worklist {
            Some(number) => anyhow::bail!("No sections found for worklist {}", number),
            None => anyhow::bail!("No sections found in {}", path.display()),
        }
    }

    Ok(sections)
}
