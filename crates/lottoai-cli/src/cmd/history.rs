//! `lottoai history`: list, remove, clear and export saved combinations.

use crate::history::{HistoryEntry, HistoryStore, JsonFileHistory};
use crate::output::{OutputMode, pretty_section, render_mode};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Local, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List saved combinations, newest first.
    List,
    /// Remove one entry by the index shown in `list`.
    Remove(RemoveArgs),
    /// Delete every saved entry.
    Clear,
    /// Write the history as a JSON array.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    pub index: usize,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Listing {
    entries: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
struct Changed {
    ok: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<HistoryEntry>,
}

pub fn run_history(
    command: &HistoryCommand,
    store: &mut JsonFileHistory,
    output: OutputMode,
) -> Result<()> {
    match command {
        HistoryCommand::List => run_list(&*store, output),
        HistoryCommand::Remove(args) => {
            let removed = store.remove(args.index)?;
            let changed = Changed {
                ok: true,
                message: format!("removed entry {}: {}", args.index, removed.title),
                removed: Some(removed),
            };
            render_changed(&changed, output)
        }
        HistoryCommand::Clear => {
            store.clear()?;
            let changed = Changed {
                ok: true,
                message: "history cleared".to_string(),
                removed: None,
            };
            render_changed(&changed, output)
        }
        HistoryCommand::Export(args) => {
            let json = store.export_json()?;
            match &args.output {
                Some(path) => {
                    fs::write(path, format!("{json}\n"))
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "history exported");
                }
                None => writeln!(io::stdout().lock(), "{json}")?,
            }
            Ok(())
        }
    }
}

fn run_list(store: &dyn HistoryStore, output: OutputMode) -> Result<()> {
    let listing = Listing {
        entries: store.list()?,
    };
    render_mode(output, &listing, write_list_text, write_list_pretty)
}

fn render_changed(changed: &Changed, output: OutputMode) -> Result<()> {
    render_mode(
        output,
        changed,
        |c, w| writeln!(w, "{}", c.message),
        |c, w| writeln!(w, "✓ {}", c.message),
    )
}

fn write_list_text(listing: &Listing, w: &mut dyn Write) -> io::Result<()> {
    for (index, entry) in listing.entries.iter().enumerate() {
        writeln!(w, "{index}\t{}\t{}", entry.title, entry.summary())?;
    }
    Ok(())
}

fn write_list_pretty(listing: &Listing, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "History")?;
    if listing.entries.is_empty() {
        return writeln!(w, "No saved entries.");
    }
    for (index, entry) in listing.entries.iter().enumerate() {
        writeln!(w, "[{index}] {}  ({})", entry.title, saved_at(entry.ts))?;
        writeln!(w, "    {}", entry.summary())?;
    }
    Ok(())
}

fn saved_at(ts_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts_ms)
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts_ms.to_string())
}
