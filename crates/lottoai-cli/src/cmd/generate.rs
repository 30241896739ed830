//! `lottoai generate`: the personal combination for a name, birth date and day.

use super::{profile, reference_date_or_today};
use crate::history::{HistoryEntry, HistoryStore};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};
use anyhow::Result;
use clap::Args;
use lottoai_core::model::format_iso_date;
use lottoai_core::{CombinationResult, Game, GenerationRequest, NumerologyProfile, generate};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Full name; case and surrounding spaces do not affect the result.
    pub name: String,

    /// Birth date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub dob: String,

    /// Reference date (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Game: lotto or superenalotto (default from config, else lotto).
    #[arg(long)]
    pub game: Option<String>,

    /// Save the combination to the history file.
    #[arg(long)]
    pub save: bool,

    /// Also show the numerology profile.
    #[arg(long)]
    pub profile: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub name: String,
    pub birth_date: String,
    pub reference_date: String,
    pub game: Game,
    pub seed: String,
    pub result: CombinationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<NumerologyProfile>,
    pub saved: bool,
}

pub fn run_generate(
    args: &GenerateArgs,
    default_game: Game,
    history: &mut dyn HistoryStore,
    output: OutputMode,
) -> Result<()> {
    let reference = reference_date_or_today(args.date.as_deref());
    let game = args
        .game
        .clone()
        .unwrap_or_else(|| default_game.as_str().to_string());

    let request = GenerationRequest::parse(&args.name, &args.dob, &reference, &game)?;
    let seed = lottoai_core::generate::request_seed(&request);
    let result = generate(&request)?;

    if args.save {
        let ts = chrono::Utc::now().timestamp_millis();
        history.append(HistoryEntry::from_result(&result, ts))?;
        tracing::info!(title = %result.title, "combination saved to history");
    }

    let report = GenerateOutput {
        name: args.name.trim().to_string(),
        birth_date: format_iso_date(request.birth_date),
        reference_date: format_iso_date(request.reference_date),
        game: request.game,
        seed: seed.to_string(),
        profile: args.profile.then(|| {
            NumerologyProfile::compute(&request.name, request.birth_date, request.reference_date)
        }),
        result,
        saved: args.save,
    };

    render_mode(output, &report, render_text, render_pretty)
}

fn render_text(report: &GenerateOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{}", report.result.share_text())?;
    if let Some(profile) = &report.profile {
        profile::write_profile_text(w, profile)?;
    }
    Ok(())
}

fn render_pretty(report: &GenerateOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &report.result.title)?;
    pretty_kv(w, "Numbers", report.result.badges().join("  "))?;
    for extra in &report.result.extra {
        pretty_kv(w, &extra.label, format!("{:02}", extra.value))?;
    }
    pretty_kv(w, "Seed", &report.seed)?;
    if report.saved {
        writeln!(w, "✓ saved to history")?;
    }
    if let Some(profile) = &report.profile {
        writeln!(w)?;
        profile::write_profile_pretty(w, &report.name, profile)?;
    }
    Ok(())
}
