//! `lottoai profile`: Pythagorean numerology portrait.

use super::reference_date_or_today;
use crate::output::{OutputMode, pretty_rule, pretty_section, render_mode};
use anyhow::Result;
use clap::Args;
use lottoai_core::NumerologyProfile;
use lottoai_core::model::{format_iso_date, parse_iso_date};
use lottoai_core::reading::{Reading, year_theme};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Full name as used every day.
    pub name: String,

    /// Birth date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub dob: String,

    /// Reference date for the personal year (YYYY-MM-DD); defaults to today.
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProfileOutput {
    name: String,
    birth_date: String,
    reference_date: String,
    profile: NumerologyProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    year_theme: Option<&'static str>,
}

pub fn run_profile(args: &ProfileArgs, output: OutputMode) -> Result<()> {
    let reference = reference_date_or_today(args.date.as_deref());
    let birth = parse_iso_date("birth date", &args.dob)?;
    let reference = parse_iso_date("reference date", &reference)?;
    let profile = NumerologyProfile::checked(&args.name, birth, reference)?;
    let report = ProfileOutput {
        name: args.name.trim().to_string(),
        birth_date: format_iso_date(birth),
        reference_date: format_iso_date(reference),
        year_theme: year_theme(profile.personal_year),
        profile,
    };

    render_mode(
        output,
        &report,
        |r, w| write_profile_text(w, &r.profile),
        |r, w| write_profile_pretty(w, &r.name, &r.profile),
    )
}

/// One `Label: N` line per number.
pub fn write_profile_text(w: &mut dyn Write, profile: &NumerologyProfile) -> io::Result<()> {
    for (label, value) in profile.entries() {
        writeln!(w, "{label}: {value}")?;
    }
    Ok(())
}

/// Numbers with their readings; personal year gets its theme sentence.
pub fn write_profile_pretty(
    w: &mut dyn Write,
    name: &str,
    profile: &NumerologyProfile,
) -> io::Result<()> {
    pretty_section(w, &format!("Numerology profile — {name}"))?;

    let [core @ .., (year_label, year)] = profile.entries();
    for (label, value) in core {
        write_reading(w, label, value)?;
    }

    writeln!(w, "{year_label}: {year}")?;
    if let Some(theme) = year_theme(year) {
        writeln!(w, "  {theme}")?;
    }
    pretty_rule(w)?;
    writeln!(w, "11 / 22 = master numbers (more intense energy).")
}

fn write_reading(w: &mut dyn Write, label: &str, value: u32) -> io::Result<()> {
    let Some(reading) = Reading::for_number(value) else {
        return writeln!(w, "{label}: {value}");
    };
    let marker = if reading.is_master() { " ★" } else { "" };
    writeln!(w, "{label}: {value}{marker} — {}", reading.keywords)?;
    writeln!(w, "  Strengths:   {}", reading.strengths.join("; "))?;
    writeln!(w, "  Challenges:  {}", reading.challenges.join("; "))?;
    writeln!(w, "  Suggestions: {}", reading.suggestions.join("; "))
}
