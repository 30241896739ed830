use super::game::Game;
use crate::error::GenerateError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ISO calendar date format accepted and emitted everywhere.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` date, naming the offending field on failure.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidDate`] if `value` is not a calendar date.
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, GenerateError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE).map_err(|_| GenerateError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Render a date in the canonical ISO form.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// The four fields that fully determine a combination.
///
/// There is no hidden input: `reference_date` stands in for "today", so the
/// caller decides what day it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub reference_date: NaiveDate,
    pub game: Game,
}

impl GenerationRequest {
    /// Build a request from already-typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidName`] if `name` is blank.
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        reference_date: NaiveDate,
        game: Game,
    ) -> Result<Self, GenerateError> {
        let name = name.into();
        if crate::key::normalize_name(&name).is_empty() {
            return Err(GenerateError::InvalidName);
        }
        Ok(Self {
            name,
            birth_date,
            reference_date,
            game,
        })
    }

    /// Validate raw string inputs, as they arrive from a form or command line.
    ///
    /// # Errors
    ///
    /// Fails fast on a blank name, an unparseable date, or an unknown game.
    pub fn parse(
        name: &str,
        birth_date: &str,
        reference_date: &str,
        game: &str,
    ) -> Result<Self, GenerateError> {
        let birth_date = parse_iso_date("birth date", birth_date)?;
        let reference_date = parse_iso_date("reference date", reference_date)?;
        let game = game.parse::<Game>()?;
        Self::new(name, birth_date, reference_date, game)
    }

    /// The canonical key string this request hashes to.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        crate::key::canonical_key(
            &self.name,
            &format_iso_date(self.birth_date),
            &format_iso_date(self.reference_date),
            self.game,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_inputs() {
        let req = GenerationRequest::parse("Mario Rossi", "1980-05-12", "2024-01-01", "LOTTO")
            .expect("valid request");
        assert_eq!(req.game, Game::Lotto);
        assert_eq!(req.birth_date, NaiveDate::from_ymd_opt(1980, 5, 12).expect("date"));
        assert_eq!(req.canonical_key(), "mario rossi|1980-05-12|2024-01-01|lotto");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = GenerationRequest::parse("   ", "1980-05-12", "2024-01-01", "lotto")
            .expect_err("blank name");
        assert_eq!(err, GenerateError::InvalidName);
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let err = GenerationRequest::parse("Mario", "1981-02-29", "2024-01-01", "lotto")
            .expect_err("not a leap year");
        assert_eq!(
            err,
            GenerateError::InvalidDate {
                field: "birth date",
                value: "1981-02-29".into(),
            }
        );
    }

    #[test]
    fn reference_date_field_is_named() {
        let err = GenerationRequest::parse("Mario", "1980-05-12", "yesterday", "lotto")
            .expect_err("bad reference date");
        assert!(matches!(
            err,
            GenerateError::InvalidDate {
                field: "reference date",
                ..
            }
        ));
    }

    #[test]
    fn unknown_game_is_rejected() {
        let err = GenerationRequest::parse("Mario", "1980-05-12", "2024-01-01", "eurojackpot")
            .expect_err("unknown game");
        assert_eq!(err, GenerateError::UnknownGame("eurojackpot".into()));
    }
}
