//! Pythagorean numerology.
//!
//! Every function here is pure arithmetic over the name and dates. Nothing is
//! shared with the seeding pipeline.

use crate::error::GenerateError;
use crate::model::parse_iso_date;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Uppercase, strip accents (NFD, then drop marks), keep `A`-`Z` only.
#[must_use]
pub fn only_letters(s: &str) -> String {
    s.to_uppercase()
        .nfd()
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Pythagorean value of an uppercase ASCII letter, 0 for anything else.
///
/// A J S = 1, B K T = 2, ... I R = 9.
#[must_use]
pub const fn letter_value(c: char) -> u32 {
    if c.is_ascii_uppercase() {
        (c as u32 - 'A' as u32) % 9 + 1
    } else {
        0
    }
}

/// `Y` counts as a vowel.
#[must_use]
pub const fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// Sum of decimal digits.
#[must_use]
pub const fn sum_digits(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digit reduction down to 1..=9, stopping early at 11 or 22.
///
/// Values above 22 are digit-summed until they are 22 or below; a master
/// number at that point is returned as is, otherwise reduction continues to a
/// single digit. `0` stays `0`.
#[must_use]
pub const fn reduce_num(mut n: u32) -> u32 {
    while n > 22 {
        n = sum_digits(n);
    }
    if is_master(n) {
        return n;
    }
    while n > 9 {
        n = sum_digits(n);
    }
    n
}

/// Whether `n` is a master number (11 or 22), never reduced further.
#[must_use]
pub const fn is_master(n: u32) -> bool {
    n == 11 || n == 22
}

fn year_digits(date: NaiveDate) -> u32 {
    sum_digits(date.year().unsigned_abs())
}

#[must_use]
pub fn life_path(birth_date: NaiveDate) -> u32 {
    reduce_num(year_digits(birth_date) + sum_digits(birth_date.month()) + sum_digits(birth_date.day()))
}

#[must_use]
pub fn day_number(birth_date: NaiveDate) -> u32 {
    reduce_num(birth_date.day())
}

/// Birth day and month with the reference year.
#[must_use]
pub fn personal_year(birth_date: NaiveDate, reference_date: NaiveDate) -> u32 {
    reduce_num(
        sum_digits(birth_date.day()) + sum_digits(birth_date.month()) + year_digits(reference_date),
    )
}

fn letter_sum(full_name: &str, keep: impl Fn(char) -> bool) -> u32 {
    only_letters(full_name)
        .chars()
        .filter(|&c| keep(c))
        .map(letter_value)
        .sum()
}

/// All letters of the name. Names without letters reduce to 0.
#[must_use]
pub fn expression_number(full_name: &str) -> u32 {
    reduce_num(letter_sum(full_name, |_| true))
}

/// Vowels only.
#[must_use]
pub fn soul_urge_number(full_name: &str) -> u32 {
    reduce_num(letter_sum(full_name, is_vowel))
}

/// Consonants only.
#[must_use]
pub fn personality_number(full_name: &str) -> u32 {
    reduce_num(letter_sum(full_name, |c| !is_vowel(c)))
}

/// The six derived numbers for one person on one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub day_number: u32,
    pub personal_year: u32,
}

impl NumerologyProfile {
    /// Compute from typed dates.
    #[must_use]
    pub fn compute(full_name: &str, birth_date: NaiveDate, reference_date: NaiveDate) -> Self {
        Self {
            life_path: life_path(birth_date),
            expression: expression_number(full_name),
            soul_urge: soul_urge_number(full_name),
            personality: personality_number(full_name),
            day_number: day_number(birth_date),
            personal_year: personal_year(birth_date, reference_date),
        }
    }

    /// Like [`NumerologyProfile::compute`], but rejects a blank name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidName`] if `full_name` is blank.
    pub fn checked(
        full_name: &str,
        birth_date: NaiveDate,
        reference_date: NaiveDate,
    ) -> Result<Self, GenerateError> {
        if crate::key::normalize_name(full_name).is_empty() {
            return Err(GenerateError::InvalidName);
        }
        Ok(Self::compute(full_name, birth_date, reference_date))
    }

    /// `(label, value)` pairs in display order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, u32); 6] {
        [
            ("Life Path", self.life_path),
            ("Expression", self.expression),
            ("Soul Urge", self.soul_urge),
            ("Personality", self.personality),
            ("Day Number", self.day_number),
            ("Personal Year", self.personal_year),
        ]
    }
}

/// Profile from raw ISO date strings.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidDate`] if either date does not parse and
/// [`GenerateError::InvalidName`] if the name is blank.
pub fn compute_numerology_profile(
    full_name: &str,
    birth_date: &str,
    reference_date: &str,
) -> Result<NumerologyProfile, GenerateError> {
    let birth = parse_iso_date("birth date", birth_date)?;
    let reference = parse_iso_date("reference date", reference_date)?;
    NumerologyProfile::checked(full_name, birth, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    #[test]
    fn pythagorean_table() {
        let expected = [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ];
        for (letters, value) in expected {
            for c in letters.chars() {
                assert_eq!(letter_value(c), value, "letter {c}");
            }
        }
        assert_eq!(letter_value('a'), 0);
        assert_eq!(letter_value('1'), 0);
    }

    #[test]
    fn only_letters_strips_accents_and_noise() {
        assert_eq!(only_letters("José Núñez-García 3rd"), "JOSENUNEZGARCIARD");
        assert_eq!(only_letters("Zoë Ångström"), "ZOEANGSTROM");
        assert_eq!(only_letters("  "), "");
    }

    #[test]
    fn reduce_num_keeps_master_numbers() {
        assert_eq!(reduce_num(11), 11);
        assert_eq!(reduce_num(22), 22);
        assert_eq!(reduce_num(29), 11);
        assert_eq!(reduce_num(38), 11);
        assert_eq!(reduce_num(23), 5);
        assert_eq!(reduce_num(48), 3);
        assert_eq!(reduce_num(99), 9);
        assert_eq!(reduce_num(0), 0);
    }

    #[test]
    fn life_path_example() {
        // 1+9+9+0 + 7 + 2+3 = 31 -> 4
        assert_eq!(life_path(date("1990-07-23")), 4);
    }

    #[test]
    fn personal_year_uses_reference_year() {
        // 5 + 7 + 5 = 17 -> 8
        assert_eq!(personal_year(date("1990-07-23"), date("2030-01-01")), 8);
    }

    #[test]
    fn day_number_can_be_master() {
        assert_eq!(day_number(date("1975-12-29")), 11);
        assert_eq!(day_number(date("1975-12-22")), 22);
        assert_eq!(day_number(date("1975-12-12")), 3);
    }

    #[test]
    fn mario_rossi_profile() {
        let profile = compute_numerology_profile("Mario Rossi", "1980-05-12", "2024-01-01")
            .expect("valid dates");
        assert_eq!(
            profile,
            NumerologyProfile {
                life_path: 8,
                expression: 1,
                soul_urge: 4,
                personality: 6,
                day_number: 3,
                personal_year: 7,
            }
        );
    }

    #[test]
    fn accented_name_profile() {
        let profile = NumerologyProfile::compute("Zoë Ångström", date("1975-12-29"), date("2024-06-01"));
        assert_eq!(profile.expression, 9);
        assert_eq!(profile.day_number, 11);
        assert_eq!(profile.personal_year, 22);
    }

    #[test]
    fn name_without_vowels_has_zero_soul_urge() {
        assert_eq!(soul_urge_number("Brr"), 0);
        assert_eq!(personality_number("Brr"), reduce_num(2 + 9 + 9));
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(compute_numerology_profile("Mario", "1980-02-30", "2024-01-01").is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        for name in ["", "   ", "\t\u{feff} "] {
            assert_eq!(
                compute_numerology_profile(name, "1980-05-12", "2024-01-01"),
                Err(GenerateError::InvalidName),
                "name {name:?}"
            );
        }
    }

    #[test]
    fn letterless_name_is_accepted() {
        let profile = compute_numerology_profile("42", "1980-05-12", "2024-01-01")
            .expect("non-blank name");
        assert_eq!(profile.expression, 0);
        assert_eq!(profile.life_path, 8);
    }
}
