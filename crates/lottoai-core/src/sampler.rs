//! Turning a stream into a game combination.
//!
//! Draw order is part of the output: main numbers first, then the jolly, then
//! the superstar, all from the same stream.

use crate::error::GenerateError;
use crate::model::{CombinationResult, ExtraNumber, Game, JOLLY, SUPERSTAR};
use crate::stream::Xorshift32;
use std::collections::BTreeSet;

/// Lowest number on the board.
pub const BOARD_MIN: u8 = 1;
/// Highest number on the board.
pub const BOARD_MAX: u8 = 90;

/// One uniform draw in `[min, max]`: `floor(u * (max - min + 1)) + min`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw(stream: &mut Xorshift32, min: u8, max: u8) -> u8 {
    let span = f64::from(max) - f64::from(min) + 1.0;
    // u < 1, so the offset is at most span - 1 and fits the range.
    let offset = (stream.next_f64() * span).floor() as u8;
    min + offset
}

/// Draw until `count` distinct values in `[min, max]` are collected, sorted
/// ascending.
///
/// # Errors
///
/// Returns [`GenerateError::ImpossibleRange`] when the range holds fewer than
/// `count` values (including an inverted range), since the loop could never
/// finish.
pub fn pick_unique(
    stream: &mut Xorshift32,
    count: usize,
    min: u8,
    max: u8,
) -> Result<Vec<u8>, GenerateError> {
    let span = if max >= min {
        usize::from(max - min) + 1
    } else {
        0
    };
    if count > span {
        return Err(GenerateError::ImpossibleRange { count, min, max });
    }

    let mut picked = BTreeSet::new();
    let mut draws = 0usize;
    while picked.len() < count {
        picked.insert(draw(stream, min, max));
        draws += 1;
    }
    tracing::trace!(count, draws, "picked unique numbers");

    Ok(picked.into_iter().collect())
}

/// Build the combination for `game` from a fresh stream.
///
/// The jolly is rejection-sampled until it misses the main set. At most 6 of
/// 90 values are excluded per draw, so the loop ends almost surely. It has no
/// retry cap.
///
/// # Errors
///
/// Propagates [`GenerateError::ImpossibleRange`] from [`pick_unique`]; with
/// the fixed board this does not happen.
pub fn sample(
    stream: &mut Xorshift32,
    game: Game,
    reference_date: &str,
) -> Result<CombinationResult, GenerateError> {
    let main = pick_unique(stream, game.main_count(), BOARD_MIN, BOARD_MAX)?;

    let extra = match game {
        Game::Lotto => Vec::new(),
        Game::SuperEnalotto => {
            let mut rejected = 0u32;
            let jolly = loop {
                let candidate = draw(stream, BOARD_MIN, BOARD_MAX);
                if !main.contains(&candidate) {
                    break candidate;
                }
                rejected += 1;
            };
            if rejected > 0 {
                tracing::trace!(rejected, jolly, "jolly redrawn");
            }

            let superstar = draw(stream, BOARD_MIN, BOARD_MAX);
            vec![
                ExtraNumber::new(JOLLY, jolly),
                ExtraNumber::new(SUPERSTAR, superstar),
            ]
        }
    };

    Ok(CombinationResult {
        title: title(game, reference_date),
        main,
        extra,
    })
}

/// `"<GameLabel> — <referenceDate>"`.
#[must_use]
pub fn title(game: Game, reference_date: &str) -> String {
    format!("{} — {reference_date}", game.label())
}
