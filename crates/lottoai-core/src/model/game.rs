use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The supported draw games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    #[default]
    Lotto,
    SuperEnalotto,
}

impl Game {
    /// Every supported game, in menu order.
    pub const ALL: [Self; 2] = [Self::Lotto, Self::SuperEnalotto];

    /// Token used inside the canonical key and in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lotto => "lotto",
            Self::SuperEnalotto => "superenalotto",
        }
    }

    /// Display label used in result titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lotto => "Lotto",
            Self::SuperEnalotto => "SuperEnalotto",
        }
    }

    /// How many distinct main numbers a combination carries.
    #[must_use]
    pub const fn main_count(self) -> usize {
        match self {
            Self::Lotto => 5,
            Self::SuperEnalotto => 6,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lotto" => Ok(Self::Lotto),
            "superenalotto" | "super-enalotto" | "super_enalotto" | "superena" => {
                Ok(Self::SuperEnalotto)
            }
            _ => Err(GenerateError::UnknownGame(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("LOTTO".parse::<Game>(), Ok(Game::Lotto));
        assert_eq!(" SuperEnalotto ".parse::<Game>(), Ok(Game::SuperEnalotto));
        assert_eq!("super-enalotto".parse::<Game>(), Ok(Game::SuperEnalotto));
    }

    #[test]
    fn unknown_game_is_rejected() {
        assert_eq!(
            "bingo".parse::<Game>(),
            Err(GenerateError::UnknownGame("bingo".into()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for game in Game::ALL {
            assert_eq!(game.to_string().parse::<Game>(), Ok(game));
        }
    }

    #[test]
    fn serde_uses_key_token() {
        let json = serde_json::to_string(&Game::SuperEnalotto).expect("serialize");
        assert_eq!(json, "\"superenalotto\"");
    }

    #[test]
    fn main_counts() {
        assert_eq!(Game::Lotto.main_count(), 5);
        assert_eq!(Game::SuperEnalotto.main_count(), 6);
    }
}
