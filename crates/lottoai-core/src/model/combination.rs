use serde::{Deserialize, Serialize};

/// Label of the `SuperEnalotto` number drawn disjoint from the main set.
pub const JOLLY: &str = "Jolly";
/// Label of the `SuperEnalotto` number drawn with no exclusion.
pub const SUPERSTAR: &str = "Superstar";

/// A supplementary number with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraNumber {
    pub label: String,
    pub value: u8,
}

impl ExtraNumber {
    #[must_use]
    pub fn new(label: &str, value: u8) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    /// `Label: NN` badge text.
    #[must_use]
    pub fn badge(&self) -> String {
        format!("{}: {}", self.label, pad2(self.value))
    }
}

/// The generated combination for one request.
///
/// `main` is sorted ascending with no duplicates. `extra` is empty for Lotto
/// and holds `Jolly` then `Superstar` for `SuperEnalotto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationResult {
    pub title: String,
    pub main: Vec<u8>,
    pub extra: Vec<ExtraNumber>,
}

impl CombinationResult {
    /// Look up an extra number by label.
    #[must_use]
    pub fn extra_value(&self, label: &str) -> Option<u8> {
        self.extra
            .iter()
            .find(|extra| extra.label == label)
            .map(|extra| extra.value)
    }

    #[must_use]
    pub fn jolly(&self) -> Option<u8> {
        self.extra_value(JOLLY)
    }

    #[must_use]
    pub fn superstar(&self) -> Option<u8> {
        self.extra_value(SUPERSTAR)
    }

    /// Main numbers as zero-padded two-digit badges.
    #[must_use]
    pub fn badges(&self) -> Vec<String> {
        self.main.iter().copied().map(pad2).collect()
    }

    /// Extra numbers as `Label: NN` badges.
    #[must_use]
    pub fn extra_badges(&self) -> Vec<String> {
        self.extra.iter().map(ExtraNumber::badge).collect()
    }

    /// Plain-text block for copying or sharing: title, main badges, extra
    /// badges, one per line, empty lines dropped.
    #[must_use]
    pub fn share_text(&self) -> String {
        let lines = [
            self.title.trim().to_string(),
            self.badges().join(" "),
            self.extra_badges().join(" "),
        ];
        lines
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn pad2(value: u8) -> String {
    format!("{value:02}")
}
