use std::fmt;

/// Machine-readable error codes shared by the core and the CLI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidName,
    InvalidDate,
    UnknownGame,
    ImpossibleRange,
    DigestUnavailable,
    HistoryIndexOutOfRange,
    HistoryWriteFailed,
    LockContention,
    ConfigParseError,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidName => "E1001",
            Self::InvalidDate => "E1002",
            Self::UnknownGame => "E1003",
            Self::ImpossibleRange => "E2001",
            Self::DigestUnavailable => "E2002",
            Self::HistoryIndexOutOfRange => "E3001",
            Self::HistoryWriteFailed => "E3002",
            Self::LockContention => "E3003",
            Self::ConfigParseError => "E4001",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidName => "Name is empty",
            Self::InvalidDate => "Date is not a valid calendar date",
            Self::UnknownGame => "Unknown game",
            Self::ImpossibleRange => "Cannot draw that many distinct numbers from the range",
            Self::DigestUnavailable => "SHA-256 digest unavailable",
            Self::HistoryIndexOutOfRange => "History entry not found",
            Self::HistoryWriteFailed => "History file write failed",
            Self::LockContention => "Lock contention",
            Self::ConfigParseError => "Config file parse error",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to the user.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidName => Some("Pass a name with at least one non-blank character."),
            Self::InvalidDate => Some("Use the ISO form YYYY-MM-DD, e.g. 1980-05-12."),
            Self::UnknownGame => Some("Use one of: lotto, superenalotto."),
            Self::ImpossibleRange | Self::DigestUnavailable => None,
            Self::HistoryIndexOutOfRange => Some("Run `lottoai history list` to see valid indexes."),
            Self::HistoryWriteFailed => Some("Check disk space and write permissions."),
            Self::LockContention => Some("Retry after the other `lottoai` process finishes."),
            Self::ConfigParseError => Some("Fix syntax in the lottoai config.toml and retry."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the generation and numerology pipelines.
///
/// Every operation in the core is a pure function of its inputs, so none of
/// these are transient: retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The name is empty after trimming.
    #[error("name must not be empty")]
    InvalidName,

    /// A date field did not parse as an ISO calendar date.
    #[error("invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// Which input carried the bad value (`birth date`, `reference date`).
        field: &'static str,
        /// The raw input.
        value: String,
    },

    /// The game selector is not one of the supported games.
    #[error("unknown game '{0}'")]
    UnknownGame(String),

    /// More distinct values were requested than the range holds.
    #[error("cannot pick {count} distinct numbers from [{min}, {max}]")]
    ImpossibleRange {
        /// Requested number of distinct values.
        count: usize,
        /// Inclusive lower bound.
        min: u8,
        /// Inclusive upper bound.
        max: u8,
    },
}

impl GenerateError {
    /// Return the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidName => ErrorCode::InvalidName,
            Self::InvalidDate { .. } => ErrorCode::InvalidDate,
            Self::UnknownGame(_) => ErrorCode::UnknownGame,
            Self::ImpossibleRange { .. } => ErrorCode::ImpossibleRange,
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}
