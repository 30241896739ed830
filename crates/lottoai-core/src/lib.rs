//! lottoai-core library.
//!
//! Deterministic "personal" combinations for Lotto and `SuperEnalotto`, plus a
//! Pythagorean numerology profile.
//!
//! ```text
//! canonical key -> SHA-256 -> XOR fold -> xorshift32 -> sampler -> CombinationResult
//! name + dates  -> digit reduction                                -> NumerologyProfile
//! ```
//!
//! The same `(name, birth date, reference date, game)` always yields the same
//! combination. Nothing reads a clock or an OS random source.
//!
//! ```
//! use lottoai_core::generate_combination;
//!
//! let result = generate_combination("Mario Rossi", "1980-05-12", "2024-01-01", "lotto").unwrap();
//! assert_eq!(result.main, vec![26, 28, 44, 78, 84]);
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::GenerateError`] with a machine-readable [`error::ErrorCode`].
//! - **Logging**: `tracing` at `debug`/`trace` only; the core never prints.

pub mod digest;
pub mod error;
pub mod generate;
pub mod key;
pub mod model;
pub mod numerology;
pub mod reading;
pub mod sampler;
pub mod seed;
pub mod stream;

pub use error::{ErrorCode, GenerateError};
pub use generate::{generate, generate_combination};
pub use model::{CombinationResult, ExtraNumber, Game, GenerationRequest};
pub use numerology::{NumerologyProfile, compute_numerology_profile};
pub use seed::Seed;
pub use stream::Xorshift32;
