//! The full pipeline: key, digest, seed, stream, sample.

use crate::error::GenerateError;
use crate::model::{CombinationResult, GenerationRequest, format_iso_date};
use crate::sampler;
use crate::seed::{Seed, seed_for};
use crate::stream::Xorshift32;

/// Seed a validated request hashes to.
#[must_use]
pub fn request_seed(request: &GenerationRequest) -> Seed {
    seed_for(&request.canonical_key())
}

/// Generate the combination for a validated request.
///
/// Each call owns its stream, so concurrent calls need no coordination.
///
/// # Errors
///
/// Only [`GenerateError::ImpossibleRange`], which the fixed game boards never
/// trigger.
pub fn generate(request: &GenerationRequest) -> Result<CombinationResult, GenerateError> {
    let seed = request_seed(request);
    let mut stream = Xorshift32::new(seed);
    let result = sampler::sample(
        &mut stream,
        request.game,
        &format_iso_date(request.reference_date),
    )?;

    tracing::debug!(
        game = %request.game,
        %seed,
        main = ?result.main,
        "combination generated"
    );
    Ok(result)
}

/// Validate raw inputs and generate.
///
/// # Errors
///
/// [`GenerateError::InvalidName`], [`GenerateError::InvalidDate`] or
/// [`GenerateError::UnknownGame`] for bad inputs.
pub fn generate_combination(
    name: &str,
    birth_date: &str,
    reference_date: &str,
    game: &str,
) -> Result<CombinationResult, GenerateError> {
    let request = GenerationRequest::parse(name, birth_date, reference_date, game)?;
    generate(&request)
}
