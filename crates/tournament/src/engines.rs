//! Engine specs: `minimax`, `minimax:<depth>`, `random`, `random:<seed>`.

use minimax_engine::MinimaxEngine;
use othello_core::Strategy;
use random_engine::RandomEngine;

use crate::error::TournamentError;

/// Builds a strategy from its command-line spec.
///
/// `default_depth` applies to `minimax` without an explicit depth.
pub fn create_engine(spec: &str, default_depth: u8) -> Result<Box<dyn Strategy>, TournamentError> {
    let (kind, param) = match spec.split_once(':') {
        Some((kind, param)) => (kind, Some(param)),
        None => (spec, None),
    };

    match kind.to_lowercase().as_str() {
        "minimax" | "mm" => {
            let depth = match param {
                None => default_depth,
                Some(p) => match p.parse::<u8>() {
                    Ok(d) if d >= 1 => d,
                    _ => {
                        return Err(TournamentError::EngineParam {
                            spec: spec.to_string(),
                            reason: "depth must be an integer >= 1".to_string(),
                        })
                    }
                },
            };
            Ok(Box::new(MinimaxEngine::with_depth(depth)))
        }
        "random" | "rand" => match param {
            None => Ok(Box::new(RandomEngine::new())),
            Some(p) => p
                .parse::<u64>()
                .map(|seed| Box::new(RandomEngine::seeded(seed)) as Box<dyn Strategy>)
                .map_err(|_| TournamentError::EngineParam {
                    spec: spec.to_string(),
                    reason: "seed must be an unsigned integer".to_string(),
                }),
        },
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}
