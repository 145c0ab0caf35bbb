// ABOUTME: Uniform stage-fallback combinator applied to every inference engine
// ABOUTME: Substitutes the documented fallback value when an engine's inner logic faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use fitmatch_core::errors::StageError;
use tracing::warn;

/// Run a stage's fallible inner logic, substituting the fixed fallback value
/// on fault.
///
/// Every engine applies this identically: the fallible path produces the
/// real result, and any [`StageError`] is logged and replaced so the stage's
/// public contract never errors outward.
pub(crate) fn or_fallback<T>(result: Result<T, StageError>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(stage = err.stage_name(), error = %err, "stage logic failed, substituting fallback output");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_ok_values() {
        let value = or_fallback(Ok(7), || 0);
        assert_eq!(value, 7);
    }

    #[test]
    fn substitutes_fallback_on_error() {
        let value = or_fallback(Err(StageError::Scoring { reason: "test" }), || 42);
        assert_eq!(value, 42);
    }
}
