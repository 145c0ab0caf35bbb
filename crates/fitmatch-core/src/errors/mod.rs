// ABOUTME: Structured error types for the three inference stages
// ABOUTME: Defines StageError with per-stage variants carrying failure context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Stage error types.
//!
//! Every inference stage runs its real logic through a fallible inner path
//! and substitutes a fixed fallback value when that path errors, so these
//! types never cross the pipeline boundary. They exist to make the internal
//! failure modes explicit and loggable.

/// Errors raised by the fallible inner path of an inference stage.
///
/// A `StageError` is always caught at the stage boundary and replaced with
/// the stage's documented fallback value; it is never returned to callers
/// of the public stage contracts.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// Profile extraction could not run its detector registry
    #[error("profile extraction failed: {reason}")]
    Extraction {
        /// Why the extraction logic could not complete
        reason: &'static str,
    },

    /// Compatibility scoring could not produce a ranked candidate list
    #[error("compatibility scoring failed: {reason}")]
    Scoring {
        /// Why the scoring logic could not complete
        reason: &'static str,
    },

    /// Plan synthesis could not assemble a workout plan
    #[error("plan synthesis failed: {reason}")]
    Synthesis {
        /// Why the synthesis logic could not complete
        reason: &'static str,
    },
}

impl StageError {
    /// Short stable name of the stage that raised this error, for logging.
    #[must_use]
    pub const fn stage_name(&self) -> &'static str {
        match self {
            Self::Extraction { .. } => "intake",
            Self::Scoring { .. } => "matching",
            Self::Synthesis { .. } => "planning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StageError;

    #[test]
    fn stage_names_are_stable() {
        assert_eq!(
            StageError::Extraction { reason: "r" }.stage_name(),
            "intake"
        );
        assert_eq!(StageError::Scoring { reason: "r" }.stage_name(), "matching");
        assert_eq!(
            StageError::Synthesis { reason: "r" }.stage_name(),
            "planning"
        );
    }
}
