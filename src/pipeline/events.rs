// ABOUTME: Pipeline stage identifiers, statuses, and the consumer-facing event types
// ABOUTME: Defines Stage, StageStatus, StagePayload, and PipelineEvent
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitmatch_core::models::{MatchOutcome, Plan, Profile};

/// The three pipeline stages, in execution order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Profile extraction from raw text
    Intake,
    /// Trainer compatibility scoring
    Matching,
    /// Workout plan synthesis
    Planning,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Self; 3] = [Self::Intake, Self::Matching, Self::Planning];

    /// Position of this stage in the execution order
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Intake => 0,
            Self::Matching => 1,
            Self::Planning => 2,
        }
    }

    /// Stable wire name of the stage
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intake => "intake",
            Self::Matching => "matching",
            Self::Planning => "planning",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle status of one pipeline stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Not yet started
    Waiting,
    /// Currently executing
    Running,
    /// Finished and published its output
    Complete,
    /// Aborted by a fault that escaped the stage's own fallback
    Failed,
}

/// Structured output published when a stage completes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StagePayload {
    /// Intake output
    Profile(Box<Profile>),
    /// Matching output
    Match(Box<MatchOutcome>),
    /// Planning output
    Plan(Box<Plan>),
}

/// One update on the pipeline event stream.
///
/// Consumers receive exactly one `StageStarted` and one `StageCompleted`
/// per stage, in stage order; after a `PipelineFailed` no further events
/// arrive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// A stage began executing
    StageStarted {
        /// Pipeline run this event belongs to
        run_id: Uuid,
        /// The stage that started
        stage: Stage,
        /// When the stage started
        at: DateTime<Utc>,
    },
    /// A stage finished and published its output
    StageCompleted {
        /// Pipeline run this event belongs to
        run_id: Uuid,
        /// The stage that completed
        stage: Stage,
        /// When the stage completed
        at: DateTime<Utc>,
        /// The stage's structured output
        payload: StagePayload,
    },
    /// The pipeline aborted; previously published stage outputs stand
    PipelineFailed {
        /// Pipeline run this event belongs to
        run_id: Uuid,
        /// The stage that faulted
        stage: Stage,
        /// Human-readable failure description
        message: String,
        /// When the failure was observed
        at: DateTime<Utc>,
    },
}

impl PipelineEvent {
    /// The stage this event refers to
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::StageStarted { stage, .. }
            | Self::StageCompleted { stage, .. }
            | Self::PipelineFailed { stage, .. } => *stage,
        }
    }

    /// Whether this is a terminal failure event
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::PipelineFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_stable() {
        assert_eq!(Stage::ALL[0].index(), 0);
        assert_eq!(Stage::ALL[1].index(), 1);
        assert_eq!(Stage::ALL[2].index(), 2);
    }

    #[test]
    fn stages_serialize_to_wire_names() {
        let json = serde_json::to_string(&Stage::Intake).unwrap_or_default();
        assert_eq!(json, "\"intake\"");
    }
}
