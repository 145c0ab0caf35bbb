// ABOUTME: Explicit per-stage state machine for one pipeline run
// ABOUTME: Tracks three stage statuses plus the current stage index
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

use super::events::{Stage, StageStatus};

/// Per-run stage state machine.
///
/// Each stage moves `Waiting -> Running -> Complete`, or `Running -> Failed`
/// when a fault escapes the stage's own fallback boundary. The current
/// stage index makes "where is this run" a direct lookup rather than a
/// scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    statuses: [StageStatus; 3],
    current: Option<usize>,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    /// Fresh state with every stage waiting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: [StageStatus::Waiting; 3],
            current: None,
        }
    }

    /// Mark a stage running and make it the current stage.
    pub fn begin(&mut self, stage: Stage) {
        self.statuses[stage.index()] = StageStatus::Running;
        self.current = Some(stage.index());
    }

    /// Mark a stage complete.
    pub fn complete(&mut self, stage: Stage) {
        self.statuses[stage.index()] = StageStatus::Complete;
    }

    /// Mark a stage failed.
    pub fn fail(&mut self, stage: Stage) {
        self.statuses[stage.index()] = StageStatus::Failed;
    }

    /// Status of one stage
    #[must_use]
    pub const fn status(&self, stage: Stage) -> StageStatus {
        self.statuses[stage.index()]
    }

    /// The stage currently (or last) running, if any stage has started
    #[must_use]
    pub fn current_stage(&self) -> Option<Stage> {
        self.current.map(|index| Stage::ALL[index])
    }

    /// Whether every stage has completed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.statuses
            .iter()
            .all(|status| *status == StageStatus::Complete)
    }

    /// Whether any stage has failed
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.statuses
            .iter()
            .any(|status| *status == StageStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_all_stages_waiting() {
        let state = RunState::new();
        for stage in Stage::ALL {
            assert_eq!(state.status(stage), StageStatus::Waiting);
        }
        assert_eq!(state.current_stage(), None);
        assert!(!state.is_complete());
    }

    #[test]
    fn happy_path_reaches_complete() {
        let mut state = RunState::new();
        for stage in Stage::ALL {
            state.begin(stage);
            assert_eq!(state.current_stage(), Some(stage));
            state.complete(stage);
        }
        assert!(state.is_complete());
        assert!(!state.has_failed());
    }

    #[test]
    fn failure_keeps_completed_stages() {
        let mut state = RunState::new();
        state.begin(Stage::Intake);
        state.complete(Stage::Intake);
        state.begin(Stage::Matching);
        state.fail(Stage::Matching);

        assert_eq!(state.status(Stage::Intake), StageStatus::Complete);
        assert_eq!(state.status(Stage::Matching), StageStatus::Failed);
        assert_eq!(state.status(Stage::Planning), StageStatus::Waiting);
        assert!(state.has_failed());
    }
}
