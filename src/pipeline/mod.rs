// ABOUTME: Sequential three-stage pipeline orchestrator with progressive event stream
// ABOUTME: Runs intake, matching, and planning with per-stage status tracking and fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

//! Pipeline orchestration.
//!
//! One [`Pipeline::run`] call drives the three inference stages strictly in
//! sequence, because each stage consumes the previous stage's output. Every
//! stage publishes a start event, simulates a bounded think-delay, runs its
//! engine, and publishes its structured output the moment it completes, so
//! consumers see results progressively rather than only at the end.
//!
//! The engines themselves never error outward; the orchestrator adds a
//! defensive outer boundary around each invocation. A fault escaping a
//! stage's own fallback (a panic in engine code) marks the stage failed,
//! aborts the remaining stages, and emits a terminal failure event while
//! already-published outputs stand. Dropping the returned handle cancels
//! the run cooperatively: the spawned task observes the closed channel at
//! its next publish and stops, discarding partial stage output.

pub mod events;
mod state;

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tracing::{debug, error, info};
use uuid::Uuid;

use fitmatch_core::catalog::{ExerciseCatalog, TrainerCatalog};
use fitmatch_core::constants::env_vars;
use fitmatch_intelligence::{CompatibilityScorer, PlanSynthesizer, ProfileExtractor};

pub use events::{PipelineEvent, Stage, StagePayload, StageStatus};
pub use state::RunState;

/// Pipeline timing and buffering configuration.
///
/// The per-stage delays simulate variable-latency inference; they are
/// deterministic given fixed values, and tests set them to zero.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Think-delay before the intake engine runs
    pub intake_delay: Duration,
    /// Think-delay before the matching engine runs
    pub matching_delay: Duration,
    /// Think-delay before the planning engine runs
    pub planning_delay: Duration,
    /// Capacity of the event channel behind each run's stream
    pub event_buffer: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            intake_delay: Duration::from_millis(3000),
            matching_delay: Duration::from_millis(4000),
            planning_delay: Duration::from_millis(3500),
            event_buffer: 16,
        }
    }
}

impl PipelineConfig {
    /// Defaults with per-stage delay overrides read from the environment
    /// (`FITMATCH_*_DELAY_MS`, in milliseconds).
    #[must_use]
    pub fn from_environment() -> Self {
        let mut config = Self::default();
        if let Some(delay) = read_delay_ms(env_vars::INTAKE_DELAY_MS) {
            config.intake_delay = delay;
        }
        if let Some(delay) = read_delay_ms(env_vars::MATCHING_DELAY_MS) {
            config.matching_delay = delay;
        }
        if let Some(delay) = read_delay_ms(env_vars::PLANNING_DELAY_MS) {
            config.planning_delay = delay;
        }
        config
    }

    /// Zero delays for tests and batch use.
    #[must_use]
    pub fn without_delays() -> Self {
        Self {
            intake_delay: Duration::ZERO,
            matching_delay: Duration::ZERO,
            planning_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Think-delay configured for a stage
    #[must_use]
    pub const fn delay_for(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Intake => self.intake_delay,
            Stage::Matching => self.matching_delay,
            Stage::Planning => self.planning_delay,
        }
    }
}

fn read_delay_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_millis)
}

/// The three-stage inference pipeline.
///
/// Catalogs are injected once and shared read-only across runs; separate
/// runs are independent and may execute concurrently without shared mutable
/// state.
#[derive(Debug, Clone)]
pub struct Pipeline {
    trainers: Arc<TrainerCatalog>,
    exercises: Arc<ExerciseCatalog>,
    extractor: ProfileExtractor,
    scorer: CompatibilityScorer,
    planner: PlanSynthesizer,
    config: PipelineConfig,
}

impl Pipeline {
    /// Pipeline with default engines and environment-derived timing.
    #[must_use]
    pub fn new(trainers: Arc<TrainerCatalog>, exercises: Arc<ExerciseCatalog>) -> Self {
        Self::with_config(trainers, exercises, PipelineConfig::from_environment())
    }

    /// Pipeline with explicit timing configuration.
    #[must_use]
    pub fn with_config(
        trainers: Arc<TrainerCatalog>,
        exercises: Arc<ExerciseCatalog>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            trainers,
            exercises,
            extractor: ProfileExtractor::new(),
            scorer: CompatibilityScorer::new(),
            planner: PlanSynthesizer::new(),
            config,
        }
    }

    /// Start one pipeline run for the given raw text.
    ///
    /// Returns immediately with a handle streaming the run's events; the
    /// stages execute on a spawned task. Dropping the handle cancels the
    /// run cooperatively.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn run(&self, raw_text: &str) -> PipelineHandle {
        let (tx, rx) = mpsc::channel(self.config.event_buffer);
        let run_id = Uuid::new_v4();

        let task = RunTask {
            run_id,
            text: raw_text.to_owned(),
            trainers: Arc::clone(&self.trainers),
            exercises: Arc::clone(&self.exercises),
            extractor: self.extractor,
            scorer: self.scorer.clone(),
            planner: self.planner.clone(),
            config: self.config.clone(),
            tx,
        };
        info!(%run_id, "pipeline run started");
        tokio::spawn(task.execute());

        PipelineHandle {
            run_id,
            events: ReceiverStream::new(rx),
        }
    }
}

/// Handle for one pipeline run; a stream of [`PipelineEvent`]s.
#[derive(Debug)]
pub struct PipelineHandle {
    run_id: Uuid,
    events: ReceiverStream<PipelineEvent>,
}

impl PipelineHandle {
    /// Identifier of this run, for log correlation
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Consume the handle, keeping only the event stream
    #[must_use]
    pub fn into_events(self) -> ReceiverStream<PipelineEvent> {
        self.events
    }
}

impl Stream for PipelineHandle {
    type Item = PipelineEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.events).poll_next(cx)
    }
}

/// Owned context for one spawned pipeline run
struct RunTask {
    run_id: Uuid,
    text: String,
    trainers: Arc<TrainerCatalog>,
    exercises: Arc<ExerciseCatalog>,
    extractor: ProfileExtractor,
    scorer: CompatibilityScorer,
    planner: PlanSynthesizer,
    config: PipelineConfig,
    tx: mpsc::Sender<PipelineEvent>,
}

impl RunTask {
    async fn execute(self) {
        let mut state = RunState::new();

        // Stage 1: intake
        let extractor = self.extractor;
        let text = self.text.clone();
        let Some(profile) = self
            .run_stage(&mut state, Stage::Intake, move || extractor.extract(&text))
            .await
        else {
            return;
        };
        if !self
            .publish(
                &mut state,
                Stage::Intake,
                StagePayload::Profile(Box::new(profile.clone())),
            )
            .await
        {
            return;
        }

        // Stage 2: matching
        let scorer = self.scorer.clone();
        let trainers = Arc::clone(&self.trainers);
        let scoring_profile = profile.clone();
        let Some(outcome) = self
            .run_stage(&mut state, Stage::Matching, move || {
                scorer.score(&scoring_profile, &trainers)
            })
            .await
        else {
            return;
        };

        // The scorer guarantees at least its fallback candidate; an empty
        // ranking here means the stage contract itself is broken.
        let Some(top_trainer) = outcome.top().map(|candidate| candidate.trainer.clone()) else {
            state.fail(Stage::Matching);
            self.emit_failure(Stage::Matching, "matching produced no candidates")
                .await;
            return;
        };
        if !self
            .publish(
                &mut state,
                Stage::Matching,
                StagePayload::Match(Box::new(outcome)),
            )
            .await
        {
            return;
        }

        // Stage 3: planning
        let planner = self.planner.clone();
        let exercises = Arc::clone(&self.exercises);
        let Some(plan) = self
            .run_stage(&mut state, Stage::Planning, move || {
                planner.synthesize(&profile, &top_trainer, &exercises)
            })
            .await
        else {
            return;
        };
        if !self
            .publish(&mut state, Stage::Planning, StagePayload::Plan(Box::new(plan)))
            .await
        {
            return;
        }

        info!(run_id = %self.run_id, "pipeline run complete");
    }

    /// Start a stage, wait out its think-delay, and run its engine behind
    /// the defensive outer boundary. Returns `None` when the run should
    /// stop: either the consumer went away or the stage escaped its
    /// fallback.
    async fn run_stage<T, F>(&self, state: &mut RunState, stage: Stage, work: F) -> Option<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        state.begin(stage);
        if !self
            .emit(PipelineEvent::StageStarted {
                run_id: self.run_id,
                stage,
                at: Utc::now(),
            })
            .await
        {
            return None;
        }
        sleep(self.config.delay_for(stage)).await;

        match tokio::task::spawn_blocking(work).await {
            Ok(value) => Some(value),
            Err(join_error) => {
                state.fail(stage);
                error!(
                    run_id = %self.run_id,
                    %stage,
                    error = %join_error,
                    "stage escaped its fallback boundary, aborting pipeline"
                );
                self.emit_failure(stage, &format!("{stage} stage aborted: {join_error}"))
                    .await;
                None
            }
        }
    }

    /// Mark a stage complete and publish its output. Returns false when the
    /// consumer dropped the stream.
    async fn publish(&self, state: &mut RunState, stage: Stage, payload: StagePayload) -> bool {
        state.complete(stage);
        debug!(run_id = %self.run_id, %stage, "stage complete, publishing output");
        self.emit(PipelineEvent::StageCompleted {
            run_id: self.run_id,
            stage,
            at: Utc::now(),
            payload,
        })
        .await
    }

    async fn emit(&self, event: PipelineEvent) -> bool {
        if self.tx.send(event).await.is_err() {
            debug!(run_id = %self.run_id, "event stream dropped, cancelling run");
            return false;
        }
        true
    }

    async fn emit_failure(&self, stage: Stage, message: &str) {
        let event = PipelineEvent::PipelineFailed {
            run_id: self.run_id,
            stage,
            message: message.to_owned(),
            at: Utc::now(),
        };
        // Best effort: the consumer may already be gone
        self.tx.send(event).await.ok();
    }
}
