// ABOUTME: Public API of the fitmatch matching pipeline
// ABOUTME: Re-exports core types, inference engines, and the pipeline orchestrator
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

#![deny(unsafe_code)]

//! # Fitmatch
//!
//! A three-stage deterministic inference pipeline that turns a short
//! free-text statement of fitness goals (English and/or Chinese, mixed
//! freely) into a structured user profile, a ranked list of compatible
//! trainers with explainable scores, and a personalized workout plan.
//!
//! The pipeline surfaces each stage's output as soon as it completes
//! through an event stream; see [`pipeline::Pipeline`].
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use fitmatch::catalog::{ExerciseCatalog, TrainerCatalog};
//! use fitmatch::pipeline::Pipeline;
//! use tokio_stream::StreamExt;
//!
//! # async fn demo() {
//! let pipeline = Pipeline::new(
//!     Arc::new(TrainerCatalog::builtin()),
//!     Arc::new(ExerciseCatalog::builtin()),
//! );
//! let mut run = pipeline.run("I want to build muscle but I am a beginner.");
//! while let Some(event) = run.next().await {
//!     println!("{event:?}");
//! }
//! # }
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

/// The sequential three-stage pipeline orchestrator and its event stream
pub mod pipeline;

// Re-export the foundation and engine crates under stable paths
pub use fitmatch_core::{catalog, constants, errors, models};
pub use fitmatch_intelligence::{
    config as engine_config, CompatibilityScorer, PlanSynthesizer, ProfileExtractor,
};

pub use pipeline::{
    Pipeline, PipelineConfig, PipelineEvent, PipelineHandle, Stage, StagePayload, StageStatus,
};
