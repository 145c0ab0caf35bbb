// ABOUTME: Engine configuration module with named, overridable constants
// ABOUTME: Re-exports the scorer and planner configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Engine configuration.
//!
//! Every empirically-chosen constant in the engines (score weights, caps,
//! the budget compatibility table, plan limits) lives here as a named field
//! with the production value as its default. The values were tuned against
//! the built-in catalogs; override them through the `with_config`
//! constructors rather than editing the engines.

mod planner;
mod scorer;

pub use planner::PlannerConfig;
pub use scorer::ScorerConfig;
