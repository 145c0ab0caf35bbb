// ABOUTME: Core data models for the matching pipeline
// ABOUTME: Re-exports Profile, Trainer, ScoredCandidate, and Plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Domain models for the three-stage matching pipeline.
//!
//! All four request-scoped values (`Profile`, `MatchOutcome`, `Plan`, and the
//! `ScoredCandidate` entries inside a `MatchOutcome`) are created fresh per
//! request and never mutated in place; each stage returns a new immutable
//! value consumed by the next.

/// User profile derived from free text
pub mod profile;

/// Trainer catalog entry types
pub mod trainer;

/// Scored match candidates and match outcome
pub mod candidate;

/// Workout plan types
pub mod plan;

pub use candidate::{CulturalFit, MatchOutcome, ScoreBreakdown, ScoredCandidate};
pub use plan::{
    LanguagePractice, MotivationalApproach, Plan, PlanOverview, PlannedExercise, ProgressionPhase,
    ProgressionStyle,
};
pub use profile::{
    BudgetTier, Constraints, CulturalContext, EnglishLevel, EquipmentTag, ExperienceLevel, GoalTag,
    Language, Profile, SpaceConstraint, TimeAvailable,
};
pub use trainer::{
    CulturalExperience, PricingTier, Specialty, Trainer, TrainerCulturalProfile, TrainerPricing,
    TrainerRatings,
};
