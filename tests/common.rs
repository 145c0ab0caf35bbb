// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, profile fixtures, and event collection helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
#![allow(missing_docs)]

//! Shared test utilities for `fitmatch` integration tests.

use std::collections::BTreeSet;
use std::sync::Once;

use tokio_stream::StreamExt;

use fitmatch::models::{
    BudgetTier, Constraints, CulturalContext, EnglishLevel, EquipmentTag, ExperienceLevel, GoalTag,
    Language, Profile, SpaceConstraint, TimeAvailable,
};
use fitmatch::pipeline::{Pipeline, PipelineEvent};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn equipment(tags: &[EquipmentTag]) -> BTreeSet<EquipmentTag> {
    tags.iter().copied().collect()
}

/// Chinese-language beginner: weight loss, small apartment, no equipment,
/// low budget, interested in English practice.
pub fn chinese_beginner_profile() -> Profile {
    Profile {
        language: Language::Chinese,
        english_level: EnglishLevel::Beginner,
        cultural_context: CulturalContext::ChineseMainland,
        goals: vec![GoalTag::WeightLoss],
        experience_level: ExperienceLevel::Beginner,
        constraints: Constraints {
            equipment: equipment(&[EquipmentTag::None]),
            space: SpaceConstraint::SmallApartment,
            time_available: TimeAvailable::ThirtyMin,
            budget: BudgetTier::Low,
        },
        language_learning_interest: true,
        insights: vec!["fixture profile".to_owned()],
        cultural_notes: "fixture".to_owned(),
        handoff: "fixture".to_owned(),
    }
}

/// English-language intermediate default: general fitness, basic equipment,
/// normal home, moderate budget.
pub fn english_default_profile() -> Profile {
    Profile {
        language: Language::English,
        english_level: EnglishLevel::Advanced,
        cultural_context: CulturalContext::Other,
        goals: vec![GoalTag::GeneralFitness],
        experience_level: ExperienceLevel::Intermediate,
        constraints: Constraints {
            equipment: equipment(&[EquipmentTag::Basic]),
            space: SpaceConstraint::NormalHome,
            time_available: TimeAvailable::FortyFiveMin,
            budget: BudgetTier::Moderate,
        },
        language_learning_interest: false,
        insights: vec!["fixture profile".to_owned()],
        cultural_notes: "fixture".to_owned(),
        handoff: "fixture".to_owned(),
    }
}

/// English-language intermediate with an explicit goal list and both
/// equipment tags, for selection ceiling tests.
pub fn multi_goal_profile(goals: &[GoalTag]) -> Profile {
    Profile {
        goals: goals.to_vec(),
        constraints: Constraints {
            equipment: equipment(&[EquipmentTag::None, EquipmentTag::Basic]),
            space: SpaceConstraint::NormalHome,
            time_available: TimeAvailable::FortyFiveMin,
            budget: BudgetTier::Moderate,
        },
        ..english_default_profile()
    }
}

/// Drive one pipeline run to completion and collect every event.
pub async fn collect_events(pipeline: &Pipeline, text: &str) -> Vec<PipelineEvent> {
    let mut run = pipeline.run(text);
    let mut events = Vec::new();
    while let Some(event) = run.next().await {
        events.push(event);
    }
    events
}
