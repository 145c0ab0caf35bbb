// ABOUTME: Unit tests for workout plan synthesis
// ABOUTME: Validates overview tables, selection bounds, localization, and the fallback plan
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitmatch::catalog::{ExerciseCatalog, TrainerCatalog};
use fitmatch::models::{ExperienceLevel, GoalTag, ProgressionStyle, TimeAvailable};
use fitmatch::PlanSynthesizer;

#[test]
fn chinese_beginner_plan_is_quiet_localized_and_bounded() {
    common::init_test_logging();
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_001").unwrap();

    let plan = planner.synthesize(&common::chinese_beginner_profile(), trainer, &exercises);

    assert_eq!(plan.overview.duration_weeks, 8);
    assert_eq!(plan.overview.frequency_per_week, 3);
    assert_eq!(plan.overview.session_length, TimeAvailable::ThirtyMin);
    assert_eq!(plan.overview.progression, ProgressionStyle::Gradual);
    assert_eq!(plan.overview.focus, "weight loss");

    // Floor guaranteed by backfill, ceiling by truncation
    assert!(plan.exercises.len() >= 6);
    assert!(plan.exercises.len() <= 8);

    // Small-apartment filter leaves only apartment-safe, quiet movements
    assert!(plan.exercises.iter().all(|exercise| exercise.quiet));

    // Chinese-language profile gets localized names from the fixed table
    let squats = plan
        .exercises
        .iter()
        .find(|exercise| exercise.name == "Bodyweight Squats")
        .unwrap();
    assert_eq!(squats.localized_name.as_deref(), Some("深蹲"));
    assert!(squats.cultural_note.contains("不会打扰邻居"));

    // Beginner three-phase progression with boundaries from the week count
    assert_eq!(plan.progression_phases.len(), 3);
    assert_eq!(plan.progression_phases[0].weeks, "Weeks 1-2");
    assert_eq!(plan.progression_phases[1].weeks, "Weeks 3-4");
    assert_eq!(plan.progression_phases[2].weeks, "Weeks 5-8");

    // Language practice supplement only for Chinese-language profiles
    let practice = plan.language_practice.as_ref().unwrap();
    assert_eq!(practice.weekly_vocabulary.len(), 7);
    assert_eq!(practice.exercise_phrases.len(), 4);
    assert_eq!(practice.conversation_starters.len(), 3);

    // Weight-loss nutrition note rides along for Chinese profiles
    assert_eq!(plan.nutrition_notes.len(), 2);
    assert!(plan.nutrition_notes[1].contains("Reduce rice portions"));

    assert!(plan
        .adaptation_notes
        .iter()
        .any(|note| note.contains("No equipment needed")));
    assert!(plan
        .adaptation_notes
        .iter()
        .any(|note| note.contains("Cost-effective routine")));
    assert!(plan.handoff.contains("8-week program"));
}

#[test]
fn english_intermediate_plan_uses_default_tables() {
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_003").unwrap();

    let plan = planner.synthesize(&common::english_default_profile(), trainer, &exercises);

    assert_eq!(plan.overview.duration_weeks, 10);
    assert_eq!(plan.overview.frequency_per_week, 4);
    assert_eq!(plan.overview.session_length, TimeAvailable::FortyFiveMin);
    assert_eq!(plan.overview.progression, ProgressionStyle::Moderate);

    assert!(plan.exercises.len() >= 6);
    assert!(plan.language_practice.is_none());
    assert!(plan.progression_phases.is_empty());
    assert!(plan
        .exercises
        .iter()
        .all(|exercise| exercise.localized_name.is_none()));
    assert_eq!(
        plan.nutrition_notes,
        vec!["Maintain balanced nutrition to support your fitness goals".to_owned()]
    );
}

#[test]
fn duration_table_prefers_weight_loss_over_muscle_building() {
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_002").unwrap();

    let mut profile = common::english_default_profile();
    profile.goals = vec![GoalTag::WeightLoss, GoalTag::MuscleBuilding];
    let plan = planner.synthesize(&profile, trainer, &exercises);
    assert_eq!(plan.overview.duration_weeks, 12);

    profile.goals = vec![GoalTag::MuscleBuilding];
    let plan = planner.synthesize(&profile, trainer, &exercises);
    assert_eq!(plan.overview.duration_weeks, 16);
}

#[test]
fn selection_hits_ceiling_with_many_goals_and_full_equipment() {
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_001").unwrap();

    let profile = common::multi_goal_profile(&[
        GoalTag::WeightLoss,
        GoalTag::MuscleBuilding,
        GoalTag::Endurance,
    ]);
    let plan = planner.synthesize(&profile, trainer, &exercises);

    assert_eq!(plan.exercises.len(), 8);
}

#[test]
fn selection_backfills_to_floor_under_restrictive_constraints() {
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_004").unwrap();

    let mut profile = common::chinese_beginner_profile();
    profile.goals = vec![GoalTag::MuscleBuilding];
    let plan = planner.synthesize(&profile, trainer, &exercises);

    assert!(plan.exercises.len() >= 6);
    assert!(plan.exercises.len() <= 8);
}

#[test]
fn empty_catalog_falls_back_to_minimal_plan() {
    common::init_test_logging();
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let trainer = trainers.get("trainer_001").unwrap();
    let empty = ExerciseCatalog::new(1, Vec::new());

    let plan = planner.synthesize(&common::chinese_beginner_profile(), trainer, &empty);

    assert_eq!(plan.exercises.len(), 2);
    assert_eq!(plan.overview.duration_weeks, 8);
    assert_eq!(plan.exercises[0].name, "Bodyweight Squats");
    assert_eq!(plan.handoff, "Fallback workout plan ready for immediate use.");
}

#[test]
fn synthesis_is_idempotent() {
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_001").unwrap();
    let profile = common::chinese_beginner_profile();

    assert_eq!(
        planner.synthesize(&profile, trainer, &exercises),
        planner.synthesize(&profile, trainer, &exercises)
    );
}

#[test]
fn beginner_phase_boundaries_scale_with_duration() {
    let planner = PlanSynthesizer::new();
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();
    let trainer = trainers.get("trainer_003").unwrap();

    let mut profile = common::english_default_profile();
    profile.experience_level = ExperienceLevel::Beginner;
    let plan = planner.synthesize(&profile, trainer, &exercises);

    // Beginners always get the 8-week program and its three phases
    assert_eq!(plan.overview.duration_weeks, 8);
    assert_eq!(plan.progression_phases.len(), 3);
    assert_eq!(plan.progression_phases[2].weeks, "Weeks 5-8");
}
