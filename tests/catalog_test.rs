// ABOUTME: Unit tests for the built-in trainer and exercise catalogs
// ABOUTME: Validates catalog data, query helpers, and the localization table
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitmatch::catalog::{
    localized_exercise_name, safe_default_trainer, ExerciseCatalog, TrainerCatalog,
};
use fitmatch::models::{BudgetTier, EquipmentTag, Specialty};

#[test]
fn builtin_catalogs_are_versioned_and_populated() {
    let trainers = TrainerCatalog::builtin();
    let exercises = ExerciseCatalog::builtin();

    assert_eq!(trainers.version(), 1);
    assert_eq!(trainers.len(), 5);
    assert_eq!(exercises.version(), 1);
    assert_eq!(exercises.len(), 10);
}

#[test]
fn lookup_by_id() {
    let trainers = TrainerCatalog::builtin();

    assert_eq!(trainers.get("trainer_002").unwrap().name, "Michael Chen");
    assert!(trainers.get("trainer_999").is_none());
}

#[test]
fn query_by_specialty() {
    let trainers = TrainerCatalog::builtin();

    let weight_loss: Vec<&str> = trainers
        .by_specialty(Specialty::WeightLoss)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(weight_loss, vec!["trainer_001", "trainer_005"]);
}

#[test]
fn query_by_language_is_substring_case_insensitive() {
    let trainers = TrainerCatalog::builtin();

    let cantonese = trainers.by_language("cantonese");
    assert_eq!(cantonese.len(), 1);
    assert_eq!(cantonese[0].id, "trainer_002");

    let spanish = trainers.by_language("Spanish");
    assert_eq!(spanish.len(), 1);
    assert_eq!(spanish[0].id, "trainer_003");
}

#[test]
fn query_by_budget_widens_with_tier() {
    let trainers = TrainerCatalog::builtin();

    let low: Vec<&str> = trainers
        .by_budget(BudgetTier::Low)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(low, vec!["trainer_003"]);

    assert_eq!(trainers.by_budget(BudgetTier::Moderate).len(), 3);
    assert_eq!(trainers.by_budget(BudgetTier::High).len(), 5);
}

#[test]
fn safe_default_is_the_first_builtin_trainer() {
    let trainers = TrainerCatalog::builtin();

    assert_eq!(safe_default_trainer().id, trainers.trainers()[0].id);
}

#[test]
fn localization_table_covers_known_names_only() {
    assert_eq!(localized_exercise_name("Bodyweight Squats"), Some("深蹲"));
    assert_eq!(localized_exercise_name("Plank Hold"), Some("平板支撑"));
    assert_eq!(localized_exercise_name("Unknown Exercise"), None);
}

#[test]
fn exercise_entries_carry_consistent_tags() {
    let exercises = ExerciseCatalog::builtin();

    // Every quiet entry is also apartment friendly in the built-in data
    for entry in exercises.entries() {
        if entry.quiet {
            assert!(entry.apartment_friendly, "{}", entry.name);
        }
    }

    // There are enough no-equipment apartment-safe entries to back up the
    // most restrictive selection
    let backfill_pool = exercises
        .entries()
        .iter()
        .filter(|entry| entry.equipment == EquipmentTag::None && entry.apartment_friendly)
        .count();
    assert!(backfill_pool >= 6);
}
