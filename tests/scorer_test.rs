// ABOUTME: Unit tests for trainer compatibility scoring
// ABOUTME: Validates ranking, sub-score caps, bonuses, and the safe-default fallback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitmatch::catalog::{safe_default_trainer, TrainerCatalog};
use fitmatch::models::{CulturalFit, GoalTag};
use fitmatch::CompatibilityScorer;

#[test]
fn ranking_covers_catalog_sorted_non_increasing() {
    common::init_test_logging();
    let scorer = CompatibilityScorer::new();
    let catalog = TrainerCatalog::builtin();

    let outcome = scorer.score(&common::english_default_profile(), &catalog);

    assert_eq!(outcome.candidates.len(), catalog.len());
    for pair in outcome.candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for candidate in &outcome.candidates {
        assert!(candidate.score <= 100);
    }
}

#[test]
fn sub_scores_respect_declared_caps() {
    let scorer = CompatibilityScorer::new();
    let catalog = TrainerCatalog::builtin();

    for profile in [
        common::english_default_profile(),
        common::chinese_beginner_profile(),
    ] {
        let outcome = scorer.score(&profile, &catalog);
        for candidate in &outcome.candidates {
            let breakdown = candidate.breakdown;
            assert!(breakdown.goal_alignment == 0 || breakdown.goal_alignment == 25);
            assert!(breakdown.experience_match == 10 || breakdown.experience_match == 20);
            assert!(breakdown.cultural <= 20);
            assert!(breakdown.language <= 15);
            assert!(breakdown.constraint_fit <= 10);
            assert!(breakdown.budget_fit <= 10);
            assert_eq!(candidate.score, breakdown.sum().min(100));
        }
    }
}

#[test]
fn goal_alignment_is_all_or_nothing() {
    let scorer = CompatibilityScorer::new();
    let catalog = TrainerCatalog::builtin();
    let mut profile = common::english_default_profile();
    profile.goals = vec![GoalTag::Endurance];

    let outcome = scorer.score(&profile, &catalog);

    let emma = outcome
        .candidates
        .iter()
        .find(|c| c.trainer.id == "trainer_003")
        .unwrap();
    assert_eq!(emma.breakdown.goal_alignment, 25);

    let chen = outcome
        .candidates
        .iter()
        .find(|c| c.trainer.id == "trainer_002")
        .unwrap();
    assert_eq!(chen.breakdown.goal_alignment, 0);
}

#[test]
fn chinese_beginner_ranking_and_reasons() {
    let scorer = CompatibilityScorer::new();
    let catalog = TrainerCatalog::builtin();

    let outcome = scorer.score(&common::chinese_beginner_profile(), &catalog);

    // Sarah wins: goal 25 + experience 20 + cultural 20 + language 15
    // + constraints 10 + budget 7
    let top = outcome.top().unwrap();
    assert_eq!(top.trainer.id, "trainer_001");
    assert_eq!(top.score, 97);
    assert_eq!(top.cultural_fit, CulturalFit::VeryGood);
    assert!(top.reasons.contains(&"Speaks Mandarin".to_owned()));
    assert!(top.reasons.contains(&"Patient with beginners".to_owned()));
    assert!(top
        .reasons
        .contains(&"Apartment-friendly workouts".to_owned()));

    // Emma and David tie at 55; catalog order breaks the tie
    assert_eq!(outcome.candidates[2].trainer.id, "trainer_003");
    assert_eq!(outcome.candidates[3].trainer.id, "trainer_004");
    assert_eq!(outcome.candidates[2].score, outcome.candidates[3].score);

    // Narrative is generated only from conditions that actually hold
    assert!(outcome.reasoning.starts_with("Sarah Johnson is an ideal match"));
    assert!(outcome.reasoning.contains("practice English"));

    assert!(outcome.insights[0].contains("5 compatible trainers"));
    assert!(outcome.insights[1].contains("97% compatibility"));
    assert!(outcome.insights[2].contains("Very Good"));
    assert!(outcome.handoff.contains("Sarah Johnson (97% match)"));
}

#[test]
fn language_sub_score_maxes_with_practice_bonus() {
    let scorer = CompatibilityScorer::new();
    let profile = common::chinese_beginner_profile();
    let catalog = TrainerCatalog::builtin();

    let sarah = catalog.get("trainer_001").unwrap();
    let candidate = scorer.score_trainer(&profile, sarah);

    // Speaks the language and teaches English above the bonus threshold:
    // the bonus applies and the capped sub-score sits at its 15 maximum
    assert_eq!(candidate.breakdown.language, 15);
}

#[test]
fn alternatives_are_the_two_runners_up() {
    let scorer = CompatibilityScorer::new();
    let catalog = TrainerCatalog::builtin();

    let outcome = scorer.score(&common::chinese_beginner_profile(), &catalog);

    let alternatives = outcome.alternatives();
    assert_eq!(alternatives.len(), 2);
    assert_eq!(alternatives[0].trainer.id, outcome.candidates[1].trainer.id);
}

#[test]
fn empty_catalog_falls_back_to_safe_default() {
    common::init_test_logging();
    let scorer = CompatibilityScorer::new();
    let empty = TrainerCatalog::new(1, Vec::new());

    let outcome = scorer.score(&common::english_default_profile(), &empty);

    assert_eq!(outcome.candidates.len(), 1);
    let candidate = &outcome.candidates[0];
    assert_eq!(candidate.trainer.id, safe_default_trainer().id);
    assert_eq!(candidate.score, 85);
    assert!(outcome.insights[0].contains("fallback matching"));
    assert!(outcome.handoff.contains("Fallback trainer selected"));
}

#[test]
fn scoring_is_idempotent() {
    let scorer = CompatibilityScorer::new();
    let catalog = TrainerCatalog::builtin();
    let profile = common::chinese_beginner_profile();

    assert_eq!(
        scorer.score(&profile, &catalog),
        scorer.score(&profile, &catalog)
    );
}
