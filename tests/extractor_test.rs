// ABOUTME: Unit tests for free-text profile extraction
// ABOUTME: Validates detector resolution, defaults, tie-breaks, and insight ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Fitmatch

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitmatch::models::{
    BudgetTier, CulturalContext, EnglishLevel, EquipmentTag, ExperienceLevel, GoalTag, Language,
    SpaceConstraint, TimeAvailable,
};
use fitmatch::ProfileExtractor;

#[test]
fn chinese_beginner_scenario_resolves_every_field() {
    common::init_test_logging();
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("我是初学者，想减肥，住在小公寓，没有器械");

    assert_eq!(profile.language, Language::Chinese);
    assert_eq!(profile.cultural_context, CulturalContext::ChineseMainland);
    assert_eq!(profile.constraints.space, SpaceConstraint::SmallApartment);
    assert!(profile.constraints.equipment.contains(&EquipmentTag::None));
    assert_eq!(profile.constraints.equipment.len(), 1);
    assert!(profile.goals.contains(&GoalTag::WeightLoss));
    assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
    assert!(profile.language_learning_interest);
}

#[test]
fn language_anxiety_downgrades_english_level() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("我想减肥但是我的英语不好我住在上海的小公寓里");

    assert_eq!(profile.language, Language::Chinese);
    assert_eq!(profile.english_level, EnglishLevel::Beginner);
    assert_eq!(profile.goals, vec![GoalTag::WeightLoss]);
    assert_eq!(profile.constraints.space, SpaceConstraint::SmallApartment);
    assert!(profile
        .insights
        .iter()
        .any(|insight| insight.contains("English language practice")));
    assert!(profile.handoff.contains("English learning interest"));
    assert!(profile.handoff.contains("space constraints"));
}

#[test]
fn empty_input_yields_documented_defaults() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("");

    assert_eq!(profile.language, Language::English);
    assert_eq!(profile.english_level, EnglishLevel::Advanced);
    assert_eq!(profile.goals, vec![GoalTag::GeneralFitness]);
    assert_eq!(profile.experience_level, ExperienceLevel::Intermediate);
    assert_eq!(profile.constraints.budget, BudgetTier::Moderate);
    assert_eq!(profile.constraints.space, SpaceConstraint::NormalHome);
    assert_eq!(
        profile.constraints.time_available,
        TimeAvailable::FortyFiveMin
    );
    assert!(profile.constraints.equipment.contains(&EquipmentTag::Basic));
    assert_eq!(
        profile.insights,
        vec![
            "User seeking personalized fitness guidance".to_owned(),
            "Flexible approach needed based on stated preferences".to_owned(),
            "Good candidate for structured fitness program".to_owned(),
        ]
    );
}

#[test]
fn nonsense_input_matches_default_profile() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("zzz qqq 12345 ###");

    assert_eq!(profile, ProfileExtractor::default_profile());
}

#[test]
fn beginner_wins_when_both_level_detectors_fire() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("I am a beginner but I have done yoga regularly for years");

    assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
}

#[test]
fn goal_detectors_union_in_fixed_order() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("I want to lose weight, build muscle, and improve my cardio");

    assert_eq!(
        profile.goals,
        vec![
            GoalTag::WeightLoss,
            GoalTag::MuscleBuilding,
            GoalTag::Endurance
        ]
    );
}

#[test]
fn english_anxiety_without_chinese_text_keeps_generic_insights() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("My English is not good");

    assert_eq!(profile.language, Language::English);
    assert_eq!(profile.english_level, EnglishLevel::Beginner);
    // The anxiety insight only applies alongside the Chinese-text signal,
    // and nothing else fired here
    assert_eq!(profile.insights.len(), 3);
    assert!(profile.insights[0].contains("personalized fitness guidance"));
}

#[test]
fn student_signal_lowers_budget() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("I am a university student looking to get fit");

    assert_eq!(profile.constraints.budget, BudgetTier::Low);
    assert!(profile
        .insights
        .iter()
        .any(|insight| insight.contains("Budget-conscious student")));
    assert!(profile.handoff.contains("student"));
}

#[test]
fn busy_signal_shortens_sessions() {
    let extractor = ProfileExtractor::new();

    let profile = extractor.extract("I am very busy with work");

    assert_eq!(profile.constraints.time_available, TimeAvailable::ThirtyMin);
}

#[test]
fn insight_order_follows_detector_priority() {
    let extractor = ProfileExtractor::new();

    // Fires chinese, small-space, student, anxiety, and no-equipment
    let profile = extractor.extract("我是学生，英语不好，住小公寓，没有器械");

    let insights = &profile.insights;
    assert_eq!(insights.len(), 5);
    assert!(insights[0].contains("Chinese communication"));
    assert!(insights[1].contains("Limited space"));
    assert!(insights[2].contains("Budget-conscious student"));
    assert!(insights[3].contains("English language practice"));
    assert!(insights[4].contains("Bodyweight exercises essential"));
}

#[test]
fn extraction_is_idempotent() {
    let extractor = ProfileExtractor::new();
    let text = "我想减肥但是我的英语不好我住在上海的小公寓里";

    assert_eq!(extractor.extract(text), extractor.extract(text));
}
