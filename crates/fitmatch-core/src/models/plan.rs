// ABOUTME: Workout plan model produced by the planning stage
// ABOUTME: Defines PlanOverview, PlannedExercise, progression phases, and Plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use serde::{Deserialize, Serialize};

use super::profile::{ExperienceLevel, TimeAvailable};

/// How quickly difficulty ramps across the plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionStyle {
    /// Slow ramp for beginners
    Gradual,
    /// Standard ramp
    Moderate,
}

/// Plan-level summary derived from the profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanOverview {
    /// Total program length in weeks
    pub duration_weeks: u8,
    /// Training sessions per week
    pub frequency_per_week: u8,
    /// Length of each session
    pub session_length: TimeAvailable,
    /// Difficulty ramp style
    pub progression: ProgressionStyle,
    /// Goal focus label, e.g. "weight loss + endurance"
    pub focus: String,
}

/// One exercise selected into the plan, with localization annotations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedExercise {
    /// Catalog exercise name
    pub name: String,
    /// Translated name for Chinese-language profiles, when the fixed
    /// translation table has an entry
    pub localized_name: Option<String>,
    /// Prescribed sets and reps, free text
    pub reps: String,
    /// Difficulty of the movement
    pub difficulty: ExperienceLevel,
    /// Primary muscle groups, display only
    pub muscles: Vec<String>,
    /// Whether the movement is quiet enough for shared walls
    pub quiet: bool,
    /// Space/noise note templated from `quiet` and the profile language
    pub cultural_note: String,
}

/// Language-practice supplement for Chinese-language profiles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagePractice {
    /// Bilingual vocabulary to learn each week
    pub weekly_vocabulary: Vec<String>,
    /// Bilingual in-session phrases
    pub exercise_phrases: Vec<String>,
    /// Bilingual conversation starters
    pub conversation_starters: Vec<String>,
}

/// One phase of a multi-week progression
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressionPhase {
    /// Week span label, e.g. "Weeks 3-4"
    pub weeks: String,
    /// Phase focus
    pub focus: String,
    /// What progresses during the phase
    pub progression: String,
}

/// Motivational-style descriptor; two fixed variants keyed by language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MotivationalApproach {
    /// Overall coaching style
    pub style: String,
    /// Communication approach
    pub communication: String,
    /// Feedback approach
    pub feedback: String,
}

/// Personalized, constraint-respecting workout plan; immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Plan-level summary
    pub overview: PlanOverview,
    /// Selected exercises, bounded by the documented minimum and maximum
    pub exercises: Vec<PlannedExercise>,
    /// Cultural and constraint adaptation notes
    pub adaptation_notes: Vec<String>,
    /// English-practice supplement, Chinese-language profiles only
    pub language_practice: Option<LanguagePractice>,
    /// Multi-week progression phases; three for beginners, empty otherwise
    pub progression_phases: Vec<ProgressionPhase>,
    /// Goal- and language-conditioned nutrition notes
    pub nutrition_notes: Vec<String>,
    /// Motivational-style descriptor
    pub motivational_approach: MotivationalApproach,
    /// Human-readable findings about the generated plan
    pub insights: Vec<String>,
    /// Cultural summary of the plan
    pub cultural_notes: String,
    /// One-sentence completion summary for display
    pub handoff: String,
}
