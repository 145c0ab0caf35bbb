// ABOUTME: User profile model derived from free-text goal statements
// ABOUTME: Defines Language, GoalTag, ExperienceLevel, Constraints, and Profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Natural language a user writes in, detected from the raw text.
///
/// Detection is a character-class test: presence of CJK ideographs implies
/// `Chinese`. This is never user-declared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Latin-script input
    English,
    /// Input containing CJK ideographs
    Chinese,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => f.write_str("English"),
            Self::Chinese => f.write_str("Chinese"),
        }
    }
}

/// Self-assessed English proficiency inferred from the text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnglishLevel {
    /// Explicit language-anxiety signal detected
    Beginner,
    /// Chinese-language profile without an anxiety signal
    Intermediate,
    /// English-language profile
    Advanced,
}

/// Cultural context derived from language and other signals.
///
/// Drives downstream adaptation text in matching and planning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CulturalContext {
    /// Chinese-mainland context
    ChineseMainland,
    /// Anything else; gets the standard adaptation path
    Other,
}

impl fmt::Display for CulturalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChineseMainland => f.write_str("Chinese mainland"),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// Fitness goal vocabulary.
///
/// The extractor only ever emits the first four variants; `Strength` and
/// `Flexibility` exist as exercise catalog tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalTag {
    /// Weight loss / slimming
    WeightLoss,
    /// Muscle building / hypertrophy
    MuscleBuilding,
    /// Cardio and endurance
    Endurance,
    /// Default goal when no specific signal fires
    GeneralFitness,
    /// Strength work (catalog tag only)
    Strength,
    /// Mobility and flexibility (catalog tag only)
    Flexibility,
}

impl fmt::Display for GoalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLoss => f.write_str("weight loss"),
            Self::MuscleBuilding => f.write_str("muscle building"),
            Self::Endurance => f.write_str("endurance"),
            Self::GeneralFitness => f.write_str("general fitness"),
            Self::Strength => f.write_str("strength"),
            Self::Flexibility => f.write_str("flexibility"),
        }
    }
}

/// Experience level with default `Intermediate`.
///
/// When both the beginner and the experienced detectors fire, beginner wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to training
    Beginner,
    /// Some training history (default)
    Intermediate,
    /// Trains regularly, familiar with programming
    Advanced,
}

/// Equipment a user has access to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentTag {
    /// Bodyweight only
    None,
    /// Basic home equipment (bands, light dumbbells)
    Basic,
}

impl fmt::Display for EquipmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Basic => f.write_str("basic"),
        }
    }
}

/// Available training space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpaceConstraint {
    /// Small apartment; quiet, compact movements only
    SmallApartment,
    /// Normal home
    NormalHome,
}

impl fmt::Display for SpaceConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SmallApartment => f.write_str("small apartment"),
            Self::NormalHome => f.write_str("normal home"),
        }
    }
}

/// Time available per session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeAvailable {
    /// 30 minutes per session
    #[serde(rename = "30min")]
    ThirtyMin,
    /// 45 minutes per session
    #[serde(rename = "45min")]
    FortyFiveMin,
}

impl TimeAvailable {
    /// Session length in minutes
    #[must_use]
    pub const fn minutes(self) -> u8 {
        match self {
            Self::ThirtyMin => 30,
            Self::FortyFiveMin => 45,
        }
    }
}

impl fmt::Display for TimeAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}

/// Budget tier inferred from student / budget-limited signals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    /// Student or explicitly budget-limited
    Low,
    /// Default tier
    Moderate,
    /// No budget signal constraints apply
    High,
}

impl BudgetTier {
    /// Row index into the budget compatibility table
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }
}

/// Practical constraints extracted from the text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Constraints {
    /// Equipment the user has access to
    pub equipment: BTreeSet<EquipmentTag>,
    /// Available training space
    pub space: SpaceConstraint,
    /// Time available per session
    pub time_available: TimeAvailable,
    /// Budget tier
    pub budget: BudgetTier,
}

/// Structured user profile derived from free text; immutable once created.
///
/// Produced by the intake stage. `insights` is diagnostic and
/// non-authoritative; nothing downstream consumes it programmatically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Detected input language
    pub language: Language,
    /// Inferred English proficiency
    pub english_level: EnglishLevel,
    /// Cultural context driving downstream adaptation
    pub cultural_context: CulturalContext,
    /// Ordered, non-empty goal list
    pub goals: Vec<GoalTag>,
    /// Experience level, default intermediate
    pub experience_level: ExperienceLevel,
    /// Practical constraints
    pub constraints: Constraints,
    /// Whether the user would value English practice during sessions
    pub language_learning_interest: bool,
    /// Ordered human-readable findings, one per firing detector
    pub insights: Vec<String>,
    /// Free-text cultural summary templated from the resolved fields
    pub cultural_notes: String,
    /// One-sentence summary handed to the matching stage
    pub handoff: String,
}

impl Profile {
    /// Whether the profile requires apartment-safe exercise selection
    #[must_use]
    pub fn needs_small_space(&self) -> bool {
        self.constraints.space == SpaceConstraint::SmallApartment
    }

    /// Whether the user has no equipment at all
    #[must_use]
    pub fn has_no_equipment(&self) -> bool {
        self.constraints.equipment.contains(&EquipmentTag::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_available_serializes_to_wire_names() {
        let json = serde_json::to_string(&TimeAvailable::ThirtyMin).unwrap_or_default();
        assert_eq!(json, "\"30min\"");
        let json = serde_json::to_string(&TimeAvailable::FortyFiveMin).unwrap_or_default();
        assert_eq!(json, "\"45min\"");
    }

    #[test]
    fn goal_display_names_are_human_readable() {
        assert_eq!(GoalTag::WeightLoss.to_string(), "weight loss");
        assert_eq!(GoalTag::GeneralFitness.to_string(), "general fitness");
    }
}
