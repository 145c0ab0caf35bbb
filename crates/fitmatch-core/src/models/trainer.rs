// ABOUTME: Trainer catalog entry model with expertise, cultural, and pricing attributes
// ABOUTME: Defines Specialty, CulturalExperience, PricingTier, and the Trainer struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use serde::{Deserialize, Serialize};

use super::profile::GoalTag;

/// Trainer specialty tags.
///
/// Covers the goal vocabulary (so goal alignment is an exact tag match) plus
/// delivery-style and audience tags used by the experience and constraint
/// criteria.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// Weight loss coaching
    WeightLoss,
    /// Muscle building coaching
    MuscleBuilding,
    /// Endurance coaching
    Endurance,
    /// General fitness coaching
    GeneralFitness,
    /// Home-based training
    HomeFitness,
    /// Patient with first-time trainees
    BeginnerFriendly,
    /// Quiet, compact routines for apartment dwellers
    ApartmentWorkouts,
    /// Barbell and resistance programming
    StrengthTraining,
    /// Works with intermediate and advanced trainees
    IntermediateAdvanced,
    /// Movement quality and form correction
    FormCorrection,
    /// Routines that need little or no equipment
    MinimalEquipment,
    /// Short, dense sessions
    EfficientWorkouts,
    /// Scheduling around demanding work weeks
    BusySchedules,
    /// Nutrition guidance
    Nutrition,
    /// Habit and lifestyle coaching
    LifestyleCoaching,
    /// Bridging fitness culture gaps for immigrants
    CulturalBridge,
    /// Accountability and motivation coaching
    MotivationCoaching,
}

impl Specialty {
    /// Whether this specialty covers a user goal tag.
    ///
    /// Only the four goal-vocabulary specialties align with goals; delivery
    /// tags never do.
    #[must_use]
    pub const fn covers_goal(self, goal: GoalTag) -> bool {
        matches!(
            (self, goal),
            (Self::WeightLoss, GoalTag::WeightLoss)
                | (Self::MuscleBuilding, GoalTag::MuscleBuilding)
                | (Self::Endurance, GoalTag::Endurance)
                | (Self::GeneralFitness, GoalTag::GeneralFitness)
        )
    }
}

/// How deeply a trainer has worked with Chinese-mainland clients.
///
/// Ordered from strongest to weakest grade; the cultural criterion and the
/// cultural-fit label both key off this ordinal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CulturalExperience {
    /// Native or bicultural understanding
    NativeBicultural,
    /// Extensive client history in the context
    Extensive,
    /// Some client history in the context
    Moderate,
    /// Little direct experience
    Limited,
}

/// Trainer pricing tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    /// Lowest price bracket
    BudgetFriendly,
    /// Middle price bracket
    Moderate,
    /// Highest price bracket
    Premium,
}

impl PricingTier {
    /// Column index into the budget compatibility table
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::BudgetFriendly => 0,
            Self::Moderate => 1,
            Self::Premium => 2,
        }
    }
}

/// Rating vector for a trainer, on a 0.0–5.0 scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerRatings {
    /// Overall client rating
    pub overall: f64,
    /// Patience with clients
    pub patience: f64,
    /// Cultural sensitivity
    pub cultural_sensitivity: f64,
    /// Ability to teach English during sessions
    pub english_teaching: f64,
    /// Communication quality
    pub communication: f64,
}

/// Cultural attributes of a trainer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerCulturalProfile {
    /// Graded experience with Chinese-mainland clients
    pub chinese_experience: CulturalExperience,
    /// Willing to support clients practicing English
    pub language_learning_support: bool,
    /// Declared cultural adaptations, free text
    pub cultural_adaptations: Vec<String>,
    /// Coaching style descriptor
    pub motivational_style: String,
}

/// Pricing attributes of a trainer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerPricing {
    /// Price bracket
    pub tier: PricingTier,
    /// Offers a student discount
    pub student_discount: bool,
    /// Offers a free trial session
    pub trial_session: bool,
}

/// A candidate service professional with fixed attributes used for matching.
///
/// Catalog entries are static and read-only for the lifetime of a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trainer {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Home location, display only
    pub location: String,
    /// Languages spoken, free text (e.g. "Basic Mandarin")
    pub languages: Vec<String>,
    /// Professional certifications, display only
    pub certifications: Vec<String>,
    /// Specialty tag set
    pub specialties: Vec<Specialty>,
    /// Client demographic descriptors, free text
    pub client_demographics: Vec<String>,
    /// Years of coaching experience
    pub experience_years: u8,
    /// Rating vector
    pub ratings: TrainerRatings,
    /// Cultural attributes
    pub cultural: TrainerCulturalProfile,
    /// Pricing attributes
    pub pricing: TrainerPricing,
}

impl Trainer {
    /// Whether any specialty covers the given goal
    #[must_use]
    pub fn covers_goal(&self, goal: GoalTag) -> bool {
        self.specialties.iter().any(|s| s.covers_goal(goal))
    }

    /// Whether the trainer has a given specialty tag
    #[must_use]
    pub fn has_specialty(&self, specialty: Specialty) -> bool {
        self.specialties.contains(&specialty)
    }

    /// Whether any spoken-language entry mentions Mandarin or Chinese
    #[must_use]
    pub fn speaks_chinese(&self) -> bool {
        self.languages.iter().any(|lang| {
            let lang = lang.to_lowercase();
            lang.contains("mandarin") || lang.contains("chinese")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialty_goal_coverage_is_exact() {
        assert!(Specialty::WeightLoss.covers_goal(GoalTag::WeightLoss));
        assert!(!Specialty::HomeFitness.covers_goal(GoalTag::GeneralFitness));
        assert!(!Specialty::StrengthTraining.covers_goal(GoalTag::MuscleBuilding));
    }
}
