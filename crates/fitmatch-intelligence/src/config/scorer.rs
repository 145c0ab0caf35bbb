// ABOUTME: Compatibility scorer configuration for criterion weights and caps
// ABOUTME: Holds point values, the budget table, and the teaching-rating bonus threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use fitmatch_core::models::{BudgetTier, PricingTier};
use serde::{Deserialize, Serialize};

/// Compatibility scorer configuration.
///
/// Six criteria, each capped at a declared maximum; the caps sum to 100 so
/// the clamped total always lands in 0–100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Points for goal alignment; all or nothing
    pub goal_alignment_points: u8,
    /// Points when a level-appropriate keyword matches
    pub experience_full_points: u8,
    /// Points when no level keyword matches
    pub experience_partial_points: u8,
    /// Cap on the cultural criterion
    pub cultural_cap: u8,
    /// Cultural points for a native/bicultural trainer
    pub cultural_native_points: u8,
    /// Cultural points for extensive experience
    pub cultural_extensive_points: u8,
    /// Cultural points for moderate experience
    pub cultural_moderate_points: u8,
    /// Cultural points for limited experience
    pub cultural_limited_points: u8,
    /// Bonus for declared cultural adaptations
    pub cultural_adaptation_bonus: u8,
    /// Flat cultural credit when no special context applies
    pub cultural_default_points: u8,
    /// Cap on the language criterion
    pub language_cap: u8,
    /// Points when the trainer speaks the profile language
    pub language_spoken_points: u8,
    /// Points when the trainer supports language learning without speaking it
    pub language_support_points: u8,
    /// Minimal language credit otherwise
    pub language_minimal_points: u8,
    /// Bonus when the user wants language practice and the trainer teaches well
    pub language_practice_bonus: u8,
    /// English-teaching rating a trainer must exceed for the practice bonus
    pub english_teaching_threshold: f64,
    /// Flat language credit for English-language profiles
    pub language_default_points: u8,
    /// Bonus when trainer specialties cover the space constraint
    pub constraint_space_bonus: u8,
    /// Bonus when trainer specialties cover the equipment constraint
    pub constraint_equipment_bonus: u8,
    /// Budget compatibility table, indexed by
    /// `[BudgetTier::index()][PricingTier::index()]`
    pub budget_table: [[u8; 3]; 3],
    /// Bonus for a student discount when the profile budget is low
    pub budget_student_discount_bonus: u8,
    /// Cap on the budget criterion
    pub budget_cap: u8,
    /// Clamp on the summed total
    pub total_cap: u8,
    /// Canned score assigned to the fallback recommendation
    pub fallback_score: u8,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            goal_alignment_points: 25,
            experience_full_points: 20,
            experience_partial_points: 10,
            cultural_cap: 20,
            cultural_native_points: 20,
            cultural_extensive_points: 15,
            cultural_moderate_points: 10,
            cultural_limited_points: 5,
            cultural_adaptation_bonus: 5,
            cultural_default_points: 15,
            language_cap: 15,
            language_spoken_points: 15,
            language_support_points: 10,
            language_minimal_points: 5,
            language_practice_bonus: 5,
            english_teaching_threshold: 4.0,
            language_default_points: 15,
            constraint_space_bonus: 5,
            constraint_equipment_bonus: 5,
            budget_table: [[10, 5, 0], [10, 10, 5], [10, 10, 10]],
            budget_student_discount_bonus: 2,
            budget_cap: 10,
            total_cap: 100,
            fallback_score: 85,
        }
    }
}

impl ScorerConfig {
    /// Budget table lookup for a (profile budget, trainer pricing) pair
    #[must_use]
    pub const fn budget_points(&self, budget: BudgetTier, tier: PricingTier) -> u8 {
        self.budget_table[budget.index()][tier.index()]
    }
}
