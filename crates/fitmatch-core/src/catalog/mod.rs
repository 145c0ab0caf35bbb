// ABOUTME: Read-only, versioned trainer and exercise catalogs
// ABOUTME: Injectable catalog types with query helpers and built-in data constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Static catalogs consumed by the matching and planning stages.
//!
//! Both catalogs are constructed once at startup and passed explicitly into
//! the engines, never reached through global state, so tests can substitute
//! fixtures. They are read-only for the lifetime of the process; no locking
//! is needed.

mod exercises;
mod trainers;

use serde::{Deserialize, Serialize};

use crate::models::{
    BudgetTier, EquipmentTag, ExperienceLevel, GoalTag, PricingTier, Specialty, Trainer,
};

pub use exercises::localized_exercise_name;
pub use trainers::safe_default_trainer;

/// Static collection of candidate trainers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerCatalog {
    version: u32,
    trainers: Vec<Trainer>,
}

impl TrainerCatalog {
    /// Build a catalog from explicit entries (test fixtures, external data).
    #[must_use]
    pub const fn new(version: u32, trainers: Vec<Trainer>) -> Self {
        Self { version, trainers }
    }

    /// The built-in trainer roster.
    #[must_use]
    pub fn builtin() -> Self {
        let catalog = Self::new(
            crate::constants::catalog_versions::TRAINER_CATALOG_VERSION,
            trainers::builtin_trainers(),
        );
        tracing::debug!(
            version = catalog.version,
            trainers = catalog.trainers.len(),
            "loaded built-in trainer catalog"
        );
        catalog
    }

    /// Data version of this catalog
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// All entries in catalog order
    #[must_use]
    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }

    /// Look up a trainer by its stable id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Trainer> {
        self.trainers.iter().find(|t| t.id == id)
    }

    /// Trainers carrying a specialty tag, in catalog order
    #[must_use]
    pub fn by_specialty(&self, specialty: Specialty) -> Vec<&Trainer> {
        self.trainers
            .iter()
            .filter(|t| t.has_specialty(specialty))
            .collect()
    }

    /// Trainers whose spoken languages mention the given language, in
    /// catalog order. Matching is a case-insensitive substring test, so
    /// "mandarin" matches "Fluent Mandarin".
    #[must_use]
    pub fn by_language(&self, language: &str) -> Vec<&Trainer> {
        let needle = language.to_lowercase();
        self.trainers
            .iter()
            .filter(|t| {
                t.languages
                    .iter()
                    .any(|lang| lang.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Trainers affordable at the given budget tier, in catalog order.
    ///
    /// Low budgets only reach budget-friendly pricing; moderate budgets add
    /// the moderate tier; high budgets reach everything.
    #[must_use]
    pub fn by_budget(&self, budget: BudgetTier) -> Vec<&Trainer> {
        let allowed: &[PricingTier] = match budget {
            BudgetTier::Low => &[PricingTier::BudgetFriendly],
            BudgetTier::Moderate => &[PricingTier::BudgetFriendly, PricingTier::Moderate],
            BudgetTier::High => &[
                PricingTier::BudgetFriendly,
                PricingTier::Moderate,
                PricingTier::Premium,
            ],
        };
        self.trainers
            .iter()
            .filter(|t| allowed.contains(&t.pricing.tier))
            .collect()
    }
}

/// One activity template in the exercise catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseEntry {
    /// Exercise name, also the key into the translation table
    pub name: String,
    /// Goal tags this exercise serves
    pub goals: Vec<GoalTag>,
    /// Equipment the exercise requires
    pub equipment: EquipmentTag,
    /// Safe for small apartments
    pub apartment_friendly: bool,
    /// Prescribed sets and reps
    pub reps: String,
    /// Difficulty of the movement
    pub difficulty: ExperienceLevel,
    /// Primary muscle groups
    pub muscles: Vec<String>,
    /// Quiet enough not to disturb neighbors
    pub quiet: bool,
}

impl ExerciseEntry {
    /// Whether this entry is tagged with the given goal
    #[must_use]
    pub fn serves_goal(&self, goal: GoalTag) -> bool {
        self.goals.contains(&goal)
    }
}

/// Static collection of activity templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    version: u32,
    entries: Vec<ExerciseEntry>,
}

impl ExerciseCatalog {
    /// Build a catalog from explicit entries (test fixtures, external data).
    #[must_use]
    pub const fn new(version: u32, entries: Vec<ExerciseEntry>) -> Self {
        Self { version, entries }
    }

    /// The built-in exercise library.
    #[must_use]
    pub fn builtin() -> Self {
        let catalog = Self::new(
            crate::constants::catalog_versions::EXERCISE_CATALOG_VERSION,
            exercises::builtin_exercises(),
        );
        tracing::debug!(
            version = catalog.version,
            entries = catalog.entries.len(),
            "loaded built-in exercise catalog"
        );
        catalog
    }

    /// Data version of this catalog
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
