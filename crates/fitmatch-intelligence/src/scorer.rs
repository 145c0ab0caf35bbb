// ABOUTME: Trainer compatibility scoring with a fixed-weight six-criterion rubric
// ABOUTME: Produces ranked, fully decomposed candidate scores with reason phrases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Compatibility scoring.
//!
//! The score is a linear rubric over six independent criteria, each capped
//! at a declared maximum, summed and clamped to 100. Reasons and the
//! cultural-fit label are generated from the same underlying conditions but
//! independently of the numeric score, so a reason list never contradicts
//! its score decomposition.

use tracing::debug;

use fitmatch_core::catalog::{safe_default_trainer, TrainerCatalog};
use fitmatch_core::errors::StageError;
use fitmatch_core::models::{
    BudgetTier, CulturalContext, CulturalExperience, CulturalFit, ExperienceLevel, Language,
    MatchOutcome, Profile, ScoreBreakdown, ScoredCandidate, SpaceConstraint, Specialty, Trainer,
};

use crate::config::ScorerConfig;
use crate::fallback::or_fallback;

/// Ranks a trainer catalog against a profile.
///
/// Never fails outward: on any internal fault (for example an empty
/// catalog) a single-candidate outcome wrapping the fixed safe-default
/// trainer is returned so the pipeline always has a recommendation.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    config: ScorerConfig,
}

impl CompatibilityScorer {
    /// Create a scorer with the production scoring constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::default(),
        }
    }

    /// Create a scorer with custom scoring constants.
    #[must_use]
    pub const fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// The active scoring constants.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score every catalog trainer against the profile, highest first.
    /// Ties keep catalog order. Infallible by contract.
    #[must_use]
    pub fn score(&self, profile: &Profile, catalog: &TrainerCatalog) -> MatchOutcome {
        or_fallback(self.try_score(profile, catalog), || {
            self.fallback_outcome()
        })
    }

    fn try_score(
        &self,
        profile: &Profile,
        catalog: &TrainerCatalog,
    ) -> Result<MatchOutcome, StageError> {
        if catalog.is_empty() {
            return Err(StageError::Scoring {
                reason: "trainer catalog is empty",
            });
        }

        let mut candidates: Vec<ScoredCandidate> = catalog
            .trainers()
            .iter()
            .map(|trainer| self.score_trainer(profile, trainer))
            .collect();
        // Stable sort keeps catalog order on ties
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let top = candidates.first().ok_or(StageError::Scoring {
            reason: "no candidates produced",
        })?;
        debug!(
            top_trainer = %top.trainer.id,
            top_score = top.score,
            candidates = candidates.len(),
            "compatibility ranking complete"
        );

        let reasoning = self.narrative(profile, top);
        let insights = vec![
            format!(
                "Found {} compatible trainers based on your profile",
                candidates.len()
            ),
            format!("Top match has {}% compatibility", top.score),
            format!("Cultural compatibility: {}", top.cultural_fit),
        ];
        let cultural_notes = Self::cultural_notes(profile, &top.trainer);
        let handoff = format!(
            "Trainer selected: {} ({}% match). Ready for workout planning with cultural \
             considerations: {}.",
            top.trainer.name, top.score, profile.cultural_context
        );

        Ok(MatchOutcome {
            candidates,
            reasoning,
            insights,
            cultural_notes,
            handoff,
        })
    }

    /// Score one trainer. The total is the clamped sum of the six capped
    /// sub-scores recorded in the breakdown.
    #[must_use]
    pub fn score_trainer(&self, profile: &Profile, trainer: &Trainer) -> ScoredCandidate {
        let breakdown = ScoreBreakdown {
            goal_alignment: self.goal_alignment(profile, trainer),
            experience_match: self.experience_match(profile, trainer),
            cultural: self.cultural_score(profile, trainer),
            language: self.language_score(profile, trainer),
            constraint_fit: self.constraint_score(profile, trainer),
            budget_fit: self.budget_score(profile, trainer),
        };
        let score = breakdown.sum().min(self.config.total_cap);

        ScoredCandidate {
            trainer: trainer.clone(),
            score,
            reasons: Self::reasons(profile, trainer),
            cultural_fit: Self::cultural_fit(profile, trainer),
            breakdown,
        }
    }

    fn goal_alignment(&self, profile: &Profile, trainer: &Trainer) -> u8 {
        if profile.goals.iter().any(|goal| trainer.covers_goal(*goal)) {
            self.config.goal_alignment_points
        } else {
            0
        }
    }

    /// Level-appropriate keywords checked against specialties and client
    /// demographics. Exact tag membership, as the catalog data is curated
    /// around these keywords.
    fn experience_match(&self, profile: &Profile, trainer: &Trainer) -> u8 {
        let (specialty_keys, demographic_keys): (&[Specialty], &[&str]) =
            match profile.experience_level {
                ExperienceLevel::Beginner => (
                    &[Specialty::BeginnerFriendly],
                    &["beginner_friendly", "beginners"],
                ),
                ExperienceLevel::Intermediate => (
                    &[Specialty::IntermediateAdvanced],
                    &["intermediate_advanced", "intermediate"],
                ),
                ExperienceLevel::Advanced => (
                    &[Specialty::IntermediateAdvanced],
                    &["intermediate_advanced", "advanced"],
                ),
            };

        let matched = specialty_keys.iter().any(|s| trainer.has_specialty(*s))
            || demographic_keys
                .iter()
                .any(|key| trainer.client_demographics.iter().any(|d| d == key));

        if matched {
            self.config.experience_full_points
        } else {
            self.config.experience_partial_points
        }
    }

    fn cultural_score(&self, profile: &Profile, trainer: &Trainer) -> u8 {
        if profile.cultural_context != CulturalContext::ChineseMainland {
            return self.config.cultural_default_points;
        }

        let mut points = match trainer.cultural.chinese_experience {
            CulturalExperience::NativeBicultural => self.config.cultural_native_points,
            CulturalExperience::Extensive => self.config.cultural_extensive_points,
            CulturalExperience::Moderate => self.config.cultural_moderate_points,
            CulturalExperience::Limited => self.config.cultural_limited_points,
        };
        if !trainer.cultural.cultural_adaptations.is_empty() {
            points = points.saturating_add(self.config.cultural_adaptation_bonus);
        }
        points.min(self.config.cultural_cap)
    }

    fn language_score(&self, profile: &Profile, trainer: &Trainer) -> u8 {
        if profile.language != Language::Chinese {
            return self.config.language_default_points;
        }

        let mut points = if trainer.speaks_chinese() {
            self.config.language_spoken_points
        } else if trainer.cultural.language_learning_support {
            self.config.language_support_points
        } else {
            self.config.language_minimal_points
        };
        if profile.language_learning_interest
            && trainer.ratings.english_teaching > self.config.english_teaching_threshold
        {
            points = points.saturating_add(self.config.language_practice_bonus);
        }
        points.min(self.config.language_cap)
    }

    fn constraint_score(&self, profile: &Profile, trainer: &Trainer) -> u8 {
        let mut points = 0_u8;
        if profile.needs_small_space()
            && (trainer.has_specialty(Specialty::ApartmentWorkouts)
                || trainer.has_specialty(Specialty::HomeFitness))
        {
            points = points.saturating_add(self.config.constraint_space_bonus);
        }
        if profile.has_no_equipment()
            && (trainer.has_specialty(Specialty::MinimalEquipment)
                || trainer.has_specialty(Specialty::HomeFitness))
        {
            points = points.saturating_add(self.config.constraint_equipment_bonus);
        }
        points
    }

    fn budget_score(&self, profile: &Profile, trainer: &Trainer) -> u8 {
        let budget = profile.constraints.budget;
        let mut points = self.config.budget_points(budget, trainer.pricing.tier);
        if budget == BudgetTier::Low && trainer.pricing.student_discount {
            points = points.saturating_add(self.config.budget_student_discount_bonus);
        }
        points.min(self.config.budget_cap)
    }

    /// Reason phrases, each included only if its underlying condition holds.
    fn reasons(profile: &Profile, trainer: &Trainer) -> Vec<String> {
        let mut reasons = Vec::new();

        let matching_goals: Vec<String> = profile
            .goals
            .iter()
            .filter(|goal| trainer.covers_goal(**goal))
            .map(ToString::to_string)
            .collect();
        if !matching_goals.is_empty() {
            reasons.push(format!("Specializes in {}", matching_goals.join(" and ")));
        }

        if profile.cultural_context == CulturalContext::ChineseMainland {
            match trainer.cultural.chinese_experience {
                CulturalExperience::NativeBicultural => {
                    reasons.push("Native bicultural understanding".to_owned());
                }
                CulturalExperience::Extensive => {
                    reasons.push("Extensive experience with Chinese clients".to_owned());
                }
                CulturalExperience::Moderate | CulturalExperience::Limited => {}
            }
            if trainer.speaks_chinese() {
                reasons.push("Speaks Mandarin".to_owned());
            }
        }

        if profile.experience_level == ExperienceLevel::Beginner
            && trainer.has_specialty(Specialty::BeginnerFriendly)
        {
            reasons.push("Patient with beginners".to_owned());
        }

        if profile.constraints.space == SpaceConstraint::SmallApartment
            && trainer.has_specialty(Specialty::ApartmentWorkouts)
        {
            reasons.push("Apartment-friendly workouts".to_owned());
        }

        if reasons.is_empty() {
            reasons.push("Good overall compatibility".to_owned());
        }
        reasons
    }

    /// Cultural-fit label, derived only from the experience ordinal.
    fn cultural_fit(profile: &Profile, trainer: &Trainer) -> CulturalFit {
        if profile.cultural_context != CulturalContext::ChineseMainland {
            return CulturalFit::Good;
        }
        match trainer.cultural.chinese_experience {
            CulturalExperience::NativeBicultural => CulturalFit::Excellent,
            CulturalExperience::Extensive => CulturalFit::VeryGood,
            CulturalExperience::Moderate => CulturalFit::Good,
            CulturalExperience::Limited => CulturalFit::Fair,
        }
    }

    /// Multi-sentence narrative about the top-ranked candidate only.
    fn narrative(&self, profile: &Profile, top: &ScoredCandidate) -> String {
        let trainer = &top.trainer;
        let mut sentences = vec![format!("{} is an ideal match because:", trainer.name)];

        if profile.cultural_context == CulturalContext::ChineseMainland {
            match trainer.cultural.chinese_experience {
                CulturalExperience::NativeBicultural => sentences.push(
                    "They have native bicultural understanding and can bridge Chinese and \
                     American fitness approaches."
                        .to_owned(),
                ),
                CulturalExperience::Extensive => sentences.push(
                    "They have extensive experience working with Chinese clients and understand \
                     cultural nuances."
                        .to_owned(),
                ),
                CulturalExperience::Moderate | CulturalExperience::Limited => {}
            }
        }

        let matching_goals: Vec<String> = profile
            .goals
            .iter()
            .filter(|goal| trainer.covers_goal(**goal))
            .map(ToString::to_string)
            .collect();
        if !matching_goals.is_empty() {
            sentences.push(format!(
                "Their specialties in {} align perfectly with your goals.",
                matching_goals.join(" and ")
            ));
        }

        if profile.constraints.space == SpaceConstraint::SmallApartment
            && trainer.has_specialty(Specialty::ApartmentWorkouts)
        {
            sentences.push(
                "They specialize in apartment-friendly workouts that work within your space \
                 constraints."
                    .to_owned(),
            );
        }

        if profile.language_learning_interest
            && trainer.ratings.english_teaching > self.config.english_teaching_threshold
        {
            sentences.push(
                "They can help you practice English while working out, supporting your language \
                 learning goals."
                    .to_owned(),
            );
        }

        sentences.join(" ")
    }

    fn cultural_notes(profile: &Profile, trainer: &Trainer) -> String {
        if profile.cultural_context == CulturalContext::ChineseMainland {
            format!(
                "{} understands Chinese cultural preferences for supportive coaching, apartment \
                 living constraints, and can facilitate English practice during sessions.",
                trainer.name
            )
        } else {
            format!(
                "{} will adapt their coaching style to your personal preferences and cultural \
                 background.",
                trainer.name
            )
        }
    }

    /// The fixed safe-default recommendation used when scoring faults.
    fn fallback_outcome(&self) -> MatchOutcome {
        let trainer = safe_default_trainer();
        let reason =
            "Excellent all-around trainer with cultural sensitivity and beginner-friendly \
             approach."
                .to_owned();
        // Canned decomposition of the fixed fallback score
        let breakdown = ScoreBreakdown {
            goal_alignment: 25,
            experience_match: 20,
            cultural: 15,
            language: 15,
            constraint_fit: 0,
            budget_fit: 10,
        };
        let handoff = format!(
            "Fallback trainer selected: {}. Ready for workout planning.",
            trainer.name
        );
        let candidate = ScoredCandidate {
            trainer,
            score: self.config.fallback_score,
            reasons: vec![reason.clone()],
            cultural_fit: CulturalFit::Good,
            breakdown,
        };

        MatchOutcome {
            candidates: vec![candidate],
            reasoning: reason,
            insights: vec![
                "Using fallback matching due to processing error".to_owned(),
                "Selected trainer has excellent ratings".to_owned(),
                "Cultural compatibility verified".to_owned(),
            ],
            cultural_notes: "Trainer has experience with diverse cultural backgrounds and \
                             adaptive coaching methods."
                .to_owned(),
            handoff,
        }
    }
}
