// ABOUTME: Workout plan synthesis from profile, selected trainer, and exercise catalog
// ABOUTME: Table-driven overview plus constraint-filtered exercise selection with backfill
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Plan synthesis.
//!
//! Overview derivation is table-driven from the profile; exercise selection
//! walks the catalog per goal, filters by equipment and space, then
//! backfills from no-equipment apartment-safe entries so the plan never
//! drops below the documented floor while the catalog has eligible entries.

use tracing::debug;

use fitmatch_core::catalog::{localized_exercise_name, ExerciseCatalog, ExerciseEntry};
use fitmatch_core::errors::StageError;
use fitmatch_core::models::{
    BudgetTier, EquipmentTag, ExperienceLevel, GoalTag, Language, LanguagePractice,
    MotivationalApproach, Plan, PlanOverview, PlannedExercise, Profile, ProgressionPhase,
    ProgressionStyle, TimeAvailable, Trainer,
};

use crate::config::PlannerConfig;
use crate::fallback::or_fallback;

/// Assembles a constraint-respecting workout plan.
///
/// Never fails outward: on any internal fault a fixed minimal two-exercise
/// plan with canned adaptation notes is returned.
#[derive(Debug, Clone, Default)]
pub struct PlanSynthesizer {
    config: PlannerConfig,
}

impl PlanSynthesizer {
    /// Create a synthesizer with the production plan constants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create a synthesizer with custom plan constants.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active plan constants.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Synthesize a plan for the profile and its selected trainer.
    /// Infallible by contract.
    #[must_use]
    pub fn synthesize(
        &self,
        profile: &Profile,
        trainer: &Trainer,
        catalog: &ExerciseCatalog,
    ) -> Plan {
        or_fallback(
            self.try_synthesize(profile, trainer, catalog),
            Self::fallback_plan,
        )
    }

    fn try_synthesize(
        &self,
        profile: &Profile,
        trainer: &Trainer,
        catalog: &ExerciseCatalog,
    ) -> Result<Plan, StageError> {
        if catalog.is_empty() {
            return Err(StageError::Synthesis {
                reason: "exercise catalog is empty",
            });
        }
        debug!(trainer_id = %trainer.id, "synthesizing plan for selected trainer");

        let overview = self.overview(profile);
        let exercises = self.select_exercises(profile, catalog);

        let equipment_list = profile
            .constraints
            .equipment
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        let insights = vec![
            format!(
                "Generated {}-exercise routine tailored to your goals",
                exercises.len()
            ),
            format!(
                "Adapted for {} with {equipment_list} equipment",
                profile.constraints.space
            ),
            format!(
                "Includes cultural considerations for {} context",
                profile.cultural_context
            ),
        ];
        let handoff = format!(
            "Complete workout plan ready! {}-week program with {}x per week schedule, culturally \
             adapted for {} preferences.",
            overview.duration_weeks, overview.frequency_per_week, profile.cultural_context
        );

        Ok(Plan {
            progression_phases: self.progression_phases(profile, overview.duration_weeks),
            overview,
            exercises,
            adaptation_notes: Self::adaptation_notes(profile),
            language_practice: (profile.language == Language::Chinese)
                .then(Self::language_practice),
            nutrition_notes: Self::nutrition_notes(profile),
            motivational_approach: Self::motivational_approach(profile.language),
            insights,
            cultural_notes: Self::plan_cultural_notes(profile),
            handoff,
        })
    }

    fn overview(&self, profile: &Profile) -> PlanOverview {
        let duration_weeks = self.duration_weeks(profile);
        let frequency_per_week =
            self.frequency_per_week(profile.constraints.time_available, profile.experience_level);
        let progression = if profile.experience_level == ExperienceLevel::Beginner {
            ProgressionStyle::Gradual
        } else {
            ProgressionStyle::Moderate
        };
        let focus = profile
            .goals
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ");

        PlanOverview {
            duration_weeks,
            frequency_per_week,
            session_length: profile.constraints.time_available,
            progression,
            focus,
        }
    }

    /// Beginners get the short fixed program; otherwise the first matching
    /// goal rule decides (weight loss before muscle building).
    fn duration_weeks(&self, profile: &Profile) -> u8 {
        if profile.experience_level == ExperienceLevel::Beginner {
            self.config.beginner_weeks
        } else if profile.goals.contains(&GoalTag::WeightLoss) {
            self.config.weight_loss_weeks
        } else if profile.goals.contains(&GoalTag::MuscleBuilding) {
            self.config.muscle_building_weeks
        } else {
            self.config.default_weeks
        }
    }

    /// Both supported session lengths map to the same weekly cadence, so
    /// only the level differentiates here.
    const fn frequency_per_week(
        &self,
        _time_available: TimeAvailable,
        level: ExperienceLevel,
    ) -> u8 {
        match level {
            ExperienceLevel::Beginner => self.config.beginner_frequency,
            ExperienceLevel::Intermediate | ExperienceLevel::Advanced => {
                self.config.default_frequency
            }
        }
    }

    /// Per-goal first-N selection in catalog order, concatenated without
    /// de-duplication, filtered by equipment and space, then backfilled from
    /// no-equipment apartment-safe entries up to the floor and truncated to
    /// the ceiling.
    fn select_exercises(&self, profile: &Profile, catalog: &ExerciseCatalog) -> Vec<PlannedExercise> {
        let mut selected: Vec<&ExerciseEntry> = Vec::new();
        for goal in &profile.goals {
            selected.extend(
                catalog
                    .entries()
                    .iter()
                    .filter(|entry| entry.serves_goal(*goal))
                    .take(self.config.per_goal_take),
            );
        }

        selected.retain(|entry| profile.constraints.equipment.contains(&entry.equipment));
        if profile.needs_small_space() {
            selected.retain(|entry| entry.apartment_friendly);
        }

        if selected.len() < self.config.min_exercises {
            let mut backfill = catalog
                .entries()
                .iter()
                .filter(|entry| entry.equipment == EquipmentTag::None && entry.apartment_friendly);
            while selected.len() < self.config.min_exercises {
                match backfill.next() {
                    Some(entry) => selected.push(entry),
                    None => break,
                }
            }
        }
        selected.truncate(self.config.max_exercises);

        selected
            .into_iter()
            .map(|entry| Self::annotate(profile, entry))
            .collect()
    }

    fn annotate(profile: &Profile, entry: &ExerciseEntry) -> PlannedExercise {
        let localized_name = (profile.language == Language::Chinese)
            .then(|| localized_exercise_name(&entry.name))
            .flatten()
            .map(str::to_owned);

        PlannedExercise {
            name: entry.name.clone(),
            localized_name,
            reps: entry.reps.clone(),
            difficulty: entry.difficulty,
            muscles: entry.muscles.clone(),
            quiet: entry.quiet,
            cultural_note: Self::exercise_note(profile, entry),
        }
    }

    fn exercise_note(profile: &Profile, entry: &ExerciseEntry) -> String {
        match profile.language {
            Language::Chinese if entry.quiet => {
                "适合公寓环境，不会打扰邻居 (Apartment-friendly, won't disturb neighbors)".to_owned()
            }
            Language::Chinese => {
                "注意控制音量，考虑邻居感受 (Control noise level, consider neighbors)".to_owned()
            }
            Language::English if entry.apartment_friendly => {
                "Suitable for home environment".to_owned()
            }
            Language::English => "May require more space".to_owned(),
        }
    }

    fn adaptation_notes(profile: &Profile) -> Vec<String> {
        let mut notes = Vec::new();

        if profile.language == Language::Chinese {
            notes.push("All exercises designed for apartment living with noise consideration".to_owned());
            notes.push("Instructions provided in both English and Chinese".to_owned());
            notes.push(
                "Respects Chinese cultural preferences for discrete, non-disruptive exercise"
                    .to_owned(),
            );
            if profile.needs_small_space() {
                notes.push("Optimized for typical Chinese apartment space constraints".to_owned());
            }
        }

        if profile.has_no_equipment() {
            notes.push("No equipment needed - perfect for minimalist approach".to_owned());
        }

        if profile.constraints.budget == BudgetTier::Low {
            notes.push(
                "Cost-effective routine requiring no gym membership or expensive equipment"
                    .to_owned(),
            );
        }

        notes
    }

    fn language_practice() -> LanguagePractice {
        let strings = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
        LanguagePractice {
            weekly_vocabulary: strings(&[
                "form (姿势)",
                "repetition (重复)",
                "set (组)",
                "rest (休息)",
                "strength (力量)",
                "endurance (耐力)",
                "balance (平衡)",
            ]),
            exercise_phrases: strings(&[
                "Good form! 姿势很好！",
                "Take a rest. 休息一下。",
                "You're getting stronger! 你变强了！",
                "Focus on your breathing. 专注呼吸。",
            ]),
            conversation_starters: strings(&[
                "How did that exercise feel? 这个动作感觉怎么样？",
                "Are you ready for the next set? 准备好下一组了吗？",
                "What's your energy level today? 今天精力如何？",
            ]),
        }
    }

    /// Three phases for beginners, boundaries computed from the total week
    /// count; everyone else progresses freely and gets no phase structure.
    fn progression_phases(&self, profile: &Profile, weeks: u8) -> Vec<ProgressionPhase> {
        if profile.experience_level != ExperienceLevel::Beginner {
            return Vec::new();
        }

        let form_weeks = self.config.form_phase_weeks;
        let halfway = weeks / 2;
        vec![
            ProgressionPhase {
                weeks: format!("Weeks 1-{form_weeks}"),
                focus: "Form and Habit Building".to_owned(),
                progression: "Master basic movements, establish routine".to_owned(),
            },
            ProgressionPhase {
                weeks: format!("Weeks {}-{halfway}", form_weeks + 1),
                focus: "Strength Foundation".to_owned(),
                progression: "Increase repetitions, add complexity".to_owned(),
            },
            ProgressionPhase {
                weeks: format!("Weeks {}-{weeks}", halfway + 1),
                focus: "Goal Optimization".to_owned(),
                progression: "Intensify based on primary goals".to_owned(),
            },
        ]
    }

    fn nutrition_notes(profile: &Profile) -> Vec<String> {
        if profile.language != Language::Chinese {
            return vec!["Maintain balanced nutrition to support your fitness goals".to_owned()];
        }

        let mut notes =
            vec!["考虑中式饮食习惯，平衡蛋白质摄入 (Consider Chinese dietary habits, balance protein intake)".to_owned()];
        if profile.goals.contains(&GoalTag::WeightLoss) {
            notes.push("减少米饭分量，增加蔬菜 (Reduce rice portions, increase vegetables)".to_owned());
        }
        if profile.goals.contains(&GoalTag::MuscleBuilding) {
            notes.push(
                "确保充足蛋白质：豆腐、鸡蛋、瘦肉 (Ensure adequate protein: tofu, eggs, lean meat)".to_owned(),
            );
        }
        notes
    }

    fn motivational_approach(language: Language) -> MotivationalApproach {
        match language {
            Language::Chinese => MotivationalApproach {
                style: "Supportive and encouraging with cultural sensitivity".to_owned(),
                communication: "Patient guidance with English practice opportunities".to_owned(),
                feedback: "Positive reinforcement respecting Chinese communication preferences"
                    .to_owned(),
            },
            Language::English => MotivationalApproach {
                style: "Direct and encouraging".to_owned(),
                communication: "Clear instruction with motivational support".to_owned(),
                feedback: "Regular progress check-ins and goal adjustments".to_owned(),
            },
        }
    }

    fn plan_cultural_notes(profile: &Profile) -> String {
        if profile.language == Language::Chinese {
            "Workout plan respects Chinese cultural norms: quiet exercises for apartment living, \
             gradual progression matching Chinese preference for steady improvement, and \
             integrated English learning opportunities during exercise sessions."
                .to_owned()
        } else {
            "Workout plan adapted to personal preferences with emphasis on sustainable progress \
             and goal achievement."
                .to_owned()
        }
    }

    /// The fixed minimal plan used when synthesis faults.
    fn fallback_plan() -> Plan {
        Plan {
            overview: PlanOverview {
                duration_weeks: 8,
                frequency_per_week: 3,
                session_length: TimeAvailable::ThirtyMin,
                progression: ProgressionStyle::Gradual,
                focus: "general fitness".to_owned(),
            },
            exercises: vec![
                PlannedExercise {
                    name: "Bodyweight Squats".to_owned(),
                    localized_name: Some("深蹲".to_owned()),
                    reps: "3 sets x 12 reps".to_owned(),
                    difficulty: ExperienceLevel::Beginner,
                    muscles: vec!["legs".to_owned(), "glutes".to_owned()],
                    quiet: true,
                    cultural_note: "Apartment-friendly, quiet exercise".to_owned(),
                },
                PlannedExercise {
                    name: "Modified Push-ups".to_owned(),
                    localized_name: Some("改良式俯卧撑".to_owned()),
                    reps: "3 sets x 8 reps".to_owned(),
                    difficulty: ExperienceLevel::Beginner,
                    muscles: vec!["chest".to_owned(), "arms".to_owned()],
                    quiet: true,
                    cultural_note: "Can be done silently".to_owned(),
                },
            ],
            adaptation_notes: vec![
                "Suitable for apartment living".to_owned(),
                "No equipment required".to_owned(),
            ],
            language_practice: None,
            progression_phases: Vec::new(),
            nutrition_notes: vec![
                "Maintain balanced nutrition to support your fitness goals".to_owned()
            ],
            motivational_approach: Self::motivational_approach(Language::English),
            insights: vec![
                "Basic workout plan generated".to_owned(),
                "Suitable for beginners".to_owned(),
                "Culturally adapted".to_owned(),
            ],
            cultural_notes: "Plan designed with cultural sensitivity and space constraints in \
                             mind."
                .to_owned(),
            handoff: "Fallback workout plan ready for immediate use.".to_owned(),
        }
    }
}
