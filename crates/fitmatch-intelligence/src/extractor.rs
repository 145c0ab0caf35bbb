// ABOUTME: Free-text profile extraction via a registry of independent signal detectors
// ABOUTME: Pattern-tests raw bilingual input and resolves detector hits into a Profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Profile extraction.
//!
//! The extractor is a registry of independent, side-effect-free signal
//! detectors. Each detector is a single pattern test against the full raw
//! string, covering both supported languages, and maps to one or more
//! profile fields. Detectors can be added, removed, or reordered without
//! changing the meaning of the others; the only ordering dependencies are
//! the insight list (registry order) and the beginner/experienced
//! tie-break (beginner wins).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use fitmatch_core::errors::StageError;
use fitmatch_core::models::{
    BudgetTier, Constraints, CulturalContext, EnglishLevel, EquipmentTag, ExperienceLevel, GoalTag,
    Language, Profile, SpaceConstraint, TimeAvailable,
};

use crate::fallback::or_fallback;

/// Signals the detector registry can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    /// Input contains CJK ideographs
    ChineseText,
    /// User worries about their English
    EnglishAnxiety,
    WeightLoss,
    MuscleBuilding,
    Endurance,
    Beginner,
    Experienced,
    SmallSpace,
    Student,
    NoEquipment,
    BudgetLimited,
    TimeLimited,
}

// Detector patterns, compiled once. Stored as Option so a pattern that fails
// to compile degrades to a detector that never fires instead of a panic.
static CHINESE_TEXT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}]").ok());

static ENGLISH_ANXIETY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)英语不好|english.*not.*good|english.*poor|don't speak english well").ok()
});

static WEIGHT_LOSS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)减肥|减重|瘦身|weight.*loss|lose.*weight|slim down").ok());

static MUSCLE_BUILDING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)增肌|健身|muscle|build|strength|强壮|力量").ok());

static ENDURANCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)跑步|有氧|cardio|endurance|stamina|running").ok());

static BEGINNER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)初学者|新手|beginner|never|first time|不会|不懂").ok());

static EXPERIENCED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)经验|experienced|familiar|已经|regularly|for years").ok());

static SMALL_SPACE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)公寓|apartment|small.*space|limited.*space").ok());

static STUDENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)学生|student|university|college|school").ok());

static NO_EQUIPMENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)没有器械|no equipment|no gym|home.*only").ok());

static BUDGET_LIMITED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)便宜|cheap|budget|limited.*money|can't afford").ok());

static TIME_LIMITED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)忙|busy|limited.*time|短时间|quick|没时间").ok());

/// One registry entry: a signal, its pattern, and the fixed diagnostic
/// sentence appended to `insights` when it fires.
struct DetectorRule {
    signal: Signal,
    pattern: &'static LazyLock<Option<Regex>>,
    insight: Option<&'static str>,
}

impl DetectorRule {
    fn fires(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }
}

/// Registry order is insight-priority order; detectors without an insight
/// sentence sort after those with one.
static DETECTOR_RULES: &[DetectorRule] = &[
    DetectorRule {
        signal: Signal::ChineseText,
        pattern: &CHINESE_TEXT,
        insight: Some("User prefers Chinese communication with potential English learning interest"),
    },
    DetectorRule {
        signal: Signal::SmallSpace,
        pattern: &SMALL_SPACE,
        insight: Some("Limited space requires apartment-friendly, quiet exercise routines"),
    },
    DetectorRule {
        signal: Signal::Student,
        pattern: &STUDENT,
        insight: Some("Budget-conscious student seeking affordable fitness solutions"),
    },
    DetectorRule {
        signal: Signal::EnglishAnxiety,
        pattern: &ENGLISH_ANXIETY,
        insight: Some("English language practice could be valuable secondary benefit"),
    },
    DetectorRule {
        signal: Signal::TimeLimited,
        pattern: &TIME_LIMITED,
        insight: Some("Time-efficient workouts needed for busy schedule"),
    },
    DetectorRule {
        signal: Signal::NoEquipment,
        pattern: &NO_EQUIPMENT,
        insight: Some("Bodyweight exercises essential - no equipment available"),
    },
    DetectorRule {
        signal: Signal::WeightLoss,
        pattern: &WEIGHT_LOSS,
        insight: None,
    },
    DetectorRule {
        signal: Signal::MuscleBuilding,
        pattern: &MUSCLE_BUILDING,
        insight: None,
    },
    DetectorRule {
        signal: Signal::Endurance,
        pattern: &ENDURANCE,
        insight: None,
    },
    DetectorRule {
        signal: Signal::Beginner,
        pattern: &BEGINNER,
        insight: None,
    },
    DetectorRule {
        signal: Signal::Experienced,
        pattern: &EXPERIENCED,
        insight: None,
    },
    DetectorRule {
        signal: Signal::BudgetLimited,
        pattern: &BUDGET_LIMITED,
        insight: None,
    },
];

/// Fallback insight sentences used verbatim when no detector fires
const GENERIC_INSIGHTS: [&str; 3] = [
    "User seeking personalized fitness guidance",
    "Flexible approach needed based on stated preferences",
    "Good candidate for structured fitness program",
];

/// Converts raw free text into a structured [`Profile`].
///
/// Never fails outward: on any internal error the documented default
/// profile (English, intermediate level, general fitness, moderate budget,
/// normal home) is returned so downstream stages always have a profile to
/// work with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileExtractor;

impl ProfileExtractor {
    /// Create an extractor backed by the built-in detector registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract a profile from raw text. Infallible by contract.
    #[must_use]
    pub fn extract(&self, text: &str) -> Profile {
        or_fallback(Self::try_extract(text), Self::default_profile)
    }

    /// The documented default profile, identical to what extraction of an
    /// input with no detectable signal produces.
    #[must_use]
    pub fn default_profile() -> Profile {
        Self::resolve(&[])
    }

    fn try_extract(text: &str) -> Result<Profile, StageError> {
        if DETECTOR_RULES
            .iter()
            .all(|rule| rule.pattern.as_ref().is_none())
        {
            return Err(StageError::Extraction {
                reason: "signal detector registry unavailable",
            });
        }

        let fired: Vec<Signal> = DETECTOR_RULES
            .iter()
            .filter(|rule| rule.fires(text))
            .map(|rule| rule.signal)
            .collect();
        debug!(detectors_fired = fired.len(), "signal detection complete");

        Ok(Self::resolve(&fired))
    }

    /// Resolve a set of fired signals into a complete profile.
    fn resolve(fired: &[Signal]) -> Profile {
        let hit = |signal: Signal| fired.contains(&signal);

        let language = if hit(Signal::ChineseText) {
            Language::Chinese
        } else {
            Language::English
        };

        let english_level = if hit(Signal::EnglishAnxiety) {
            EnglishLevel::Beginner
        } else if language == Language::Chinese {
            EnglishLevel::Intermediate
        } else {
            EnglishLevel::Advanced
        };

        let cultural_context = match language {
            Language::Chinese => CulturalContext::ChineseMainland,
            Language::English => CulturalContext::Other,
        };

        let mut goals = Vec::new();
        if hit(Signal::WeightLoss) {
            goals.push(GoalTag::WeightLoss);
        }
        if hit(Signal::MuscleBuilding) {
            goals.push(GoalTag::MuscleBuilding);
        }
        if hit(Signal::Endurance) {
            goals.push(GoalTag::Endurance);
        }
        if goals.is_empty() {
            goals.push(GoalTag::GeneralFitness);
        }

        // Beginner wins when both level detectors fire
        let experience_level = if hit(Signal::Beginner) {
            ExperienceLevel::Beginner
        } else if hit(Signal::Experienced) {
            ExperienceLevel::Advanced
        } else {
            ExperienceLevel::Intermediate
        };

        let mut equipment = BTreeSet::new();
        equipment.insert(if hit(Signal::NoEquipment) {
            EquipmentTag::None
        } else {
            EquipmentTag::Basic
        });

        let constraints = Constraints {
            equipment,
            space: if hit(Signal::SmallSpace) {
                SpaceConstraint::SmallApartment
            } else {
                SpaceConstraint::NormalHome
            },
            time_available: if hit(Signal::TimeLimited) {
                TimeAvailable::ThirtyMin
            } else {
                TimeAvailable::FortyFiveMin
            },
            budget: if hit(Signal::Student) || hit(Signal::BudgetLimited) {
                BudgetTier::Low
            } else {
                BudgetTier::Moderate
            },
        };

        let insights = Self::collect_insights(fired);
        let cultural_notes = Self::cultural_notes(language);
        let handoff = Self::handoff(language, &goals, fired);

        Profile {
            language,
            english_level,
            cultural_context,
            goals,
            experience_level,
            constraints,
            language_learning_interest: language == Language::Chinese,
            insights,
            cultural_notes,
            handoff,
        }
    }

    /// One fixed sentence per firing detector, in registry order. The
    /// language-anxiety insight only applies alongside the Chinese-text
    /// signal; anxiety about English in an English-language profile carries
    /// no extra information.
    fn collect_insights(fired: &[Signal]) -> Vec<String> {
        let insights: Vec<String> = DETECTOR_RULES
            .iter()
            .filter(|rule| fired.contains(&rule.signal))
            .filter(|rule| {
                rule.signal != Signal::EnglishAnxiety || fired.contains(&Signal::ChineseText)
            })
            .filter_map(|rule| rule.insight.map(str::to_owned))
            .collect();

        if insights.is_empty() {
            GENERIC_INSIGHTS.iter().map(|s| (*s).to_owned()).collect()
        } else {
            insights
        }
    }

    fn cultural_notes(language: Language) -> String {
        match language {
            Language::Chinese => "Requires cultural sensitivity for Chinese social norms, \
                apartment living constraints, and potential language learning opportunities."
                .to_owned(),
            Language::English => "Standard Western fitness approach with personalized \
                modifications based on stated preferences."
                .to_owned(),
        }
    }

    fn handoff(language: Language, goals: &[GoalTag], fired: &[Signal]) -> String {
        let goal_list = goals
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" and ");
        let audience = if fired.contains(&Signal::Student) {
            "student"
        } else {
            "individual"
        };
        let communication = if fired.contains(&Signal::EnglishAnxiety) {
            "English learning interest"
        } else {
            "flexible communication"
        };
        let space = if fired.contains(&Signal::SmallSpace) {
            "space constraints"
        } else {
            "flexible space"
        };
        format!(
            "Profile ready for matching: {language}-speaking {audience} seeking {goal_list} \
             support with {communication} and {space}."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_detector_patterns_compile() {
        for rule in DETECTOR_RULES {
            assert!(rule.pattern.as_ref().is_some(), "{:?}", rule.signal);
        }
    }

    #[test]
    fn default_profile_matches_no_signal_resolution() {
        let profile = ProfileExtractor::default_profile();
        assert_eq!(profile, ProfileExtractor::new().extract("..."));
    }
}
