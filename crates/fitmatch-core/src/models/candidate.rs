// ABOUTME: Scored match candidate types produced by the matching stage
// ABOUTME: Defines ScoreBreakdown, CulturalFit, ScoredCandidate, and MatchOutcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use std::fmt;

use serde::{Deserialize, Serialize};

use super::trainer::Trainer;

/// Named contribution of each scoring criterion to a candidate's total.
///
/// The total score is the clamped sum of these fields; each is capped at its
/// declared maximum, so the sum (and therefore the total) stays within
/// 0–100. Keeping the decomposition on the candidate makes every score
/// auditable after the fact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Goal alignment contribution (0 or the full 25)
    pub goal_alignment: u8,
    /// Experience match contribution (partial 10 or full 20)
    pub experience_match: u8,
    /// Cultural compatibility contribution (max 20)
    pub cultural: u8,
    /// Language compatibility contribution (max 15)
    pub language: u8,
    /// Space and equipment constraint contribution (max 10)
    pub constraint_fit: u8,
    /// Budget compatibility contribution (max 10)
    pub budget_fit: u8,
}

impl ScoreBreakdown {
    /// Sum of all contributions, saturating
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.goal_alignment
            .saturating_add(self.experience_match)
            .saturating_add(self.cultural)
            .saturating_add(self.language)
            .saturating_add(self.constraint_fit)
            .saturating_add(self.budget_fit)
    }
}

/// Ordinal-to-label mapping for a candidate's cultural fit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CulturalFit {
    /// Native or bicultural understanding
    Excellent,
    /// Extensive experience with the user's context
    VeryGood,
    /// Moderate experience, or no special context required
    Good,
    /// Limited experience with the user's context
    Fair,
}

impl fmt::Display for CulturalFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => f.write_str("Excellent"),
            Self::VeryGood => f.write_str("Very Good"),
            Self::Good => f.write_str("Good"),
            Self::Fair => f.write_str("Fair"),
        }
    }
}

/// One trainer with its compatibility score for a specific profile.
///
/// Ephemeral: produced per request and replaced wholesale on retry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCandidate {
    /// The catalog trainer this score refers to
    pub trainer: Trainer,
    /// Total compatibility score, 0–100
    pub score: u8,
    /// Ordered reason phrases; single generic phrase when nothing specific applies
    pub reasons: Vec<String>,
    /// Cultural-fit label derived from the trainer's experience ordinal
    pub cultural_fit: CulturalFit,
    /// Per-criterion decomposition of `score`
    pub breakdown: ScoreBreakdown,
}

/// Ranked result of the matching stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchOutcome {
    /// All candidates, highest score first, catalog order on ties
    pub candidates: Vec<ScoredCandidate>,
    /// Multi-sentence narrative about the top-ranked candidate
    pub reasoning: String,
    /// Human-readable findings about the match run
    pub insights: Vec<String>,
    /// Cultural summary for the top candidate
    pub cultural_notes: String,
    /// One-sentence summary handed to the planning stage
    pub handoff: String,
}

impl MatchOutcome {
    /// Top-ranked candidate, if any
    #[must_use]
    pub fn top(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }

    /// Runner-up candidates shown as alternatives (at most two)
    #[must_use]
    pub fn alternatives(&self) -> &[ScoredCandidate] {
        let end = self.candidates.len().min(3);
        self.candidates.get(1..end).unwrap_or_default()
    }
}
