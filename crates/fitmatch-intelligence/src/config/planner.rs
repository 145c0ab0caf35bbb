// ABOUTME: Plan synthesizer configuration for selection limits and duration tables
// ABOUTME: Holds exercise count bounds and the week/frequency lookup values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use serde::{Deserialize, Serialize};

/// Plan synthesizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Catalog entries taken per profile goal before filtering
    pub per_goal_take: usize,
    /// Floor on the selected exercise count; backfill guarantees it while
    /// the catalog has eligible entries left
    pub min_exercises: usize,
    /// Ceiling on the selected exercise count; truncation guarantees it
    pub max_exercises: usize,
    /// Program length for beginners, in weeks
    pub beginner_weeks: u8,
    /// Program length when weight loss is among the goals
    pub weight_loss_weeks: u8,
    /// Program length when muscle building is among the goals
    pub muscle_building_weeks: u8,
    /// Program length when no duration rule matches
    pub default_weeks: u8,
    /// Weekly sessions for beginners
    pub beginner_frequency: u8,
    /// Weekly sessions otherwise
    pub default_frequency: u8,
    /// Weeks spent in the opening form-building phase
    pub form_phase_weeks: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            per_goal_take: 3,
            min_exercises: 6,
            max_exercises: 8,
            beginner_weeks: 8,
            weight_loss_weeks: 12,
            muscle_building_weeks: 16,
            default_weeks: 10,
            beginner_frequency: 3,
            default_frequency: 4,
            form_phase_weeks: 2,
        }
    }
}
