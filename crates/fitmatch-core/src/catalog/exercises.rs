// ABOUTME: Built-in exercise library data for the exercise catalog
// ABOUTME: Ten curated home exercises plus the fixed English-to-Chinese name table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use crate::models::{EquipmentTag, ExperienceLevel, GoalTag};

use super::ExerciseEntry;

/// Fixed English-to-Chinese exercise name table.
///
/// Entries absent from the table keep their English name.
#[must_use]
pub fn localized_exercise_name(name: &str) -> Option<&'static str> {
    match name {
        "Bodyweight Squats" => Some("深蹲"),
        "Modified Push-ups" => Some("改良式俯卧撑"),
        "Plank Hold" => Some("平板支撑"),
        "Lunges" => Some("弓步蹲"),
        "Mountain Climbers" => Some("登山式"),
        "Wall Sit" => Some("靠墙静蹲"),
        "Resistance Band Rows" => Some("弹力带划船"),
        "Yoga Flow Sequence" => Some("瑜伽流动序列"),
        "Dumbbell Curls" => Some("哑铃弯举"),
        "Glute Bridges" => Some("臀桥"),
        _ => None,
    }
}

fn entry(
    name: &str,
    goals: &[GoalTag],
    equipment: EquipmentTag,
    apartment_friendly: bool,
    reps: &str,
    difficulty: ExperienceLevel,
    muscles: &[&str],
    quiet: bool,
) -> ExerciseEntry {
    ExerciseEntry {
        name: name.to_owned(),
        goals: goals.to_vec(),
        equipment,
        apartment_friendly,
        reps: reps.to_owned(),
        difficulty,
        muscles: muscles.iter().map(|m| (*m).to_owned()).collect(),
        quiet,
    }
}

/// The built-in exercise library, in selection order.
pub(super) fn builtin_exercises() -> Vec<ExerciseEntry> {
    vec![
        entry(
            "Bodyweight Squats",
            &[GoalTag::WeightLoss, GoalTag::GeneralFitness, GoalTag::Strength],
            EquipmentTag::None,
            true,
            "3 sets x 12-15 reps",
            ExperienceLevel::Beginner,
            &["legs", "glutes"],
            true,
        ),
        entry(
            "Modified Push-ups",
            &[GoalTag::MuscleBuilding, GoalTag::Strength, GoalTag::GeneralFitness],
            EquipmentTag::None,
            true,
            "3 sets x 8-12 reps",
            ExperienceLevel::Beginner,
            &["chest", "arms"],
            true,
        ),
        entry(
            "Plank Hold",
            &[GoalTag::GeneralFitness, GoalTag::Strength],
            EquipmentTag::None,
            true,
            "3 sets x 30-60 seconds",
            ExperienceLevel::Beginner,
            &["core"],
            true,
        ),
        entry(
            "Lunges",
            &[GoalTag::WeightLoss, GoalTag::Strength, GoalTag::GeneralFitness],
            EquipmentTag::None,
            true,
            "3 sets x 10 each leg",
            ExperienceLevel::Intermediate,
            &["legs", "glutes"],
            true,
        ),
        // Can be noisy; not apartment friendly
        entry(
            "Mountain Climbers",
            &[GoalTag::WeightLoss, GoalTag::Endurance, GoalTag::GeneralFitness],
            EquipmentTag::None,
            false,
            "3 sets x 20 reps",
            ExperienceLevel::Intermediate,
            &["cardio", "core"],
            false,
        ),
        entry(
            "Wall Sit",
            &[GoalTag::Strength, GoalTag::Endurance],
            EquipmentTag::None,
            true,
            "3 sets x 30-45 seconds",
            ExperienceLevel::Beginner,
            &["legs"],
            true,
        ),
        entry(
            "Resistance Band Rows",
            &[GoalTag::MuscleBuilding, GoalTag::Strength],
            EquipmentTag::Basic,
            true,
            "3 sets x 12-15 reps",
            ExperienceLevel::Intermediate,
            &["back", "arms"],
            true,
        ),
        entry(
            "Yoga Flow Sequence",
            &[GoalTag::GeneralFitness, GoalTag::Flexibility],
            EquipmentTag::None,
            true,
            "15-20 minutes",
            ExperienceLevel::Beginner,
            &["full_body"],
            true,
        ),
        entry(
            "Dumbbell Curls",
            &[GoalTag::MuscleBuilding, GoalTag::Strength],
            EquipmentTag::Basic,
            true,
            "3 sets x 10-12 reps",
            ExperienceLevel::Intermediate,
            &["arms"],
            true,
        ),
        entry(
            "Glute Bridges",
            &[GoalTag::Strength, GoalTag::GeneralFitness],
            EquipmentTag::None,
            true,
            "3 sets x 15 reps",
            ExperienceLevel::Beginner,
            &["glutes", "core"],
            true,
        ),
    ]
}
