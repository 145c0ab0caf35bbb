// ABOUTME: Built-in trainer roster data for the trainer catalog
// ABOUTME: Five curated trainers plus the fixed safe-default fallback entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

use crate::models::{
    CulturalExperience, PricingTier, Specialty, Trainer, TrainerCulturalProfile, TrainerPricing,
    TrainerRatings,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The fixed safe-default trainer used by the matching fallback.
///
/// Independent of whatever catalog was injected for the request, so the
/// fallback recommendation is stable even against an empty or broken
/// catalog.
#[must_use]
pub fn safe_default_trainer() -> Trainer {
    sarah_johnson()
}

/// The built-in roster, in ranking tie-break order.
pub(super) fn builtin_trainers() -> Vec<Trainer> {
    vec![
        sarah_johnson(),
        michael_chen(),
        emma_rodriguez(),
        david_kim(),
        lisa_zhang(),
    ]
}

fn sarah_johnson() -> Trainer {
    Trainer {
        id: "trainer_001".to_owned(),
        name: "Sarah Johnson".to_owned(),
        location: "California, USA".to_owned(),
        languages: strings(&["English", "Basic Mandarin"]),
        certifications: strings(&["NASM-CPT", "Nutrition Specialist"]),
        specialties: vec![
            Specialty::WeightLoss,
            Specialty::HomeFitness,
            Specialty::BeginnerFriendly,
            Specialty::ApartmentWorkouts,
        ],
        client_demographics: strings(&["international_students", "beginners", "chinese_speakers"]),
        experience_years: 3,
        ratings: TrainerRatings {
            overall: 4.9,
            patience: 5.0,
            cultural_sensitivity: 4.8,
            english_teaching: 4.7,
            communication: 4.9,
        },
        cultural: TrainerCulturalProfile {
            chinese_experience: CulturalExperience::Extensive,
            language_learning_support: true,
            cultural_adaptations: strings(&[
                "understands chinese apartment constraints",
                "familiar with chinese social norms",
            ]),
            motivational_style: "supportive_encouraging".to_owned(),
        },
        pricing: TrainerPricing {
            tier: PricingTier::Moderate,
            student_discount: true,
            trial_session: true,
        },
    }
}

fn michael_chen() -> Trainer {
    Trainer {
        id: "trainer_002".to_owned(),
        name: "Michael Chen".to_owned(),
        location: "New York, USA".to_owned(),
        languages: strings(&["English", "Fluent Mandarin", "Cantonese"]),
        certifications: strings(&["ACSM-CPT", "Strength & Conditioning"]),
        specialties: vec![
            Specialty::MuscleBuilding,
            Specialty::StrengthTraining,
            Specialty::IntermediateAdvanced,
            Specialty::FormCorrection,
        ],
        client_demographics: strings(&[
            "chinese_professionals",
            "intermediate_trainees",
            "busy_professionals",
        ]),
        experience_years: 5,
        ratings: TrainerRatings {
            overall: 4.7,
            patience: 4.5,
            cultural_sensitivity: 5.0,
            english_teaching: 4.9,
            communication: 4.8,
        },
        cultural: TrainerCulturalProfile {
            chinese_experience: CulturalExperience::NativeBicultural,
            language_learning_support: true,
            cultural_adaptations: strings(&[
                "bilingual communication",
                "understands chinese work culture",
            ]),
            motivational_style: "structured_disciplined".to_owned(),
        },
        pricing: TrainerPricing {
            tier: PricingTier::Premium,
            student_discount: false,
            trial_session: true,
        },
    }
}

fn emma_rodriguez() -> Trainer {
    Trainer {
        id: "trainer_003".to_owned(),
        name: "Emma Rodriguez".to_owned(),
        location: "Texas, USA".to_owned(),
        languages: strings(&["English", "Spanish", "Learning Mandarin"]),
        certifications: strings(&["ACE-CPT", "Group Fitness"]),
        specialties: vec![
            Specialty::GeneralFitness,
            Specialty::Endurance,
            Specialty::BeginnerFriendly,
            Specialty::MotivationCoaching,
        ],
        client_demographics: strings(&["college_students", "beginners", "budget_conscious"]),
        experience_years: 2,
        ratings: TrainerRatings {
            overall: 4.6,
            patience: 5.0,
            cultural_sensitivity: 4.3,
            english_teaching: 4.2,
            communication: 4.7,
        },
        cultural: TrainerCulturalProfile {
            chinese_experience: CulturalExperience::Limited,
            language_learning_support: true,
            cultural_adaptations: strings(&[
                "patient with language barriers",
                "enthusiastic about cultural exchange",
            ]),
            motivational_style: "energetic_positive".to_owned(),
        },
        pricing: TrainerPricing {
            tier: PricingTier::BudgetFriendly,
            student_discount: true,
            trial_session: true,
        },
    }
}

fn david_kim() -> Trainer {
    Trainer {
        id: "trainer_004".to_owned(),
        name: "David Kim".to_owned(),
        location: "Washington, USA".to_owned(),
        languages: strings(&["English", "Korean", "Basic Mandarin"]),
        certifications: strings(&["NASM-CPT", "Corrective Exercise"]),
        specialties: vec![
            Specialty::HomeFitness,
            Specialty::MinimalEquipment,
            Specialty::EfficientWorkouts,
            Specialty::BusySchedules,
        ],
        client_demographics: strings(&[
            "working_professionals",
            "apartment_dwellers",
            "time_constrained",
        ]),
        experience_years: 4,
        ratings: TrainerRatings {
            overall: 4.8,
            patience: 4.6,
            cultural_sensitivity: 4.5,
            english_teaching: 4.0,
            communication: 4.7,
        },
        cultural: TrainerCulturalProfile {
            chinese_experience: CulturalExperience::Moderate,
            language_learning_support: false,
            cultural_adaptations: strings(&[
                "understands asian work culture",
                "efficient communication style",
            ]),
            motivational_style: "practical_results_focused".to_owned(),
        },
        pricing: TrainerPricing {
            tier: PricingTier::Moderate,
            student_discount: false,
            trial_session: true,
        },
    }
}

fn lisa_zhang() -> Trainer {
    Trainer {
        id: "trainer_005".to_owned(),
        name: "Lisa Zhang".to_owned(),
        location: "California, USA".to_owned(),
        languages: strings(&["English", "Mandarin", "Shanghai Dialect"]),
        certifications: strings(&["ACSM-CPT", "Registered Dietitian"]),
        specialties: vec![
            Specialty::WeightLoss,
            Specialty::Nutrition,
            Specialty::LifestyleCoaching,
            Specialty::CulturalBridge,
        ],
        client_demographics: strings(&[
            "chinese_immigrants",
            "cultural_transition",
            "holistic_health",
        ]),
        experience_years: 3,
        ratings: TrainerRatings {
            overall: 4.9,
            patience: 5.0,
            cultural_sensitivity: 5.0,
            english_teaching: 4.8,
            communication: 5.0,
        },
        cultural: TrainerCulturalProfile {
            chinese_experience: CulturalExperience::NativeBicultural,
            language_learning_support: true,
            cultural_adaptations: strings(&[
                "perfect cultural bridge",
                "understands immigration challenges",
            ]),
            motivational_style: "empathetic_holistic".to_owned(),
        },
        pricing: TrainerPricing {
            tier: PricingTier::Premium,
            student_discount: true,
            trial_session: true,
        },
    }
}
