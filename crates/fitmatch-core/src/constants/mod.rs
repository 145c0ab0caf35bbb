// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Catalog versions, service identity, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitmatch

//! Application constants organized by domain.

/// Service identity for structured logging
pub mod service {
    /// Service name reported in log output
    pub const SERVICE_NAME: &str = "fitmatch";
}

/// Catalog data versions
///
/// Bumped whenever the built-in catalog data changes, so consumers can tell
/// which data generation a result was computed against.
pub mod catalog_versions {
    /// Version of the built-in trainer catalog data
    pub const TRAINER_CATALOG_VERSION: u32 = 1;
    /// Version of the built-in exercise catalog data
    pub const EXERCISE_CATALOG_VERSION: u32 = 1;
}

/// Environment variable names for runtime overrides
pub mod env_vars {
    /// Override for the intake stage simulated think-delay, in milliseconds
    pub const INTAKE_DELAY_MS: &str = "FITMATCH_INTAKE_DELAY_MS";
    /// Override for the matching stage simulated think-delay, in milliseconds
    pub const MATCHING_DELAY_MS: &str = "FITMATCH_MATCHING_DELAY_MS";
    /// Override for the planning stage simulated think-delay, in milliseconds
    pub const PLANNING_DELAY_MS: &str = "FITMATCH_PLANNING_DELAY_MS";
}
