// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for meshwright.
//!
//! Holds the response envelope shared by every skill, the error taxonomy,
//! and the closed enumerations and value types that skill parameters are
//! parsed into.

pub mod envelope;
pub mod error;
pub mod types;

pub use envelope::{run_skill, SkillOutcome, SkillResponse, Status};
pub use error::{MeshwrightError, SkillError};
pub use types::{
    parse_choice, Axis, ColorStop, MaterialClass, PerformanceImpact, PrimitiveType, Rgb,
    SurfaceFinish, TextureType, Vec3,
};
