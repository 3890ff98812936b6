// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modeling and shading skills for driving a 3D content-creation application.
//!
//! Each skill is a plain function from a typed parameter record to a
//! [`meshwright_core::SkillResponse`]. The [`Tool`] trait and
//! [`ToolRegistry`] expose the same skills to an agent over JSON.
//!
//! Modeling skills ([`modeling`]):
//! - `create_primitive`, `extrude_faces`, `subdivide_surface`,
//!   `apply_mirror_modifier`, `create_array_modifier`
//!
//! Shading skills ([`shading`]):
//! - `create_pbr_material`, `apply_material_to_object`,
//!   `create_procedural_texture`

pub mod builtin;
pub mod modeling;
pub mod shading;
pub mod tool;

pub use tool::{Tool, ToolOutput, ToolRegistry};
