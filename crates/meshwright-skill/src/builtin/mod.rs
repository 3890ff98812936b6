// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in skill tools.
//!
//! Every skill in [`crate::modeling`] and [`crate::shading`] is exposed to
//! agents through a [`SkillTool`], which decodes the JSON arguments into the
//! skill's parameter record and encodes the resulting envelope. Arguments
//! that fail to decode still produce an error envelope rather than a Rust
//! error.

pub mod modeling;
pub mod shading;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use meshwright_core::{MeshwrightError, SkillError, SkillResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::tool::{Tool, ToolOutput};
use crate::ToolRegistry;

/// Adapts a typed skill function to the [`Tool`] interface.
pub struct SkillTool<P, T> {
    name: &'static str,
    description: &'static str,
    schema: fn() -> serde_json::Value,
    run: fn(P) -> SkillResponse<T>,
}

impl<P, T> SkillTool<P, T> {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        schema: fn() -> serde_json::Value,
        run: fn(P) -> SkillResponse<T>,
    ) -> Self {
        Self {
            name,
            description,
            schema,
            run,
        }
    }

    fn respond(&self, input: serde_json::Value) -> SkillResponse<T>
    where
        P: DeserializeOwned,
    {
        let start = Instant::now();
        match serde_json::from_value::<P>(input) {
            Ok(params) => (self.run)(params),
            Err(e) => {
                let error = SkillError::InvalidArguments {
                    skill: self.name.to_string(),
                    detail: e.to_string(),
                };
                warn!(skill = self.name, error = %error, "skill arguments did not decode");
                SkillResponse::failure(&error, start.elapsed().as_secs_f64())
            }
        }
    }
}

#[async_trait]
impl<P, T> Tool for SkillTool<P, T>
where
    P: DeserializeOwned + Send + 'static,
    T: Serialize + Send + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn parameters_schema(&self) -> serde_json::Value {
        (self.schema)()
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, MeshwrightError> {
        let response = self.respond(input);
        ToolOutput::from_response(&response)
    }
}

/// Registers the five modeling skills.
pub fn register_modeling(registry: &mut ToolRegistry) {
    registry.register(Arc::new(modeling::create_primitive_tool()));
    registry.register(Arc::new(modeling::extrude_faces_tool()));
    registry.register(Arc::new(modeling::subdivide_surface_tool()));
    registry.register(Arc::new(modeling::apply_mirror_modifier_tool()));
    registry.register(Arc::new(modeling::create_array_modifier_tool()));
}

/// Registers the three shading skills.
pub fn register_shading(registry: &mut ToolRegistry) {
    registry.register(Arc::new(shading::create_pbr_material_tool()));
    registry.register(Arc::new(shading::apply_material_to_object_tool()));
    registry.register(Arc::new(shading::create_procedural_texture_tool()));
}

/// Registers every built-in skill.
pub fn register_builtins(registry: &mut ToolRegistry) {
    register_modeling(registry);
    register_shading(registry);
}
