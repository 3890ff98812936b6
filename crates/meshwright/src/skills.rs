// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the tool registry the CLI works against.

use meshwright_config::model::SkillConfig;
use meshwright_skill::{builtin, ToolRegistry};
use tracing::{info, warn};

/// Registers the skill groups enabled in `config`, minus the ones it disables.
pub fn build_registry(config: &SkillConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    if config.modeling {
        builtin::register_modeling(&mut registry);
    } else {
        info!("modeling skills disabled by configuration");
    }
    if config.shading {
        builtin::register_shading(&mut registry);
    } else {
        info!("shading skills disabled by configuration");
    }

    for name in &config.disabled {
        if registry.unregister(name).is_none() {
            warn!(skill = %name, "skill.disabled names a skill that is not registered");
        }
    }

    info!("tool registry initialized with {} skills", registry.len());
    registry
}
