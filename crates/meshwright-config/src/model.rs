// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level meshwright configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MeshwrightConfig {
    /// Agent identity and logging.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Which skills are exposed.
    #[serde(default)]
    pub skill: SkillConfig,

    /// Envelope output formatting for the CLI.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Agent identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "meshwright".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Skill exposure configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SkillConfig {
    /// Register the modeling skills.
    #[serde(default = "default_true")]
    pub modeling: bool,

    /// Register the shading skills.
    #[serde(default = "default_true")]
    pub shading: bool,

    /// Individual skills to leave out even when their group is enabled.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            modeling: true,
            shading: true,
            disabled: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// CLI output configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print envelopes instead of emitting one JSON object per line.
    #[serde(default)]
    pub pretty: bool,
}
