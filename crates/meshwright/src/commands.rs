// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `list`, `schema`, `invoke` and `config` subcommands.
//!
//! Each command renders to a `String` so the caller decides where it goes;
//! envelopes are the only thing written to stdout.

use meshwright_config::MeshwrightConfig;
use meshwright_core::MeshwrightError;
use meshwright_skill::tool::tool_definition;
use meshwright_skill::ToolRegistry;
use serde_json::Value;

/// One line per registered skill: name, padding, description.
pub fn render_list(registry: &ToolRegistry) -> String {
    let entries = registry.list();
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(name, description)| format!("{name:<width$}  {description}\n"))
        .collect()
}

/// Tool definitions for all skills, or for the single named one.
pub fn render_schema(
    registry: &ToolRegistry,
    name: Option<&str>,
    pretty: bool,
) -> Result<String, MeshwrightError> {
    let value = match name {
        Some(name) => {
            let tool = registry
                .get(name)
                .ok_or_else(|| MeshwrightError::SkillNotFound {
                    name: name.to_string(),
                })?;
            tool_definition(&*tool)
        }
        None => Value::Array(registry.tool_definitions()),
    };
    to_json(&value, pretty)
}

/// Result of running one skill from the command line.
#[derive(Debug)]
pub struct Invocation {
    /// The envelope, formatted for output.
    pub rendered: String,
    /// Whether the envelope status is `error`.
    pub is_error: bool,
}

/// Invokes `name` with `args` (a JSON object; `{}` when absent).
pub async fn invoke(
    registry: &ToolRegistry,
    name: &str,
    args: Option<&str>,
    pretty: bool,
) -> Result<Invocation, MeshwrightError> {
    let input: Value = match args {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)?,
        _ => Value::Object(Default::default()),
    };
    let output = registry.invoke(name, input).await?;
    Ok(Invocation {
        rendered: to_json(&output.envelope()?, pretty)?,
        is_error: output.is_error,
    })
}

/// The effective configuration as TOML.
pub fn render_config(config: &MeshwrightConfig) -> Result<String, MeshwrightError> {
    toml::to_string_pretty(config).map_err(|e| MeshwrightError::Config(e.to_string()))
}

fn to_json(value: &Value, pretty: bool) -> Result<String, MeshwrightError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
