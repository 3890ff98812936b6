// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry for agent-facing skill invocation.
//!
//! The [`Tool`] trait is the JSON boundary an agent talks to: a name, a
//! description, a JSON Schema for the arguments, and an async `invoke`. The
//! [`ToolRegistry`] manages lookup by name and generates Anthropic-format
//! tool definitions for the LLM provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use meshwright_core::{MeshwrightError, SkillResponse};
use serde::{Deserialize, Serialize};

/// Output from a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The response envelope encoded as JSON.
    pub content: String,
    /// Whether the envelope status is `error`.
    pub is_error: bool,
}

impl ToolOutput {
    /// Encodes a skill envelope as tool output.
    pub fn from_response<T: Serialize>(
        response: &SkillResponse<T>,
    ) -> Result<Self, MeshwrightError> {
        Ok(Self {
            content: serde_json::to_string(response)?,
            is_error: response.is_error(),
        })
    }

    /// Decodes the envelope back into a JSON value.
    pub fn envelope(&self) -> Result<serde_json::Value, MeshwrightError> {
        Ok(serde_json::from_str(&self.content)?)
    }
}

/// Unified trait for all agent-callable tools.
///
/// The agent loop calls `invoke` with the parsed JSON input from the LLM's
/// `tool_use` content block.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool's unique name (used for lookup and API serialization).
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invokes the tool with the given JSON input and returns the output.
    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, MeshwrightError>;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Removes a tool by name, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Invokes the named tool.
    pub async fn invoke(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<ToolOutput, MeshwrightError> {
        let tool = self.get(name).ok_or_else(|| MeshwrightError::SkillNotFound {
            name: name.to_string(),
        })?;
        tool.invoke(input).await
    }

    /// Returns (name, description) pairs for all registered tools.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Returns Anthropic-format tool definitions for all registered tools.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "What the tool does",
    ///   "input_schema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools.into_iter().map(|t| tool_definition(&**t)).collect()
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Anthropic-format definition for a single tool.
pub fn tool_definition(tool: &dyn Tool) -> serde_json::Value {
    serde_json::json!({
        "name": tool.name(),
        "description": tool.description(),
        "input_schema": tool.parameters_schema(),
    })
}
