// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./meshwright.toml` > `~/.config/meshwright/meshwright.toml` >
//! `/etc/meshwright/meshwright.toml`, with `MESHWRIGHT_*` environment
//! variables overriding all files.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MeshwrightConfig;

/// Name of the config file looked up in every location.
pub const CONFIG_FILE_NAME: &str = "meshwright.toml";

/// System-wide config location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/meshwright/meshwright.toml";

/// The per-user config path, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("meshwright").join(CONFIG_FILE_NAME))
}

/// Config files consulted by [`load_config`], lowest precedence first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    paths.extend(user_config_path());
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Build the layered Figment without extracting it.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/meshwright/meshwright.toml`
/// 3. the user config file
/// 4. `./meshwright.toml`
/// 5. `MESHWRIGHT_*` environment variables
pub fn build_figment() -> Figment {
    let figment = config_paths()
        .into_iter()
        .fold(defaults(), |figment, path| figment.merge(Toml::file(path)));
    figment.merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<MeshwrightConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<MeshwrightConfig, figment::Error> {
    defaults().merge(Toml::string(toml_content)).extract()
}

/// Load configuration from one explicit file, still honouring env overrides.
pub fn load_config_from_path(path: &Path) -> Result<MeshwrightConfig, figment::Error> {
    defaults()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

fn defaults() -> Figment {
    Figment::new().merge(Serialized::defaults(MeshwrightConfig::default()))
}

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` instead of `Env::split("_")` because key names contain
/// underscores: `MESHWRIGHT_AGENT_LOG_LEVEL` must become `agent.log_level`,
/// not `agent.log.level`. Keys reach the closure in their original case.
pub fn env_provider() -> Env {
    Env::prefixed("MESHWRIGHT_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("agent_", "agent.", 1)
            .replacen("skill_", "skill.", 1)
            .replacen("output_", "output.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, MeshwrightConfig::default());
    }

    #[test]
    fn local_file_has_highest_file_precedence() {
        let paths = config_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from(SYSTEM_CONFIG_PATH)));
        assert_eq!(paths.last(), Some(&PathBuf::from(CONFIG_FILE_NAME)));
    }
}
