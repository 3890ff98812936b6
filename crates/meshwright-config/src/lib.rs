// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for meshwright.
//!
//! TOML files in the usual XDG locations are merged with `MESHWRIGHT_*`
//! environment overrides via Figment, rejected on unknown keys, and then
//! checked semantically. Failures come back as miette diagnostics with typo
//! suggestions.
//!
//! ```no_run
//! use meshwright_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("log level: {}", config.agent.log_level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::MeshwrightConfig;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<MeshwrightConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load configuration from one explicit file and validate it.
///
/// Unlike the standard locations, an explicit file must exist.
pub fn load_and_validate_path(path: &Path) -> Result<MeshwrightConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::NotFound {
            path: path.display().to_string(),
        }]);
    }
    finish(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<MeshwrightConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

fn finish(
    loaded: Result<MeshwrightConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<MeshwrightConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Read every config file that exists, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_paths()
        .iter()
        .filter_map(|path| read_source(path))
        .collect()
}

fn read_source(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    // Figment records relative files as absolute paths under the cwd.
    let name = if path.is_absolute() {
        path.display().to_string()
    } else {
        std::env::current_dir()
            .map(|d| d.join(path).display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    };
    Some((name, content))
}
