// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for meshwright skills and the surrounding tooling.

use thiserror::Error;

/// A skill argument violated a documented precondition.
///
/// The `Display` text of each variant is what ends up in the envelope
/// `message`, so it names the offending argument and, where there is one,
/// the set of accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillError {
    /// An enumerated string argument did not match any accepted value.
    #[error("Invalid {argument} \"{value}\". Valid options: {valid}")]
    InvalidOption {
        argument: &'static str,
        value: String,
        valid: String,
    },

    /// A numeric argument must be strictly positive.
    #[error("{argument} must be greater than 0")]
    NotPositive { argument: &'static str },

    /// A required selection was empty.
    #[error("No {what} selected for {operation}")]
    EmptySelection {
        what: &'static str,
        operation: &'static str,
    },

    /// A numeric argument fell outside its closed range.
    #[error("{argument} must be between {min} and {max}")]
    OutOfRange {
        argument: &'static str,
        min: &'static str,
        max: &'static str,
    },

    /// An integer argument fell below its lower bound.
    #[error("{argument} must be at least {min}")]
    BelowMinimum { argument: &'static str, min: i64 },

    /// An index argument was negative.
    #[error("{argument} must be 0 or greater")]
    Negative { argument: &'static str },

    /// A derived quantity overflowed to infinity or NaN.
    #[error("{argument} must be a finite number")]
    NotFinite { argument: &'static str },

    /// The raw arguments could not be decoded into the skill's parameters.
    #[error("Invalid arguments for {skill}: {detail}")]
    InvalidArguments { skill: String, detail: String },
}

/// The error type used by the tool registry and the CLI.
///
/// Skill bodies never return this; they report failures through the
/// response envelope instead.
#[derive(Debug, Error)]
pub enum MeshwrightError {
    /// Configuration errors (invalid TOML, unknown keys, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// No skill is registered under the requested name.
    #[error("skill not found: {name}")]
    SkillNotFound { name: String },

    /// JSON encoding or decoding failed outside a skill body.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_names_value_and_choices() {
        let err = SkillError::InvalidOption {
            argument: "primitive type",
            value: "pyramid".into(),
            valid: "cube, sphere".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid primitive type \"pyramid\". Valid options: cube, sphere"
        );
    }

    #[test]
    fn range_messages_keep_literal_bounds() {
        let err = SkillError::OutOfRange {
            argument: "Metallic value",
            min: "0.0",
            max: "1.0",
        };
        assert_eq!(err.to_string(), "Metallic value must be between 0.0 and 1.0");

        let err = SkillError::BelowMinimum {
            argument: "Array count",
            min: 1,
        };
        assert_eq!(err.to_string(), "Array count must be at least 1");
    }

    #[test]
    fn empty_selection_message() {
        let err = SkillError::EmptySelection {
            what: "faces",
            operation: "extrusion",
        };
        assert_eq!(err.to_string(), "No faces selected for extrusion");
    }

    #[test]
    fn not_finite_message() {
        let err = SkillError::NotFinite {
            argument: "Array total length",
        };
        assert_eq!(err.to_string(), "Array total length must be a finite number");
    }

    #[test]
    fn meshwright_error_wraps_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MeshwrightError = json_err.into();
        assert!(err.to_string().starts_with("serialization error:"));

        let err = MeshwrightError::SkillNotFound {
            name: "teleport".into(),
        };
        assert_eq!(err.to_string(), "skill not found: teleport");
    }
}
