// SPDX-FileCopyrightText: 2026 Meshwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The response envelope every skill returns.
//!
//! A skill body is written as a plain `Result<T, SkillError>` computation
//! and handed to [`run_skill`], which times it and folds the result into a
//! [`SkillResponse`]. Callers therefore always get an envelope back; a
//! validation failure is visible only through [`Status::Error`].

use std::time::Instant;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::error::SkillError;

/// Outcome category of a skill call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Warning,
}

/// A per-skill result record that can describe itself in one line.
pub trait SkillOutcome: Serialize {
    /// Human-readable message placed in the envelope on success.
    fn summary(&self) -> String;
}

/// Standard `{status, message, data, execution_time}` envelope.
///
/// `data` is `None` exactly when `status` is [`Status::Error`] and is then
/// serialized as an empty JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct SkillResponse<T> {
    pub status: Status,
    pub message: String,
    #[serde(serialize_with = "serialize_data")]
    pub data: Option<T>,
    /// Wall-clock seconds spent inside the skill.
    pub execution_time: f64,
}

impl<T> SkillResponse<T> {
    pub fn success(message: impl Into<String>, data: T, execution_time: f64) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
            execution_time,
        }
    }

    pub fn failure(error: &SkillError, execution_time: f64) -> Self {
        Self {
            status: Status::Error,
            message: error.to_string(),
            data: None,
            execution_time,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }
}

impl<T: Serialize> SkillResponse<T> {
    /// Converts the envelope into a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn serialize_data<T, S>(data: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match data {
        Some(data) => data.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Runs a skill body, timing it and wrapping its result in an envelope.
pub fn run_skill<T, F>(skill: &'static str, body: F) -> SkillResponse<T>
where
    T: SkillOutcome,
    F: FnOnce() -> Result<T, SkillError>,
{
    let start = Instant::now();
    match body() {
        Ok(data) => {
            let message = data.summary();
            let execution_time = start.elapsed().as_secs_f64();
            debug!(skill, execution_time, "skill completed");
            SkillResponse::success(message, data, execution_time)
        }
        Err(error) => {
            let execution_time = start.elapsed().as_secs_f64();
            warn!(skill, error = %error, "skill rejected arguments");
            SkillResponse::failure(&error, execution_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Counted {
        items: usize,
    }

    impl SkillOutcome for Counted {
        fn summary(&self) -> String {
            format!("Counted {} items", self.items)
        }
    }

    fn count(items: &[i64]) -> SkillResponse<Counted> {
        run_skill("count", || {
            if items.is_empty() {
                return Err(SkillError::EmptySelection {
                    what: "items",
                    operation: "counting",
                });
            }
            Ok(Counted { items: items.len() })
        })
    }

    fn keys(value: &serde_json::Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn success_envelope_carries_summary_and_data() {
        let response = count(&[1, 2, 3]);
        assert!(response.is_success());
        assert_eq!(response.message, "Counted 3 items");
        assert_eq!(response.data, Some(Counted { items: 3 }));

        let json = response.to_value().unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["items"], 3);
    }

    #[test]
    fn error_envelope_serializes_empty_data() {
        let response = count(&[]);
        assert!(response.is_error());
        assert_eq!(response.message, "No items selected for counting");
        assert!(response.data.is_none());

        let json = response.to_value().unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["data"], serde_json::json!({}));
    }

    #[test]
    fn status_round_trips_through_strings() {
        use std::str::FromStr;

        for status in [Status::Success, Status::Error, Status::Warning] {
            let parsed = Status::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
        assert_eq!(serde_json::to_value(Status::Warning).unwrap(), "warning");
    }

    #[test]
    #[traced_test]
    fn rejected_arguments_are_logged() {
        let _ = count(&[]);
        assert!(logs_contain("skill rejected arguments"));
        assert!(logs_contain("No items selected for counting"));
    }

    proptest! {
        #[test]
        fn envelope_always_has_exactly_four_keys(items in proptest::collection::vec(any::<i64>(), 0..16)) {
            let json = count(&items).to_value().unwrap();
            prop_assert_eq!(keys(&json), vec!["data", "execution_time", "message", "status"]);
            prop_assert!(json["execution_time"].as_f64().unwrap() >= 0.0);
            if items.is_empty() {
                prop_assert_eq!(&json["data"], &serde_json::json!({}));
            }
        }
    }
}
