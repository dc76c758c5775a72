//! The typed payload passed to hook functions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One argument the host application should expose on its command line.
///
/// Hooks contribute these during `post_setup`; the host turns the final
/// list into real parser flags. `value_of` names the setting a flag
/// selects (e.g. `--json` setting `output_handler` to `json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Setting this argument controls (e.g. `output_handler`).
    pub name: String,
    /// Long flag, including the leading dashes (e.g. `--json`).
    pub long: String,
    /// Help text shown by the host's parser.
    pub help: String,
    /// Whether the flag takes a value. Flags without a value set `name`
    /// to `value_of` when present.
    pub takes_value: bool,
    /// The constant stored when a valueless flag is passed.
    pub value_of: Option<String>,
}

impl ArgSpec {
    /// A valueless flag storing `value_of` into `name` when passed.
    pub fn flag(
        name: impl Into<String>,
        long: impl Into<String>,
        help: impl Into<String>,
        value_of: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            long: long.into(),
            help: help.into(),
            takes_value: false,
            value_of: Some(value_of.into()),
        }
    }

    /// A flag that takes an explicit value.
    pub fn value(
        name: impl Into<String>,
        long: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            long: long.into(),
            help: help.into(),
            takes_value: true,
            value_of: None,
        }
    }
}

/// Context object passed mutably to every hook function at a lifecycle
/// point.
///
/// Carries the shared argument-configuration list plus a string-keyed
/// data map for anything point-specific. Hook return values are
/// discarded; mutations of this context are how hooks communicate.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// The lifecycle point being fired.
    pub point: String,
    /// The host's shared argument-configuration object.
    pub args: Vec<ArgSpec>,
    /// Arbitrary data keyed by string.
    pub data: HashMap<String, Value>,
    /// When this context was created for dispatch.
    pub fired_at: DateTime<Utc>,
}

impl HookContext {
    /// Creates a context for a lifecycle point.
    pub fn new(point: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            args: Vec::new(),
            data: HashMap::new(),
            fired_at: Utc::now(),
        }
    }

    /// Adds an argument spec to the shared argument list.
    pub fn add_arg(&mut self, spec: ArgSpec) {
        self.args.push(spec);
    }

    /// Finds an argument spec by its setting name.
    pub fn arg(&self, name: &str) -> Option<&ArgSpec> {
        self.args.iter().find(|a| a.name == name)
    }

    /// Inserts a data value (builder form).
    pub fn with_data(mut self, key: &str, value: Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a data value.
    pub fn set(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    /// Gets a data value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Gets a string data value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Gets an i64 data value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.data.get(key).and_then(|v| v.as_i64())
    }

    /// Gets a bool data value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_accessors_round_trip() {
        let mut ctx = HookContext::new("post_setup").with_data("retries", json!(3));
        ctx.set("verbose", json!(true));
        ctx.set("label", json!("demo"));

        assert_eq!(ctx.get_i64("retries"), Some(3));
        assert_eq!(ctx.get_bool("verbose"), Some(true));
        assert_eq!(ctx.get_str("label"), Some("demo"));
        assert!(ctx.get("absent").is_none());
    }

    #[test]
    fn args_are_found_by_setting_name() {
        let mut ctx = HookContext::new("post_setup");
        ctx.add_arg(ArgSpec::flag(
            "output_handler",
            "--json",
            "toggle json output handler",
            "json",
        ));

        let arg = ctx.arg("output_handler").unwrap();
        assert_eq!(arg.long, "--json");
        assert!(!arg.takes_value);
        assert_eq!(arg.value_of.as_deref(), Some("json"));
    }
}
