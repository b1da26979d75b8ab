//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub debug: DebugConfig,
    /// List choices the player cannot take right now, with the reason.
    pub show_unavailable: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            debug: DebugConfig::default(),
            show_unavailable: true,
        }
    }
}

impl FrontendConfig {
    pub const fn new(debug: DebugConfig, show_unavailable: bool) -> Self {
        Self {
            debug,
            show_unavailable,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_SHOW_TAGS` - Show the grouped tag breakdown of the last check (default: false)
    /// - `TACTICS_SHOW_RAW_TAGS` - Also list the raw tag strings (default: false)
    /// - `TACTICS_SHOW_UNAVAILABLE` - List unavailable choices with reasons (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(show) = read_bool(&lookup, "TACTICS_SHOW_TAGS") {
            config.debug.show_tags = show;
        }
        if let Some(show) = read_bool(&lookup, "TACTICS_SHOW_RAW_TAGS") {
            config.debug.show_raw = show;
        }
        if let Some(show) = read_bool(&lookup, "TACTICS_SHOW_UNAVAILABLE") {
            config.show_unavailable = show;
        }

        config
    }

    /// Turns on the tag breakdown (builder pattern).
    #[must_use]
    pub fn with_tags(mut self) -> Self {
        self.debug.show_tags = true;
        self
    }
}

/// Controls the diagnostic section of the combat panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugConfig {
    /// Show the last check's tags grouped by namespace.
    pub show_tags: bool,
    /// Show the untouched tag strings below the groups.
    pub show_raw: bool,
}

fn read_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn unset_variables_keep_defaults() {
        assert_eq!(FrontendConfig::from_lookup(lookup(&[])), FrontendConfig::default());
    }

    #[test]
    fn accepts_common_boolean_spellings() {
        let config = FrontendConfig::from_lookup(lookup(&[
            ("TACTICS_SHOW_TAGS", "Yes"),
            ("TACTICS_SHOW_RAW_TAGS", "on"),
            ("TACTICS_SHOW_UNAVAILABLE", "0"),
        ]));
        assert!(config.debug.show_tags);
        assert!(config.debug.show_raw);
        assert!(!config.show_unavailable);
    }

    #[test]
    fn garbage_values_are_ignored() {
        let config = FrontendConfig::from_lookup(lookup(&[("TACTICS_SHOW_UNAVAILABLE", "maybe")]));
        assert!(config.show_unavailable);
    }
}
