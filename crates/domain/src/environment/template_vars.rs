//! Template variables
//!
//! Short caller-supplied aliases, substituted textually into values before
//! secret placeholders are compiled.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EnvError, EnvResult};

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap()
});

/// A validated mapping of template variable name to literal value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    vars: HashMap<String, String>,
}

impl TemplateVars {
    /// Creates an empty set of template variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` can be used as a template variable name.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }

    /// Builds template variables from an existing map, validating every name.
    ///
    /// Names are checked in sorted order so the reported name is stable.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidTemplateVar`] naming the first invalid name.
    #[allow(clippy::implicit_hasher)]
    pub fn try_from_map(vars: HashMap<String, String>) -> EnvResult<Self> {
        let mut names: Vec<&String> = vars.keys().collect();
        names.sort();
        if let Some(bad) = names.into_iter().find(|name| !Self::is_valid_name(name)) {
            return Err(EnvError::InvalidTemplateVar(bad.clone()));
        }
        Ok(Self { vars })
    }

    /// Collects template variables from `PREFIX<NAME>=value` pairs, such as
    /// the process environment. `<NAME>` is lowercased; pairs without the
    /// prefix are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidTemplateVar`] if a derived name is invalid.
    pub fn from_env_vars<I, K, V>(vars: I, prefix: &str) -> EnvResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let collected = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(prefix)
                    .map(|name| (name.to_lowercase(), value.into()))
            })
            .collect();
        Self::try_from_map(collected)
    }

    /// Adds a single template variable.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidTemplateVar`] if `name` is invalid.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> EnvResult<()> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(EnvError::InvalidTemplateVar(name));
        }
        self.vars.insert(name, value.into());
        Ok(())
    }

    /// Looks up a template variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// Returns the number of template variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no template variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
