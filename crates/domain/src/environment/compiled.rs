//! Compiled environments
//!
//! An [`Environment`] maps each declared variable to the template of its
//! value. It reports which secret paths it needs and, once those have been
//! fetched, materializes the final variable values.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

use crate::error::EnvResult;
use crate::template::Template;

/// Declared variables and their compiled value templates, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    templates: IndexMap<String, Template>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable whose value is exactly the secret stored at `path`.
    /// Replaces any earlier declaration of `key`.
    #[must_use]
    pub fn with_reference(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.templates.insert(key.into(), Template::placeholder(path));
        self
    }

    /// Returns the template declared for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    /// Returns the declared variable names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Iterates over variable names and their templates.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Returns the number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no variables are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns every distinct secret path referenced by any variable, sorted.
    ///
    /// A value must be supplied for each of these before calling [`env`](Self::env).
    #[must_use]
    pub fn secret_paths(&self) -> Vec<String> {
        self.templates
            .values()
            .flat_map(Template::keys)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Resolves every variable against the fetched secret values.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Template`](crate::EnvError::Template) wrapping
    /// [`TemplateError::KeyNotFound`](crate::TemplateError::KeyNotFound) if a
    /// referenced path has no value in `secrets`.
    #[allow(clippy::implicit_hasher)]
    pub fn env(&self, secrets: &HashMap<String, String>) -> EnvResult<IndexMap<String, String>> {
        self.templates
            .iter()
            .map(|(key, template)| -> EnvResult<(String, String)> {
                Ok((key.clone(), template.inject(secrets)?))
            })
            .collect()
    }
}

impl FromIterator<(String, Template)> for Environment {
    /// Later entries for the same key overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (String, Template)>>(iter: I) -> Self {
        let mut templates = IndexMap::new();
        for (key, template) in iter {
            templates.insert(key, template);
        }
        Self { templates }
    }
}
