//! Placeholder templates
//!
//! A [`Template`] is the compiled form of a string that may contain
//! delimited placeholders such as `{{path/to/secret}}`. Compile one with a
//! [`Parser`], inspect the referenced [`keys`](Template::keys), then
//! [`inject`](Template::inject) the values to rebuild the final string.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use secretenv_domain::template::Parser;
//!
//! let template = Parser::new("{{", "}}").parse("postgres://{{ db/user }}@host").unwrap();
//! assert_eq!(template.keys(), vec!["db/user"]);
//!
//! let mut values = HashMap::new();
//! values.insert("db/user".to_string(), "admin".to_string());
//! assert_eq!(template.inject(&values).unwrap(), "postgres://admin@host");
//! ```

mod parser;

pub use parser::Parser;

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// Errors produced while parsing or injecting a template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder key had no value in the supplied replacements.
    #[error("no value supplied for key {key}")]
    KeyNotFound {
        /// The missing placeholder key.
        key: String,
    },

    /// An opening delimiter was never closed.
    #[error("missing closing delimiter '{delimiter}'")]
    TagNotClosed {
        /// The closing delimiter that was expected.
        delimiter: String,
    },

    /// The parser was configured with an empty delimiter.
    #[error("template delimiters must not be empty")]
    EmptyDelimiter,
}

/// One segment of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text emitted verbatim.
    Literal(String),
    /// A key replaced by its supplied value on injection.
    Placeholder(String),
}

impl Node {
    fn inject<'a>(
        &'a self,
        replacements: &'a HashMap<String, String>,
    ) -> Result<&'a str, TemplateError> {
        match self {
            Self::Literal(text) => Ok(text.as_str()),
            Self::Placeholder(key) => replacements
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| TemplateError::KeyNotFound { key: key.clone() }),
        }
    }
}

/// An immutable, ordered sequence of literal and placeholder nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Creates a template from nodes in emission order.
    #[must_use]
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Creates a template that consists of a single placeholder.
    #[must_use]
    pub fn placeholder(key: impl Into<String>) -> Self {
        Self::new(vec![Node::Placeholder(key.into())])
    }

    /// Returns the nodes in emission order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns true if the template references no placeholders.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.nodes.iter().all(|n| matches!(n, Node::Literal(_)))
    }

    /// Returns the distinct placeholder keys referenced by this template.
    ///
    /// Keys are listed in order of first appearance, but callers should treat
    /// the result as a set.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Placeholder(key) => Some(key.as_str()),
                Node::Literal(_) => None,
            })
            .filter(|key| seen.insert(*key))
            .collect()
    }

    /// Builds the final string, replacing every placeholder with its value.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::KeyNotFound`] for the first placeholder whose
    /// key is absent from `replacements`.
    #[allow(clippy::implicit_hasher)]
    pub fn inject(&self, replacements: &HashMap<String, String>) -> Result<String, TemplateError> {
        self.nodes.iter().try_fold(String::new(), |mut out, node| {
            out.push_str(node.inject(replacements)?);
            Ok(out)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_literal_template_ignores_replacements() {
        let template = Template::new(vec![Node::Literal("plain text".to_string())]);
        assert!(template.is_literal());
        assert_eq!(template.inject(&HashMap::new()).unwrap(), "plain text");
        assert_eq!(
            template.inject(&values(&[("plain", "x"), ("text", "y")])).unwrap(),
            "plain text"
        );
    }

    #[test]
    fn test_empty_template_injects_empty_string() {
        let template = Template::default();
        assert_eq!(template.inject(&HashMap::new()).unwrap(), "");
        assert!(template.keys().is_empty());
    }

    #[test]
    fn test_inject_concatenates_in_order() {
        let template = Template::new(vec![
            Node::Literal("a=".to_string()),
            Node::Placeholder("x".to_string()),
            Node::Literal(", b=".to_string()),
            Node::Placeholder("y".to_string()),
        ]);
        let out = template.inject(&values(&[("x", "1"), ("y", "2")])).unwrap();
        assert_eq!(out, "a=1, b=2");
    }

    #[test]
    fn test_inject_missing_key() {
        let template = Template::new(vec![
            Node::Placeholder("present".to_string()),
            Node::Placeholder("missing".to_string()),
        ]);
        let err = template.inject(&values(&[("present", "v")])).unwrap_err();
        assert_eq!(
            err,
            TemplateError::KeyNotFound {
                key: "missing".to_string()
            }
        );
        assert_eq!(err.to_string(), "no value supplied for key missing");
    }

    #[test]
    fn test_keys_are_deduplicated() {
        let template = Template::new(vec![
            Node::Placeholder("a".to_string()),
            Node::Literal("-".to_string()),
            Node::Placeholder("b".to_string()),
            Node::Placeholder("a".to_string()),
        ]);
        assert_eq!(template.keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_placeholder_constructor() {
        let template = Template::placeholder("path/to/secret");
        assert_eq!(template.keys(), vec!["path/to/secret"]);
        assert!(!template.is_literal());
    }
}
