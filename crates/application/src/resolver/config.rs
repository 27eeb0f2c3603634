//! Resolver configuration

use secretenv_domain::Parser;

/// Delimiters used by [`EnvironmentResolver`](super::EnvironmentResolver).
///
/// Defaults:
/// - template variables: `${name}`
/// - secrets in the line dialect: `{{path}}`
/// - secrets in the mapping dialect: `${path}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Parser for template variable references.
    pub template_vars: Parser,

    /// Parser for secret placeholders in line-dialect documents.
    pub line_secrets: Parser,

    /// Parser for secret placeholders in mapping-dialect documents.
    pub mapping_secrets: Parser,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            template_vars: Parser::new("${", "}"),
            line_secrets: Parser::new("{{", "}}"),
            mapping_secrets: Parser::new("${", "}"),
        }
    }
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template variable delimiters.
    #[must_use]
    pub fn with_template_var_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.template_vars = Parser::new(start, end);
        self
    }

    /// Sets the secret delimiters for line-dialect documents.
    #[must_use]
    pub fn with_line_secret_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.line_secrets = Parser::new(start, end);
        self
    }

    /// Sets the secret delimiters for mapping-dialect documents.
    #[must_use]
    pub fn with_mapping_secret_delimiters(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.mapping_secrets = Parser::new(start, end);
        self
    }
}
