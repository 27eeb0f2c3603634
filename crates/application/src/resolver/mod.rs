//! Environment resolution
//!
//! Compiles a parsed source document into an [`Environment`]:
//!
//! 1. template variables (`${name}`) are substituted textually, line dialect only
//! 2. the result is compiled into a secret template (`{{path}}` in the line
//!    dialect, `${path}` in the mapping dialect)
//!
//! A substituted template variable value is literal text. It is never
//! scanned again for placeholders of either kind, although it can form part
//! of a secret path, as in `{{${app}/db/pass}}`.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use secretenv_application::new_env;
//!
//! let mut vars = HashMap::new();
//! vars.insert("app".to_string(), "company/application".to_string());
//!
//! let env = new_env("DB_PASS={{${app}/db/pass}}", &vars).unwrap();
//! assert_eq!(env.secret_paths(), vec!["company/application/db/pass"]);
//! ```

mod config;

pub use config::ResolverConfig;

use std::collections::HashMap;
use std::ops::Range;

use secretenv_domain::{
    EnvError, EnvResult, EnvVar, Environment, LineErrorKind, Node, Template, TemplateVars,
};

use crate::source::{ParsedSource, SourceDialect, parse_source};

/// Builds environments from source documents.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentResolver {
    config: ResolverConfig,
}

impl EnvironmentResolver {
    /// Creates a resolver with the given delimiters.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the resolver configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Parses `raw` and compiles every declared variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the document matches neither dialect, references
    /// an undefined template variable, or contains an unterminated
    /// placeholder. Errors carry the source line when it is known.
    pub fn resolve(&self, raw: &str, vars: &TemplateVars) -> EnvResult<Environment> {
        let source = parse_source(raw)?;
        self.compile(&source, vars)
    }

    /// Compiles an already parsed document.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentResolver::resolve`], minus dialect errors.
    pub fn compile(&self, source: &ParsedSource, vars: &TemplateVars) -> EnvResult<Environment> {
        source
            .vars
            .iter()
            .map(|var| -> EnvResult<(String, Template)> {
                let template = self.compile_var(source.dialect, var, vars)?;
                Ok((var.key().to_string(), template))
            })
            .collect()
    }

    fn compile_var(
        &self,
        dialect: SourceDialect,
        var: &EnvVar,
        vars: &TemplateVars,
    ) -> EnvResult<Template> {
        match dialect {
            SourceDialect::Line => {
                let (substituted, protected) = self.substitute_template_vars(var, vars)?;
                self.config
                    .line_secrets
                    .parse_protected(substituted.value(), &protected)
                    .map_err(|e| EnvError::locate(var.line(), e))
            }
            SourceDialect::Mapping => self
                .config
                .mapping_secrets
                .parse(var.value())
                .map_err(|e| EnvError::locate(var.line(), e)),
        }
    }

    /// Replaces template variable references in the value, returning the new
    /// entry and the byte ranges that came from variable values.
    fn substitute_template_vars(
        &self,
        var: &EnvVar,
        vars: &TemplateVars,
    ) -> EnvResult<(EnvVar, Vec<Range<usize>>)> {
        let template = self
            .config
            .template_vars
            .parse(var.value())
            .map_err(|e| EnvError::locate(var.line(), e))?;

        let mut text = String::with_capacity(var.value().len());
        let mut protected = Vec::new();

        for node in template.nodes() {
            match node {
                Node::Literal(literal) => text.push_str(literal),
                Node::Placeholder(name) => {
                    let value = vars.get(name).ok_or_else(|| {
                        EnvError::locate(
                            var.line(),
                            LineErrorKind::UndefinedTemplateVar { name: name.clone() },
                        )
                    })?;
                    let start = text.len();
                    text.push_str(value);
                    protected.push(start..text.len());
                }
            }
        }

        Ok((var.with_value(text), protected))
    }
}

/// Validates `template_vars`, then builds an environment from `raw` with the
/// default delimiters.
///
/// # Errors
///
/// Returns [`EnvError::InvalidTemplateVar`] before looking at `raw` if any
/// template variable name is invalid, otherwise the errors of
/// [`EnvironmentResolver::resolve`].
#[allow(clippy::implicit_hasher)]
pub fn new_env(raw: &str, template_vars: &HashMap<String, String>) -> EnvResult<Environment> {
    let vars = TemplateVars::try_from_map(template_vars.clone())?;
    EnvironmentResolver::default().resolve(raw, &vars)
}
