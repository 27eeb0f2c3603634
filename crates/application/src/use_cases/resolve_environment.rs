//! Resolve environment use case

use std::path::Path;

use indexmap::IndexMap;
use secretenv_domain::{Environment, TemplateVars};
use tracing::{debug, info};

use crate::error::ApplicationResult;
use crate::ports::{FileSystem, SecretProvider};
use crate::resolver::EnvironmentResolver;
use crate::source::{SourceDialect, parse_source};

/// Output containing the resolved environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveEnvironmentOutput {
    /// The dialect the source document was parsed with.
    pub dialect: SourceDialect,

    /// Secret paths that were fetched, sorted.
    pub secret_paths: Vec<String>,

    /// Final variable values in declaration order.
    pub variables: IndexMap<String, String>,
}

/// Loads a source document, fetches the secrets it references and produces
/// the final variable values.
pub struct ResolveEnvironment<F, S> {
    fs: F,
    secrets: S,
    resolver: EnvironmentResolver,
    references: IndexMap<String, String>,
}

impl<F: FileSystem, S: SecretProvider> ResolveEnvironment<F, S> {
    /// Creates a new `ResolveEnvironment` use case with the default delimiters.
    pub fn new(fs: F, secrets: S) -> Self {
        Self {
            fs,
            secrets,
            resolver: EnvironmentResolver::default(),
            references: IndexMap::new(),
        }
    }

    /// Uses a custom resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: EnvironmentResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Adds a variable whose value is the secret at `path`, overriding any
    /// declaration of `key` in the source document.
    #[must_use]
    pub fn with_reference(mut self, key: impl Into<String>, path: impl Into<String>) -> Self {
        self.references.insert(key.into(), path.into());
        self
    }

    /// Executes the use case for a source document on disk.
    ///
    /// # Arguments
    /// * `source` - Path to the source document
    /// * `vars` - Template variables available to the document
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the document is invalid,
    /// or a referenced secret cannot be fetched.
    pub async fn execute(
        &self,
        source: &Path,
        vars: &TemplateVars,
    ) -> ApplicationResult<ResolveEnvironmentOutput> {
        debug!(source = %source.display(), "reading source document");
        let raw = self.fs.read_file_string(source).await?;
        self.execute_raw(&raw, vars).await
    }

    /// Executes the use case for an in-memory source document.
    ///
    /// # Errors
    /// Returns an error if the document is invalid or a referenced secret
    /// cannot be fetched.
    pub async fn execute_raw(
        &self,
        raw: &str,
        vars: &TemplateVars,
    ) -> ApplicationResult<ResolveEnvironmentOutput> {
        let parsed = parse_source(raw)?;
        debug!(
            dialect = %parsed.dialect,
            declared = parsed.vars.len(),
            "parsed source document"
        );

        let environment = self
            .references
            .iter()
            .fold(self.resolver.compile(&parsed, vars)?, |env, (key, path)| {
                env.with_reference(key.as_str(), path.as_str())
            });

        let (secret_paths, variables) = self.materialize(&environment).await?;
        info!(
            variables = variables.len(),
            secrets = secret_paths.len(),
            "resolved environment"
        );

        Ok(ResolveEnvironmentOutput {
            dialect: parsed.dialect,
            secret_paths,
            variables,
        })
    }

    async fn materialize(
        &self,
        environment: &Environment,
    ) -> ApplicationResult<(Vec<String>, IndexMap<String, String>)> {
        let secret_paths = environment.secret_paths();

        let values = if secret_paths.is_empty() {
            Default::default()
        } else {
            debug!(count = secret_paths.len(), "fetching secrets");
            self.secrets.fetch(&secret_paths).await?
        };

        let variables = environment.env(&values)?;
        Ok((secret_paths, variables))
    }
}
