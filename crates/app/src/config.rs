//! Runtime configuration read from the process environment.

use std::collections::HashMap;
use std::path::PathBuf;

use secretenv_domain::{EnvResult, TemplateVars};

/// Path of the source document.
pub const SOURCE_FILE_VAR: &str = "SECRETENV_FILE";

/// Path of the JSON secrets file.
pub const SECRETS_FILE_VAR: &str = "SECRETENV_SECRETS_FILE";

/// Prefix of variables that become template variables.
pub const TEMPLATE_VAR_PREFIX: &str = "SECRETENV_VAR_";

const DEFAULT_SOURCE_FILE: &str = "secretenv.env";
const DEFAULT_SECRETS_FILE: &str = ".secretenv/secrets.json";

/// Binary configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Source document to resolve.
    pub source_file: PathBuf,

    /// JSON file holding secret values.
    pub secrets_file: PathBuf,

    /// Template variables taken from `SECRETENV_VAR_<NAME>`.
    pub template_vars: TemplateVars,
}

impl AppConfig {
    /// Reads the configuration from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a template variable name is invalid.
    pub fn from_env() -> EnvResult<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Reads the configuration from arbitrary key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a template variable name is invalid.
    pub fn from_vars<I>(vars: I) -> EnvResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let path_or = |name: &str, default: &str| {
            vars.get(name)
                .filter(|value| !value.is_empty())
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };

        Ok(Self {
            source_file: path_or(SOURCE_FILE_VAR, DEFAULT_SOURCE_FILE),
            secrets_file: path_or(SECRETS_FILE_VAR, DEFAULT_SECRETS_FILE),
            template_vars: TemplateVars::from_env_vars(&vars, TEMPLATE_VAR_PREFIX)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secretenv_domain::EnvError;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(pairs(&[("HOME", "/root")])).unwrap();
        assert_eq!(config.source_file, PathBuf::from("secretenv.env"));
        assert_eq!(config.secrets_file, PathBuf::from(".secretenv/secrets.json"));
        assert!(config.template_vars.is_empty());
    }

    #[test]
    fn test_overrides_and_template_vars() {
        let config = AppConfig::from_vars(pairs(&[
            ("SECRETENV_FILE", "/etc/app/prod.env"),
            ("SECRETENV_SECRETS_FILE", "/run/secrets.json"),
            ("SECRETENV_VAR_APP", "company/app"),
            ("SECRETENV_VAR_Stage", "prod"),
        ]))
        .unwrap();

        assert_eq!(config.source_file, PathBuf::from("/etc/app/prod.env"));
        assert_eq!(config.secrets_file, PathBuf::from("/run/secrets.json"));
        assert_eq!(config.template_vars.get("app"), Some("company/app"));
        assert_eq!(config.template_vars.get("stage"), Some("prod"));
    }

    #[test]
    fn test_empty_path_falls_back_to_default() {
        let config = AppConfig::from_vars(pairs(&[("SECRETENV_FILE", "")])).unwrap();
        assert_eq!(config.source_file, PathBuf::from("secretenv.env"));
    }

    #[test]
    fn test_invalid_template_var_name() {
        let err = AppConfig::from_vars(pairs(&[("SECRETENV_VAR_0BAD", "x")])).unwrap_err();
        assert_eq!(err, EnvError::InvalidTemplateVar("0bad".to_string()));
    }
}
