//! Mapping dialect: a flat YAML mapping of `KEY: VALUE`.

use indexmap::IndexMap;
use secretenv_domain::{EnvError, EnvResult, EnvVar, LineNumber};

/// Parses a flat YAML mapping into declared variables.
///
/// Entries keep document order. Scalar keys and values are read as strings.
/// Line positions are not tracked, so every entry carries
/// [`LineNumber::Unknown`].
///
/// # Errors
///
/// Returns [`EnvError::Mapping`] with the decoder's message if the document is
/// not a flat mapping of scalars, and an [`EnvError::Mapping`] if a key is
/// empty.
pub fn parse_mapping_dialect(raw: &str) -> EnvResult<Vec<EnvVar>> {
    let mapping: IndexMap<String, String> =
        serde_yaml::from_str(raw).map_err(|e| EnvError::Mapping(e.to_string()))?;

    mapping
        .into_iter()
        .map(|(key, value)| {
            if key.is_empty() {
                return Err(EnvError::Mapping(format!(
                    "empty key for value {value:?} is not allowed"
                )));
            }
            Ok(EnvVar::new(key, value, LineNumber::Unknown))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn var(key: &str, value: &str) -> EnvVar {
        EnvVar::new(key, value, LineNumber::Unknown)
    }

    fn mapping_message(raw: &str) -> String {
        match parse_mapping_dialect(raw) {
            Err(EnvError::Mapping(message)) => message,
            other => panic!("expected a mapping error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_flat_mapping() {
        let vars = parse_mapping_dialect("foo: bar\nbaz: ${path/to/secret}").unwrap();
        assert_eq!(vars, vec![var("foo", "bar"), var("baz", "${path/to/secret}")]);
    }

    #[test]
    fn test_parse_equals_in_value() {
        let vars = parse_mapping_dialect("foo: foo=bar\nbar: baz").unwrap();
        assert_eq!(vars, vec![var("foo", "foo=bar"), var("bar", "baz")]);
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let vars = parse_mapping_dialect("zeta: 1\nalpha: 2\nmid: 3").unwrap();
        let keys: Vec<&str> = vars.iter().map(EnvVar::key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_scalars_become_strings() {
        let vars = parse_mapping_dialect("port: 5432\ndebug: true\nquoted: '007'").unwrap();
        assert_eq!(
            vars,
            vec![var("port", "5432"), var("debug", "true"), var("quoted", "007")]
        );
    }

    #[test]
    fn test_parse_nested_value_surfaces_decoder_error() {
        let message = mapping_message("ROOT:\n  SUB: val1");
        let expected = serde_yaml::from_str::<IndexMap<String, String>>("ROOT:\n  SUB: val1")
            .unwrap_err()
            .to_string();
        assert_eq!(message, expected);
        assert!(message.contains("invalid type: map"), "{message}");
    }

    #[test]
    fn test_parse_sequence_value_surfaces_decoder_error() {
        let message = mapping_message("LIST:\n  - a\n  - b");
        assert!(message.contains("invalid type: sequence"), "{message}");
    }

    #[test]
    fn test_parse_empty_key_fails() {
        let message = mapping_message("\"\": x\nother: y");
        assert!(message.contains("empty key"), "{message}");
    }

    #[test]
    fn test_parse_invalid_yaml_surfaces_decoder_error() {
        let message = mapping_message("ROOT:\n\tSUB\n\t\tNAME: val1");
        assert!(!message.is_empty());
    }

    #[test]
    fn test_parse_non_mapping_document_fails() {
        assert!(parse_mapping_dialect("just a string").is_err());
        assert!(parse_mapping_dialect("foo: bar: baz").is_err());
    }
}
