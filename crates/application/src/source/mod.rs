//! Source document parsing
//!
//! Two dialects are accepted:
//! - the line dialect, one `KEY=VALUE` pair per line with `#` comments
//! - the mapping dialect, a flat YAML mapping of `KEY: VALUE`
//!
//! [`parse_source`] tries the line dialect first and falls back to the
//! mapping dialect only when the document is not valid line syntax.

mod line;
mod mapping;
mod quotes;

pub use line::parse_line_dialect;
pub use mapping::parse_mapping_dialect;
pub use quotes::trim_quotes;

use std::fmt;

use secretenv_domain::{EnvResult, EnvVar};

/// The grammar a source document was parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDialect {
    /// `KEY=VALUE` per line.
    Line,
    /// Flat `KEY: VALUE` mapping.
    Mapping,
}

impl fmt::Display for SourceDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => f.write_str("line"),
            Self::Mapping => f.write_str("mapping"),
        }
    }
}

/// A parsed source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    /// The dialect the document was parsed with.
    pub dialect: SourceDialect,

    /// Declared variables in source order.
    pub vars: Vec<EnvVar>,
}

/// Parses a source document, selecting the dialect from its content.
///
/// # Errors
///
/// If neither dialect accepts the document, the line dialect's error is
/// returned, since it carries a line number.
pub fn parse_source(raw: &str) -> EnvResult<ParsedSource> {
    match parse_line_dialect(raw) {
        Ok(vars) => Ok(ParsedSource {
            dialect: SourceDialect::Line,
            vars,
        }),
        Err(line_err) => parse_mapping_dialect(raw)
            .map(|vars| ParsedSource {
                dialect: SourceDialect::Mapping,
                vars,
            })
            .map_err(|_| line_err),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secretenv_domain::{EnvError, LineErrorKind, LineNumber};

    #[test]
    fn test_selects_line_dialect() {
        let parsed = parse_source("foo=bar\nbaz={{path/to/secret}}").unwrap();
        assert_eq!(parsed.dialect, SourceDialect::Line);
        assert_eq!(parsed.vars.len(), 2);
    }

    #[test]
    fn test_falls_back_to_mapping_dialect() {
        let parsed = parse_source("foo: bar\nbaz: ${path/to/secret}").unwrap();
        assert_eq!(parsed.dialect, SourceDialect::Mapping);
        assert_eq!(
            parsed.vars,
            vec![
                EnvVar::new("foo", "bar", LineNumber::Unknown),
                EnvVar::new("baz", "${path/to/secret}", LineNumber::Unknown),
            ]
        );
    }

    #[test]
    fn test_equals_in_mapping_value() {
        // The first line is valid line syntax but the second is not.
        let parsed = parse_source("foo: foo=bar\nbar: baz").unwrap();
        assert_eq!(parsed.dialect, SourceDialect::Mapping);
        assert_eq!(parsed.vars[0].value(), "foo=bar");
    }

    #[test]
    fn test_reports_line_error_when_both_fail() {
        let err = parse_source("foo: bar: baz").unwrap_err();
        assert_eq!(err, EnvError::at_line(1, LineErrorKind::NotKeyValue));

        let err = parse_source("foobar").unwrap_err();
        assert_eq!(err, EnvError::at_line(1, LineErrorKind::NotKeyValue));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let raw = "a: 1\nb: 2";
        assert_eq!(parse_source(raw).unwrap(), parse_source(raw).unwrap());
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(SourceDialect::Line.to_string(), "line");
        assert_eq!(SourceDialect::Mapping.to_string(), "mapping");
    }
}
