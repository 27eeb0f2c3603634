//! Delimiter parser
//!
//! Splits raw text into literal and placeholder nodes.

use std::ops::Range;

use super::{Node, Template, TemplateError};

/// Compiles raw strings into [`Template`]s using a start/end delimiter pair.
///
/// Placeholders do not nest: once a start delimiter is seen, everything up to
/// the next end delimiter is the placeholder key, including any further start
/// delimiters.
///
/// # Examples
///
/// ```
/// use secretenv_domain::template::{Node, Parser};
///
/// let template = Parser::new("${", "}").parse("${app}/db").unwrap();
/// assert_eq!(
///     template.nodes(),
///     &[Node::Placeholder("app".to_string()), Node::Literal("/db".to_string())]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    start: String,
    end: String,
}

impl Parser {
    /// Creates a parser for the given delimiter pair.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the opening delimiter.
    #[must_use]
    pub fn start_delimiter(&self) -> &str {
        &self.start
    }

    /// Returns the closing delimiter.
    #[must_use]
    pub fn end_delimiter(&self) -> &str {
        &self.end
    }

    /// Parses `raw` into a template.
    ///
    /// Placeholder keys are trimmed of surrounding spaces (tabs are kept).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::TagNotClosed`] if a start delimiter has no
    /// matching end delimiter, and [`TemplateError::EmptyDelimiter`] if the
    /// parser was built with an empty delimiter.
    pub fn parse(&self, raw: &str) -> Result<Template, TemplateError> {
        self.parse_protected(raw, &[])
    }

    /// Parses `raw`, ignoring any delimiter occurrence that overlaps one of
    /// the `protected` byte ranges. Text inside those ranges is always
    /// literal, though it may still form part of a placeholder key.
    ///
    /// # Errors
    ///
    /// Same as [`Parser::parse`].
    pub fn parse_protected(
        &self,
        raw: &str,
        protected: &[Range<usize>],
    ) -> Result<Template, TemplateError> {
        if self.start.is_empty() || self.end.is_empty() {
            return Err(TemplateError::EmptyDelimiter);
        }

        let mut nodes = Vec::new();
        let mut pos = 0;

        while let Some(open) = find_unprotected(raw, pos, &self.start, protected) {
            if open > pos {
                nodes.push(Node::Literal(raw[pos..open].to_string()));
            }

            let key_start = open + self.start.len();
            let Some(close) = find_unprotected(raw, key_start, &self.end, protected) else {
                return Err(TemplateError::TagNotClosed {
                    delimiter: self.end.clone(),
                });
            };

            nodes.push(Node::Placeholder(
                raw[key_start..close].trim_matches(' ').to_string(),
            ));
            pos = close + self.end.len();
        }

        if pos < raw.len() {
            nodes.push(Node::Literal(raw[pos..].to_string()));
        }

        Ok(Template::new(nodes))
    }
}

/// Finds the first occurrence of `needle` at or after `from` that does not
/// overlap a protected range.
fn find_unprotected(
    raw: &str,
    mut from: usize,
    needle: &str,
    protected: &[Range<usize>],
) -> Option<usize> {
    while let Some(found) = raw[from..].find(needle) {
        let start = from + found;
        let end = start + needle.len();
        if !protected.iter().any(|r| start < r.end && r.start < end) {
            return Some(start);
        }
        from = start + raw[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
