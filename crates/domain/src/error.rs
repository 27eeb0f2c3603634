//! Domain error types

use thiserror::Error;

use crate::environment::LineNumber;
use crate::template::TemplateError;

/// Errors raised while turning a source document into an [`Environment`].
///
/// [`Environment`]: crate::environment::Environment
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// A problem tied to a specific line of a line-oriented document.
    #[error("template error on line {line}: {kind}")]
    Line {
        /// 1-based line number in the source document.
        line: usize,
        /// What went wrong on that line.
        kind: LineErrorKind,
    },

    /// A template problem without a known source position.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The mapping document could not be decoded. Carries the decoder message verbatim.
    #[error("{0}")]
    Mapping(String),

    /// A caller-supplied template variable name is not a valid identifier.
    #[error(
        "template variable name {0:?} is invalid: names must start with a letter or underscore, followed by letters, digits or underscores"
    )]
    InvalidTemplateVar(String),
}

impl EnvError {
    /// Creates an error attached to a source line.
    #[must_use]
    pub fn at_line(line: usize, kind: impl Into<LineErrorKind>) -> Self {
        Self::Line {
            line,
            kind: kind.into(),
        }
    }

    /// Attaches `kind` to `line` when the line is known. Without a known line
    /// the underlying cause is returned on its own.
    #[must_use]
    pub fn locate(line: LineNumber, kind: impl Into<LineErrorKind>) -> Self {
        match (line.get(), kind.into()) {
            (Some(line), kind) => Self::Line { line, kind },
            (None, LineErrorKind::Template(err)) => Self::Template(err),
            (None, LineErrorKind::UndefinedTemplateVar { name }) => {
                Self::Template(TemplateError::KeyNotFound { key: name })
            }
            (None, kind @ LineErrorKind::NotKeyValue) => Self::Mapping(kind.to_string()),
        }
    }

    /// Returns the source line this error refers to, if known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// The line-level cause carried by [`EnvError::Line`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineErrorKind {
    /// The line is neither blank, a comment, nor a `key=value` pair.
    #[error("template is not formatted as key=value pairs")]
    NotKeyValue,

    /// The value references a template variable the caller did not supply.
    #[error("template variable {name:?} is not defined")]
    UndefinedTemplateVar {
        /// The referenced template variable name.
        name: String,
    },

    /// The value could not be parsed as a template.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Result type alias for domain operations.
pub type EnvResult<T> = Result<T, EnvError>;
