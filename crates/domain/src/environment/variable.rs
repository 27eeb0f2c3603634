//! Declared environment variables

/// Position of a declaration in its source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineNumber {
    /// 1-based line in the source document.
    Known(usize),
    /// The source dialect does not track line positions.
    Unknown,
}

impl LineNumber {
    /// Returns the line number if it is known.
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        match self {
            Self::Known(line) => Some(line),
            Self::Unknown => None,
        }
    }
}

/// One declared entry of a source document.
///
/// Values are never edited in place; later pipeline stages build new
/// entries with [`EnvVar::with_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    key: String,
    value: String,
    line: LineNumber,
}

impl EnvVar {
    /// Creates a new declared variable.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: LineNumber) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }

    /// Returns the variable name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns where the variable was declared.
    #[must_use]
    pub const fn line(&self) -> LineNumber {
        self.line
    }

    /// Returns a copy of this entry carrying a different value.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            key: self.key.clone(),
            value: value.into(),
            line: self.line,
        }
    }
}
