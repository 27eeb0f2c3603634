//! Line dialect: one `KEY=VALUE` pair per line.

use secretenv_domain::{EnvError, EnvResult, EnvVar, LineErrorKind, LineNumber};

use super::quotes::trim_quotes;

/// Parses a line-oriented document into declared variables.
///
/// - Blank lines and lines whose first non-blank character is `#` are skipped,
///   but still count towards line numbering.
/// - Every other line is split on its first `=`. Key and value are trimmed of
///   surrounding whitespace, then one matching pair of quotes is stripped from
///   the value.
///
/// # Errors
///
/// Returns [`LineErrorKind::NotKeyValue`] tagged with the line number for the
/// first line that has no `=` or an empty key.
pub fn parse_line_dialect(raw: &str) -> EnvResult<Vec<EnvVar>> {
    let mut vars = Vec::new();

    for (index, line) in raw.split('\n').enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() || line.trim_start_matches([' ', '\t']).starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvError::at_line(line_number, LineErrorKind::NotKeyValue));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(EnvError::at_line(line_number, LineErrorKind::NotKeyValue));
        }

        vars.push(EnvVar::new(
            key,
            trim_quotes(value.trim()),
            LineNumber::Known(line_number),
        ));
    }

    Ok(vars)
}
