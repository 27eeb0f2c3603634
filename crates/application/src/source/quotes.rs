//! Value normalization

/// Strips one matching pair of outer single or double quotes.
///
/// Anything else, including a lone or mismatched quote, is returned
/// unchanged. Interior whitespace and quotes are kept, and surrounding
/// whitespace is not trimmed here.
///
/// # Examples
///
/// ```
/// use secretenv_application::trim_quotes;
///
/// assert_eq!(trim_quotes("'foo'"), "foo");
/// assert_eq!(trim_quotes(r#""'foo'""#), "'foo'");
/// assert_eq!(trim_quotes("'foo"), "'foo");
/// ```
#[must_use]
pub fn trim_quotes(value: &str) -> &str {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(value)
}
