//! Parsing helpers for raw query string values.

use std::str::FromStr;

use crate::server::error::query::QueryError;

/// Splits a comma-separated parameter into lowercase values.
///
/// Whitespace around commas and around the whole value is ignored, and empty
/// elements are dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Splits an optional parameter, treating a parameter with no values as absent.
pub fn list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(split_list).filter(|values| !values.is_empty())
}

/// Parses a comma-separated list of numbers.
pub fn number_list<T: FromStr>(
    name: &'static str,
    raw: Option<&str>,
) -> Result<Option<Vec<T>>, QueryError> {
    let Some(values) = list(raw) else {
        return Ok(None);
    };

    values
        .iter()
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| QueryError::invalid(name, format!("{value:?} is not a number")))
        })
        .collect::<Result<Vec<T>, QueryError>>()
        .map(Some)
}

/// Parses a single number.
pub fn number<T: FromStr>(name: &'static str, raw: Option<&str>) -> Result<Option<T>, QueryError> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| QueryError::invalid(name, format!("{value:?} is not a number")))
        })
        .transpose()
}

/// `true` (any case) is true; anything else, including absence, is false.
pub fn flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

/// Like [`flag`] but keeps absence distinct from false.
pub fn optional_flag(raw: Option<&str>) -> Option<bool> {
    raw.map(|value| flag(Some(value)))
}

/// Parses a 1-indexed page number; missing, invalid or non-positive values mean page 1.
pub fn page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map_or(1, |page| page as u64)
}

/// Lowercased, trimmed single value; empty input is treated as absent.
pub fn lower(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// Escapes LIKE wildcards so user input only ever matches literally.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// Landing pad sizes, ordered from smallest to largest.
pub const PAD_SIZES: [&str; 3] = ["s", "m", "l"];

/// Pad sizes that can host a ship needing at least `minimum`.
///
/// Unknown sizes behave like the smallest size.
pub fn pads_at_least(minimum: &str) -> Vec<String> {
    let minimum = minimum.trim().to_lowercase();
    let start = PAD_SIZES
        .iter()
        .position(|size| *size == minimum)
        .unwrap_or(0);

    PAD_SIZES[start..].iter().map(|size| size.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect comma lists to be trimmed and lowercased
    #[test]
    fn split_list_trims_and_lowercases() {
        assert_eq!(split_list("A, b,C"), vec!["a", "b", "c"]);
        assert_eq!(split_list("  Sol  ,\tLHS 3447 "), vec!["sol", "lhs 3447"]);
    }

    /// Expect empty elements to be dropped
    #[test]
    fn split_list_drops_empty_elements() {
        assert_eq!(split_list("a,,b, ,"), vec!["a", "b"]);
        assert!(list(Some(" , ")).is_none());
    }

    /// Expect only "true" in any case to parse as true
    #[test]
    fn flag_accepts_only_true() {
        assert!(flag(Some("true")));
        assert!(flag(Some("TRUE")));
        assert!(!flag(Some("yes")));
        assert!(!flag(Some("1")));
        assert!(!flag(None));
    }

    /// Expect pages below 1 and garbage to fall back to page 1
    #[test]
    fn page_defaults_to_one() {
        assert_eq!(page(None), 1);
        assert_eq!(page(Some("0")), 1);
        assert_eq!(page(Some("-3")), 1);
        assert_eq!(page(Some("abc")), 1);
        assert_eq!(page(Some("4")), 4);
    }

    /// Expect number lists to reject non-numeric elements
    #[test]
    fn number_list_rejects_garbage() {
        assert_eq!(number_list::<i32>("id", Some("1, 2")).unwrap(), Some(vec![1, 2]));
        assert!(number_list::<i32>("id", Some("1,x")).is_err());
        assert_eq!(number_list::<i32>("id", None).unwrap(), None);
    }

    /// Expect LIKE wildcards and the escape character to be escaped
    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("a.b"), "a.b");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    /// Expect minimum pad sizes to expand to every larger size
    #[test]
    fn pads_at_least_expands_upwards() {
        assert_eq!(pads_at_least("l"), vec!["l"]);
        assert_eq!(pads_at_least("M"), vec!["m", "l"]);
        assert_eq!(pads_at_least("s"), vec!["s", "m", "l"]);
        assert_eq!(pads_at_least("x"), vec!["s", "m", "l"]);
    }
}
