//! Wildcard token table.
//!
//! Route patterns embed typed wildcard tokens; each token stands for exactly
//! one regex fragment, and every fragment is a capturing group. Captures
//! become the positional parameters handed to the handler, left to right.
//!
//! The table is total and fixed for the lifetime of the process. Routes are
//! static configuration; there is no runtime extension point.

/// The token-to-fragment table.
///
/// | token | matches |
/// |---|---|
/// | `(:num)` | optional leading minus, one or more digits |
/// | `(:alpha)` | one or more ASCII letters |
/// | `(:alphanum)` | one or more ASCII letters or digits |
/// | `(:any)` | one segment of letters, digits and common punctuation |
/// | `(:all)` | anything, including the empty string |
pub const WILDCARDS: [(&str, &str); 5] = [
    ("(:num)", r"(-?\d+)"),
    ("(:alpha)", "([a-zA-Z]+)"),
    ("(:alphanum)", "([a-zA-Z0-9]+)"),
    ("(:any)", r"([a-zA-Z0-9.\-_%=+@()]+)"),
    ("(:all)", "(.*)"),
];

/// Returns the regex fragment for a wildcard token, or `None` for anything
/// that is not a token.
pub fn fragment(token: &str) -> Option<&'static str> {
    WILDCARDS
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|(_, fragment)| *fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve() {
        assert_eq!(fragment("(:num)"), Some(r"(-?\d+)"));
        assert_eq!(fragment("(:all)"), Some("(.*)"));
    }

    #[test]
    fn non_tokens_do_not() {
        assert_eq!(fragment("(:nope)"), None);
        assert_eq!(fragment("num"), None);
    }

    #[test]
    fn every_fragment_is_a_capture_group() {
        for (_, fragment) in WILDCARDS {
            assert!(fragment.starts_with('(') && fragment.ends_with(')'));
        }
    }
}
