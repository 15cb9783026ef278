//! Pattern compilation.
//!
//! A route pattern is a literal path with zero or more wildcard tokens.
//! Compilation substitutes each token for its regex fragment and anchors the
//! result with `^` and `$`, so a pattern only ever matches a whole path.
//! The `regex` crate matches Unicode by default, which covers literal
//! pattern text outside the ASCII token fragments.
//!
//! The literal parts of a pattern are not escaped: a pattern author must not
//! introduce regex syntax outside of wildcard tokens.

use regex::Regex;

use crate::wildcard;

/// Compiles a route pattern into an anchored regex.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = pattern.to_owned();
    for (token, fragment) in wildcard::WILDCARDS {
        source = source.replace(token, fragment);
    }
    Regex::new(&format!("^{source}$"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns_match_whole_paths_only() {
        let regex = compile("/api").unwrap();
        assert!(regex.is_match("/api"));
        assert!(!regex.is_match("/api/extra"));
        assert!(!regex.is_match("prefix/api"));
    }

    #[test]
    fn numeric_token_accepts_signed_integers() {
        let regex = compile("/widgets/(:num)").unwrap();
        assert!(regex.is_match("/widgets/42"));
        assert!(regex.is_match("/widgets/-7"));
        assert!(!regex.is_match("/widgets/abc"));
        assert!(!regex.is_match("/widgets/"));
    }

    #[test]
    fn tokens_capture_left_to_right() {
        let regex = compile("/api/(:any)/(:num)").unwrap();
        let captures = regex.captures("/api/user/7").unwrap();
        assert_eq!(&captures[1], "user");
        assert_eq!(&captures[2], "7");
    }

    #[test]
    fn any_token_covers_segment_punctuation() {
        let regex = compile("/files/(:any)").unwrap();
        assert!(regex.is_match("/files/report-v1.2_%40=+@(final)"));
        assert!(!regex.is_match("/files/a/b"));
    }

    #[test]
    fn all_token_matches_the_empty_string() {
        let regex = compile("/files/(:all)").unwrap();
        let captures = regex.captures("/files/").unwrap();
        assert_eq!(&captures[1], "");

        let captures = regex.captures("/files/a/b/c").unwrap();
        assert_eq!(&captures[1], "a/b/c");
    }

    #[test]
    fn stray_regex_syntax_fails_compilation() {
        assert!(compile("/broken/((").is_err());
    }
}
