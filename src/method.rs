//! HTTP method as a typed enum.
//!
//! Routes declare their method from the RFC 9110 set; GET is the default.
//! The request side stays a plain string so that unknown verbs still flow
//! through the matcher's method-conflict path instead of being rejected
//! before routing.

use std::fmt;
use std::str::FromStr;

/// A known HTTP method.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    #[default]
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
        }
    }
}

/// Parses a method name. Case-insensitive: route declarations are trusted
/// configuration, not wire input.
impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CONNECT" => Ok(Self::Connect),
            "DELETE"  => Ok(Self::Delete),
            "GET"     => Ok(Self::Get),
            "HEAD"    => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "PATCH"   => Ok(Self::Patch),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "TRACE"   => Ok(Self::Trace),
            _         => Err(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_the_default() {
        assert_eq!(Method::default(), Method::Get);
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("delete".parse(), Ok(Method::Delete));
        assert_eq!("Post".parse(), Ok(Method::Post));
        assert_eq!("GET".parse(), Ok(Method::Get));
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        assert_eq!("BREW".parse::<Method>(), Err(()));
    }
}
