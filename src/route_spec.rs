//! Parser for the compact route-spec mini-language.
//!
//! ```text
//! [METHOD ]PATTERN ; HANDLER [; MW1, MW2, ...]
//! ```
//!
//! The parser is a single linear pass. Handler and middleware identifiers are opaque
//! names; they are only checked for being non-empty once trimmed.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// One parsed route-spec string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    /// HTTP method token, empty when the route matches every method.
    pub method: String,
    /// URL pattern, relative to the group's base.
    pub pattern: String,
    /// Handler expression, emitted verbatim.
    pub handler: String,
    /// Path-specific middlewares, innermost first.
    pub middlewares: Vec<String>,
}

/// Grammar violations reported by [`ParsedPath::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteSpecError {
    #[error("it should contain at least pattern and handler parts")]
    MissingHandler,
    #[error("middlewares should be comma separated")]
    TooManyParts,
    #[error("pattern has more than 2 parts")]
    PatternTooLong,
    #[error("pattern is empty")]
    MissingPattern,
    #[error("handler is empty")]
    EmptyHandler,
    #[error("middleware list contains an empty entry")]
    EmptyMiddleware,
}

impl ParsedPath {
    /// Parse one route-spec string.
    pub fn parse(spec: &str) -> Result<Self, RouteSpecError> {
        let parts: Vec<&str> = spec.split(';').collect();
        if parts.len() < 2 {
            return Err(RouteSpecError::MissingHandler);
        }
        if parts.len() > 3 {
            return Err(RouteSpecError::TooManyParts);
        }

        let tokens: Vec<&str> = parts[0]
            .trim()
            .split(' ')
            .filter(|t| !t.is_empty())
            .collect();
        let (method, pattern) = match tokens.as_slice() {
            [] => return Err(RouteSpecError::MissingPattern),
            [pattern] => ("", *pattern),
            [method, pattern] => (*method, *pattern),
            _ => return Err(RouteSpecError::PatternTooLong),
        };

        let handler = parts[1].trim();
        if handler.is_empty() {
            return Err(RouteSpecError::EmptyHandler);
        }

        let middlewares = match parts.get(2) {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .map(|mw| {
                    if mw.is_empty() {
                        Err(RouteSpecError::EmptyMiddleware)
                    } else {
                        Ok(mw.to_string())
                    }
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(ParsedPath {
            method: method.to_string(),
            pattern: pattern.to_string(),
            handler: handler.to_string(),
            middlewares,
        })
    }
}

impl FromStr for ParsedPath {
    type Err = RouteSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedPath::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_spec() {
        let parsed = ParsedPath::parse("GET /api/v1/pet ; ListPets ; Auth, Log").unwrap();
        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.pattern, "/api/v1/pet");
        assert_eq!(parsed.handler, "ListPets");
        assert_eq!(parsed.middlewares, vec!["Auth", "Log"]);
    }

    #[test]
    fn test_pattern_without_method() {
        let parsed: ParsedPath = "/api/v1/pet ; ListPets".parse().unwrap();
        assert_eq!(parsed.method, "");
        assert_eq!(parsed.pattern, "/api/v1/pet");
        assert_eq!(parsed.handler, "ListPets");
        assert!(parsed.middlewares.is_empty());
    }

    #[test]
    fn test_extra_spaces_between_method_and_pattern() {
        let parsed = ParsedPath::parse("  PUT    /pet/{id}  ;handlers::update(ctrl)").unwrap();
        assert_eq!(parsed.method, "PUT");
        assert_eq!(parsed.pattern, "/pet/{id}");
        assert_eq!(parsed.handler, "handlers::update(ctrl)");
    }

    #[test]
    fn test_handler_expression_kept_verbatim() {
        let parsed = ParsedPath::parse("/x ; handlers::get(ctrl, \"a b\") ; mw(\"k\")").unwrap();
        assert_eq!(parsed.handler, "handlers::get(ctrl, \"a b\")");
        assert_eq!(parsed.middlewares, vec!["mw(\"k\")"]);
    }

    #[test]
    fn test_four_sections_is_too_many() {
        let err = ParsedPath::parse("GET /x ; H ; A ; B").unwrap_err();
        assert_eq!(err, RouteSpecError::TooManyParts);
        assert_eq!(err.to_string(), "middlewares should be comma separated");
    }

    #[test]
    fn test_three_pattern_tokens_rejected() {
        let err = ParsedPath::parse("GET POST /x ; H").unwrap_err();
        assert_eq!(err, RouteSpecError::PatternTooLong);
        assert_eq!(err.to_string(), "pattern has more than 2 parts");
    }

    #[test]
    fn test_missing_handler_section() {
        assert_eq!(
            ParsedPath::parse("GET /x").unwrap_err(),
            RouteSpecError::MissingHandler
        );
    }

    #[test]
    fn test_empty_sections_rejected() {
        assert_eq!(
            ParsedPath::parse("  ; H").unwrap_err(),
            RouteSpecError::MissingPattern
        );
        assert_eq!(
            ParsedPath::parse("/x ;   ").unwrap_err(),
            RouteSpecError::EmptyHandler
        );
        assert_eq!(
            ParsedPath::parse("/x ; H ; a,,b").unwrap_err(),
            RouteSpecError::EmptyMiddleware
        );
        assert_eq!(
            ParsedPath::parse("/x ; H ; a,").unwrap_err(),
            RouteSpecError::EmptyMiddleware
        );
    }
}
