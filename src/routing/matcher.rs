//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse and validate path patterns (`/overview`, `/items/{id}`)
//! - Match request paths against patterns, capturing parameters
//! - Join a mount prefix with a child pattern
//!
//! # Design Decisions
//! - Path matching is exact and case-sensitive (no trailing-slash folding)
//! - A parameter matches exactly one non-empty segment
//! - Parameter names do not distinguish patterns: `/items/{id}` and
//!   `/items/{key}` have the same shape and therefore conflict
//! - No regex, no wildcards

use std::fmt;

use crate::routing::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A validated path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern. It must be non-empty and begin with `/`.
    ///
    /// The root pattern `/` has no segments. Every other segment must be
    /// non-empty, so `//` and trailing slashes are rejected.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        if pattern.is_empty() {
            return Err(RouteError::invalid(pattern, "pattern is empty"));
        }
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(RouteError::invalid(pattern, "pattern must begin with '/'"));
        };
        if rest.is_empty() {
            return Ok(Self { segments: Vec::new() });
        }

        let mut segments: Vec<Segment> = Vec::new();
        for raw in rest.split('/') {
            if raw.is_empty() {
                return Err(RouteError::invalid(pattern, "empty path segment"));
            }
            if raw.contains(['?', '#']) {
                return Err(RouteError::invalid(pattern, "query or fragment in pattern"));
            }

            if let Some(name) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(RouteError::invalid(pattern, "invalid parameter name"));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                    return Err(RouteError::invalid(pattern, "duplicate parameter name"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if raw.contains(['{', '}']) {
                return Err(RouteError::invalid(
                    pattern,
                    "braces must enclose a whole segment",
                ));
            } else {
                segments.push(Segment::Literal(raw.to_string()));
            }
        }

        Ok(Self { segments })
    }

    /// Prefix `child` with `self`. A root child yields the prefix itself.
    pub fn join(&self, child: &PathPattern) -> Result<PathPattern, RouteError> {
        let mut segments = self.segments.clone();
        for segment in &child.segments {
            if let Segment::Param(name) = segment {
                if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                    return Err(RouteError::invalid(
                        &format!("{}{}", self, child),
                        "duplicate parameter name",
                    ));
                }
            }
            segments.push(segment.clone());
        }
        Ok(PathPattern { segments })
    }

    /// True if both patterns match exactly the same set of paths.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// True if `self` is more specific than `other`: at the first position
    /// where they differ in kind, `self` has a literal and `other` a
    /// parameter.
    pub fn outranks(&self, other: &PathPattern) -> bool {
        for pair in self.segments.iter().zip(&other.segments) {
            match pair {
                (Segment::Literal(_), Segment::Param(_)) => return true,
                (Segment::Param(_), Segment::Literal(_)) => return false,
                _ => {}
            }
        }
        false
    }

    /// Match a request path, returning captured parameters on success.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;
        if rest.is_empty() {
            return self.segments.is_empty().then(PathParams::default);
        }

        let mut params = PathParams::default();
        let mut parts = rest.split('/');
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.0.push((name.clone(), part.to_string()));
                }
                _ => return None,
            }
        }

        // Leftover segments mean the path is longer than the pattern.
        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => write!(f, "/{}", lit)?,
                Segment::Param(name) => write!(f, "/{{{}}}", name)?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for PathPattern {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathPattern::parse(s)
    }
}

/// Parameters captured from the request path, in pattern order.
///
/// Inserted into the request extensions before the handler runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
