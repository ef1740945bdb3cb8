//! Path patterns: compilation and matching.
//!
//! A pattern is a `/`-delimited list of segments:
//!
//! - literal segments match themselves exactly (case-sensitive),
//! - `:name` binds one non-empty path segment under `name`,
//! - `*` or `*name`, allowed only as the last segment, binds the rest of the path
//!   (zero or more segments) under [`WILDCARD`] or `name`.
//!
//! Matching is positional. Apart from a trailing wildcard, a pattern only matches paths
//! with exactly as many segments as it has.
//!
//! Paths are split on `/` before anything is percent-decoded, so `%2F` stays inside its
//! segment. Literals are compared with, and parameters bound to, the decoded segment.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::http::Params;
use crate::router::config::TrailingSlash;
use crate::router::error::Error;

/// Name under which an anonymous `*` wildcard stores the rest of the path.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard(String),
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

/// A path split into segments, remembering whether it ended with `/`.
struct Split<'a> {
    segments: Vec<&'a str>,
    trailing_slash: bool,
}

fn split(path: &str) -> Split<'_> {
    let body = path.strip_prefix('/').unwrap_or(path);
    let (body, trailing_slash) = match body.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (body, false),
    };
    let segments = if body.is_empty() {
        Vec::new()
    } else {
        body.split('/').collect()
    };
    Split {
        segments,
        trailing_slash,
    }
}

fn decode(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

impl Pattern {
    /// Compile a route pattern.
    ///
    /// # Errors
    ///
    /// Fails when the pattern does not start with `/`, has an unnamed or duplicated
    /// parameter, or has a wildcard anywhere but the last segment.
    pub fn compile(pattern: &str) -> Result<Self, Error> {
        if !pattern.starts_with('/') {
            return Err(Error::MissingLeadingSlash(pattern.to_string()));
        }

        let split = split(pattern);
        let last = split.segments.len().saturating_sub(1);
        let mut seen = HashSet::new();
        let mut segments = Vec::with_capacity(split.segments.len());

        for (index, raw) in split.segments.iter().enumerate() {
            let segment = if let Some(name) = raw.strip_prefix(':') {
                if name.is_empty() {
                    return Err(Error::EmptyParamName(pattern.to_string()));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = raw.strip_prefix('*') {
                if index != last || split.trailing_slash {
                    return Err(Error::WildcardNotLast(pattern.to_string()));
                }
                let name = if name.is_empty() { WILDCARD } else { name };
                Segment::Wildcard(name.to_string())
            } else {
                Segment::Literal(raw.to_string())
            };

            if let Segment::Param(name) | Segment::Wildcard(name) = &segment {
                if !seen.insert(name.clone()) {
                    return Err(Error::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.clone(),
                    });
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            trailing_slash: split.trailing_slash,
        })
    }

    /// Compile a mount prefix. Prefixes may bind parameters but cannot use wildcards.
    pub fn compile_prefix(prefix: &str) -> Result<Self, Error> {
        let pattern = Self::compile(prefix)?;
        if pattern.has_wildcard() {
            return Err(Error::WildcardInPrefix(prefix.to_string()));
        }
        Ok(pattern)
    }

    /// The pattern as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names this pattern binds, in segment order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) | Segment::Wildcard(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard(_)))
    }

    /// Match a whole path against the pattern.
    ///
    /// Returns the bound parameters, or `None` when the path does not match.
    pub fn matches(&self, path: &str, trailing_slash: TrailingSlash) -> Option<Params> {
        let split = split(path);
        if trailing_slash == TrailingSlash::Strict
            && !self.has_wildcard()
            && split.trailing_slash != self.trailing_slash
        {
            return None;
        }

        let mut params = Params::new();
        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard(name) => {
                    let rest = &split.segments[index..];
                    let mut value = rest.iter().map(|raw| decode(raw)).collect::<Vec<_>>().join("/");
                    // The wildcard owns the end of the path, trailing slash included
                    if split.trailing_slash && !rest.is_empty() {
                        value.push('/');
                    }
                    params.insert(name.as_str(), value);
                    return Some(params);
                }
                Segment::Literal(literal) => match split.segments.get(index) {
                    Some(raw) if decode(raw) == literal.as_str() => {}
                    _ => return None,
                },
                Segment::Param(name) => match split.segments.get(index) {
                    Some(raw) if !raw.is_empty() => params.insert(name.as_str(), decode(raw)),
                    _ => return None,
                },
            }
        }

        (split.segments.len() == self.segments.len()).then_some(params)
    }

    /// Match the leading segments of `path`, as a mount prefix does.
    ///
    /// Only whole segments are consumed, so `/api` matches `/api/users` but not `/apiary`.
    /// On success returns the bindings, the consumed prefix and the remainder of the path,
    /// which always starts with `/`. Prefix and remainder keep their percent-encoding.
    pub fn match_prefix(&self, path: &str) -> Option<(Params, String, String)> {
        let split = split(path);
        let count = self.segments.len();
        if split.segments.len() < count {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(&split.segments) {
            match segment {
                Segment::Literal(literal) if decode(value) == literal.as_str() => {}
                Segment::Param(name) if !value.is_empty() => params.insert(name.as_str(), decode(value)),
                _ => return None,
            }
        }

        let consumed = if count == 0 {
            String::new()
        } else {
            format!("/{}", split.segments[..count].join("/"))
        };
        let rest = &split.segments[count..];
        let remainder = if rest.is_empty() {
            "/".to_string()
        } else if split.trailing_slash {
            format!("/{}/", rest.join("/"))
        } else {
            format!("/{}", rest.join("/"))
        };

        Some((params, consumed, remainder))
    }

    /// Substitute bound values back into the pattern, percent-encoding them.
    ///
    /// Wildcard values are encoded segment by segment so their `/` separators survive.
    /// Returns `None` if a parameter the pattern needs is missing from `params`.
    pub fn render(&self, params: &Params) -> Option<String> {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => {
                    path.push('/');
                    path.push_str(literal);
                }
                Segment::Param(name) => {
                    path.push('/');
                    path.push_str(&urlencoding::encode(params.get(name)?));
                }
                Segment::Wildcard(name) => {
                    let rest = params.get(name)?;
                    if !rest.is_empty() {
                        let encoded: Vec<_> = rest.split('/').map(urlencoding::encode).collect();
                        path.push('/');
                        path.push_str(&encoded.join("/"));
                    }
                }
            }
        }

        if path.is_empty() || self.trailing_slash {
            path.push('/');
        }
        Some(path)
    }
}
