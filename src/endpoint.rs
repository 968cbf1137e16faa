//! Endpoint path templates and placeholder substitution.
//!
//! An [`Endpoint`] describes the shape of one REST path as an ordered list of
//! segments. A segment written as `{name}` is a placeholder; every other
//! segment is copied verbatim. Resolving an endpoint substitutes placeholders
//! with caller-supplied arguments strictly in left-to-right order, so the
//! position of an argument, not its name, decides where it lands.
//!
//! # Examples
//!
//! ```
//! use redwire::endpoint::{Endpoint, Host};
//! use http::Method;
//!
//! const GET_COMMENTS: Endpoint =
//!     Endpoint::new(Method::GET, Host::OAuth, &["r", "{subreddit}", "comments", "{article}"]);
//!
//! let path = GET_COMMENTS.resolve(&[&"bananapics", &"abc123"]);
//! assert_eq!(path.to_string(), "/r/bananapics/comments/abc123");
//!
//! // A missing argument is reported instead of producing a half-built path.
//! assert!(GET_COMMENTS.try_resolve(&[&"bananapics"]).is_err());
//!
//! // So is one that would collapse when the URL is normalized.
//! assert!(GET_COMMENTS.try_resolve(&[&"..", &"abc123"]).is_err());
//! ```

use http::Method;
use std::fmt;

/// The host an endpoint must be sent to.
///
/// Almost every endpoint lives on the OAuth API host. A few are only served
/// by the plain web host and have to be routed there explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Host {
    /// `https://oauth.reddit.com` unless overridden on the client builder.
    #[default]
    OAuth,
    /// `https://www.reddit.com` unless overridden on the client builder.
    Web,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segments {
    Static(&'static [&'static str]),
    Owned(Vec<String>),
}

/// An immutable REST path template bound to an HTTP method and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    host: Host,
    segments: Segments,
}

/// Why an [`Endpoint`] could not be resolved into a path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The number of arguments does not match the number of placeholders.
    #[error("endpoint {template} expects {expected} path arguments, {supplied} supplied")]
    Arity {
        /// The template that was being resolved, e.g. `GET /r/{subreddit}/about`.
        template: String,
        /// Number of placeholders in the template.
        expected: usize,
        /// Number of arguments the caller passed.
        supplied: usize,
    },

    /// An argument would not survive as a single path segment: it is empty,
    /// or it is `.` or `..`, which URL normalization removes.
    #[error("path argument {position} of endpoint {template} is {value:?}, which is not a valid path segment")]
    InvalidSegment {
        /// The template that was being resolved.
        template: String,
        /// Zero-based index of the offending argument.
        position: usize,
        /// The rendered argument.
        value: String,
    },
}

/// A fully substituted path, ready to be joined onto a base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(Vec<String>);

impl Endpoint {
    /// Creates a template from static segments.
    pub const fn new(method: Method, host: Host, segments: &'static [&'static str]) -> Self {
        Self {
            method,
            host,
            segments: Segments::Static(segments),
        }
    }

    /// Creates a template from owned segments, typically a parent's resolved path.
    pub fn from_segments(
        method: Method,
        host: Host,
        segments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            method,
            host,
            segments: Segments::Owned(segments.into_iter().map(Into::into).collect()),
        }
    }

    /// The HTTP method of this endpoint.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The host this endpoint is served from.
    pub fn host(&self) -> Host {
        self.host
    }

    /// Iterates over the raw segments, placeholders included.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let (statics, owned): (&[&str], &[String]) = match &self.segments {
            Segments::Static(segments) => (*segments, &[]),
            Segments::Owned(segments) => (&[], segments.as_slice()),
        };
        statics
            .iter()
            .copied()
            .chain(owned.iter().map(String::as_str))
    }

    /// Number of placeholder segments, i.e. the number of arguments
    /// [`resolve`](Self::resolve) expects.
    pub fn placeholders(&self) -> usize {
        self.segments().filter(|s| is_placeholder(s)).count()
    }

    /// Substitutes placeholders with `args` in left-to-right order.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Arity`] if `args.len()` differs from
    /// [`placeholders`](Self::placeholders), and
    /// [`ResolveError::InvalidSegment`] if an argument renders as an empty
    /// string, `.` or `..`.
    pub fn try_resolve(&self, args: &[&dyn fmt::Display]) -> Result<ResolvedPath, ResolveError> {
        let arity_error = || ResolveError::Arity {
            template: self.to_string(),
            expected: self.placeholders(),
            supplied: args.len(),
        };

        let mut remaining = args.iter().enumerate();
        let mut resolved = Vec::new();
        for segment in self.segments() {
            if is_placeholder(segment) {
                let (position, arg) = remaining.next().ok_or_else(arity_error)?;
                let value = arg.to_string();
                if matches!(value.as_str(), "" | "." | "..") {
                    return Err(ResolveError::InvalidSegment {
                        template: self.to_string(),
                        position,
                        value,
                    });
                }
                resolved.push(value);
            } else {
                resolved.push(segment.to_owned());
            }
        }

        if remaining.next().is_some() {
            return Err(arity_error());
        }
        Ok(ResolvedPath(resolved))
    }

    /// Substitutes placeholders with `args` in left-to-right order.
    ///
    /// # Panics
    ///
    /// Panics where [`try_resolve`](Self::try_resolve) would return an
    /// error. A mismatch means the wrong endpoint or the wrong arguments were
    /// chosen at the call site.
    pub fn resolve(&self, args: &[&dyn fmt::Display]) -> ResolvedPath {
        match self.try_resolve(args) {
            Ok(path) => path,
            Err(e) => panic!("{e}"),
        }
    }

    /// Builds a specialized template from this one.
    ///
    /// The parent is resolved with `args` and `tail` is appended. Passing a
    /// placeholder such as `"{subreddit}"` as an argument keeps that
    /// placeholder open in the derived template:
    ///
    /// ```
    /// use redwire::endpoint::{Endpoint, Host};
    /// use http::Method;
    ///
    /// const ABOUT_WHERE: Endpoint =
    ///     Endpoint::new(Method::GET, Host::OAuth, &["r", "{subreddit}", "about", "{where}"]);
    ///
    /// let banned = ABOUT_WHERE.derive(&[&"{subreddit}", &"banned"], &[]);
    /// assert_eq!(banned.to_string(), "GET /r/{subreddit}/about/banned");
    /// assert_eq!(banned.placeholders(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `args` cannot resolve the parent.
    pub fn derive(&self, args: &[&dyn fmt::Display], tail: &[&str]) -> Endpoint {
        let ResolvedPath(mut segments) = self.resolve(args);
        segments.extend(tail.iter().map(|s| (*s).to_owned()));
        Endpoint::from_segments(self.method.clone(), self.host, segments)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.method)?;
        for segment in self.segments() {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl ResolvedPath {
    /// The concrete segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Consumes the path and returns its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// `true` for segments of the form `{identifier}`.
pub fn is_placeholder(segment: &str) -> bool {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .is_some_and(|name| {
            !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
