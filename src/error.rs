//! Error types for Reddit API calls.
//!
//! Transport failures, HTTP failures, template misuse and decode failures
//! all surface through [`Error`]. Whenever a response body was received it
//! is kept on the error, so a failed decode can be inspected after the fact.

use http::{HeaderMap, StatusCode};

use crate::endpoint::ResolveError;
use crate::envelope::{ApiError, DecodeError};

/// The main error type for Reddit API calls.
///
/// # Examples
///
/// ```no_run
/// use redwire::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .user_agent("linux:redwire-example:v0.1.0 (by /u/example)")?
///     .access_token("token")?
///     .build()?;
///
/// match client.karma().await {
///     Ok(karma) => println!("{} subreddits", karma.len()),
///     Err(Error::DecodeFailed { raw_response, source, .. }) => {
///         eprintln!("Unexpected payload: {}", source);
///         eprintln!("Raw response: {}", raw_response);
///     }
///     Err(Error::HttpError { status, raw_response, .. }) => {
///         eprintln!("HTTP error {}: {}", status, raw_response);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred (connection failed, DNS lookup failed, etc.).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request timed out.
    ///
    /// This occurs when the request takes longer than the configured timeout duration.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be decoded into the expected value.
    ///
    /// # Fields
    ///
    /// * `source` - What went wrong while decoding
    /// * `raw_response` - The raw response body as a string
    /// * `status` - The HTTP status code of the response
    #[error("Failed to decode response (status {status}): {source}")]
    DecodeFailed {
        /// The decode failure
        #[source]
        source: DecodeError,
        /// The raw response body that failed to decode
        raw_response: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// The server returned a non-2xx HTTP status code.
    ///
    /// 401 usually means the access token is missing, expired or revoked;
    /// 403 means the token is valid but lacks the scope or permission.
    #[error("HTTP error {status}: {raw_response}")]
    HttpError {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        raw_response: String,
        /// The response headers
        headers: HeaderMap,
    },

    /// Reddit answered 2xx but listed errors in a `{"json": {"errors": [...]}}`
    /// body, e.g. when composing a message to a user that does not exist.
    #[error("Request rejected (status {status}): {}", join_api_errors(.errors))]
    Rejected {
        /// The errors Reddit reported, in order
        errors: Vec<ApiError>,
        /// The raw response body
        raw_response: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// An endpoint could not be resolved with the given path arguments.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Invalid configuration was provided.
    ///
    /// This indicates a problem with how the client or request was configured,
    /// such as a missing user agent or invalid header values.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failed to serialize the request body.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code if this error has one.
    ///
    /// Returns `Some(status)` for `HttpError`, `DecodeFailed` and `Rejected`
    /// errors, `None` for other error types.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpError { status, .. } => Some(*status),
            Error::DecodeFailed { status, .. } => Some(*status),
            Error::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::HttpError { raw_response, .. } => Some(raw_response),
            Error::DecodeFailed { raw_response, .. } => Some(raw_response),
            Error::Rejected { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns the decode failure if the response arrived but could not be decoded.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::DecodeFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns the errors Reddit listed in the body of a 2xx response.
    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Error::Rejected { errors, .. } => errors.as_slice(),
            _ => &[],
        }
    }

    /// Returns `true` if Reddit rejected the credentials (HTTP 401).
    ///
    /// Refreshing the token is up to the caller.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

fn join_api_errors(errors: &[ApiError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A specialized `Result` type for Reddit API calls.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
