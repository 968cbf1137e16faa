//! Response wrapper that preserves both decoded data and raw response details.
//!
//! Every operation returns a [`Response`] holding the already unwrapped value
//! along with the status, headers, latency and raw body of the HTTP exchange.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful, decoded response.
///
/// `Response<T>` dereferences to `T`, so the decoded value can be used
/// directly.
///
/// # Examples
///
/// ```no_run
/// use redwire::{Client, params::{ListingParams, Sort}};
///
/// # async fn example() -> Result<(), redwire::Error> {
/// let client = Client::builder()
///     .user_agent("linux:redwire-example:v0.1.0 (by /u/example)")?
///     .access_token("token")?
///     .build()?;
///
/// let page = client.subreddit_listing("rust", Sort::Hot, &ListingParams::new()).await?;
///
/// for link in page.iter() {
///     println!("{:?}", link.title);
/// }
/// println!("Request took {:?}", page.latency);
///
/// // Reddit reports remaining quota in headers.
/// println!("Remaining: {:?}", page.header("x-ratelimit-remaining"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response data.
    pub data: T,

    /// The raw response body as a string.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was received.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type using the provided function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use redwire::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     42,
    ///     "42".to_string(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(100),
    /// );
    ///
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns a reference to a header value by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use redwire::Response;
    /// # use http::{HeaderMap, StatusCode, HeaderValue};
    /// # use std::time::Duration;
    /// let mut headers = HeaderMap::new();
    /// headers.insert("x-ratelimit-remaining", HeaderValue::from_static("599.0"));
    ///
    /// let response = Response::new(
    ///     (),
    ///     String::new(),
    ///     StatusCode::OK,
    ///     headers,
    ///     Duration::from_millis(100),
    /// );
    ///
    /// assert_eq!(response.header("x-ratelimit-remaining"), Some("599.0"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Consumes the response and returns the decoded data.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
