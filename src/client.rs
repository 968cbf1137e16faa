//! The HTTP transport for Reddit API calls.
//!
//! The [`Client`] type sends requests and decodes their responses. Use
//! [`ClientBuilder`] to configure and create clients; the per-endpoint
//! operations live in the `api` module as methods on [`Client`].

use crate::{
    endpoint::Host,
    envelope::{self, DecodeError},
    metadata::{RequestBody, RequestMetadata},
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Default base URL for OAuth-authenticated endpoints.
pub const DEFAULT_OAUTH_BASE_URL: &str = "https://oauth.reddit.com";

/// Default base URL for endpoints only served by the web host.
pub const DEFAULT_WEB_BASE_URL: &str = "https://www.reddit.com";

/// A client for the Reddit API.
///
/// The client is designed to be reused across multiple requests. It maintains
/// a connection pool and configuration that applies to all requests, and is
/// cheap to clone.
///
/// # Examples
///
/// ```no_run
/// use redwire::Client;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), redwire::Error> {
/// let client = Client::builder()
///     .user_agent("linux:redwire-example:v0.1.0 (by /u/example)")?
///     .access_token("token")?
///     .timeout(Duration::from_secs(30))
///     .build()?;
///
/// let me = client.me().await?;
/// println!("Logged in as {:?}", me.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    oauth_base_url: Url,
    web_base_url: Url,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    raw_json: bool,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Sends a request and decodes the JSON body with `decode`.
    ///
    /// This is what every operation goes through. It can also be used to call
    /// endpoints this crate has no typed operation for.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use redwire::{Client, Kind, Subreddit};
    /// use redwire::endpoints;
    /// use redwire::envelope::{decode_thing, of_kind};
    /// use redwire::metadata::RequestMetadata;
    ///
    /// # async fn example(client: Client) -> Result<(), redwire::Error> {
    /// let request = RequestMetadata::for_endpoint(&endpoints::GET_R_SUBREDDIT_ABOUT, &[&"rust"])?;
    /// let about = client
    ///     .call(request, |json| decode_thing(json, of_kind::<Subreddit>(Kind::Subreddit)))
    ///     .await?;
    /// println!("{:?} subscribers", about.subscribers);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<T, F>(&self, metadata: RequestMetadata, decode: F) -> Result<Response<T>>
    where
        F: FnOnce(Value) -> std::result::Result<T, DecodeError>,
    {
        let response = self.execute(&metadata).await?;

        let json = match envelope::parse(&response.raw_body) {
            Ok(json) => json,
            Err(e) => return Err(decode_failed(&metadata, e, response)),
        };
        let response = reject_api_errors(&metadata, &json, response)?;

        match decode(json) {
            Ok(data) => Ok(response.map(|()| data)),
            Err(e) => Err(decode_failed(&metadata, e, response)),
        }
    }

    /// Sends a request and returns a successful response undecoded; the body
    /// is in [`Response::raw_body`].
    ///
    /// # Errors
    ///
    /// Non-2xx responses become [`Error::HttpError`]; connection problems and
    /// timeouts become [`Error::Network`] and [`Error::Timeout`].
    pub async fn execute(&self, metadata: &RequestMetadata) -> Result<Response<()>> {
        let url = self.url_for(metadata)?;
        let start_time = Instant::now();

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let mut request = self.inner.http_client.request(metadata.method.clone(), url);

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        request = match &metadata.body {
            Some(RequestBody::Form(fields)) => request.form(fields),
            Some(RequestBody::Json(json)) => request.json(json),
            None => request,
        };

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let raw_body = response.text().await.map_err(transport_error)?;
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            "Received HTTP response"
        );

        if !status.is_success() {
            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Client error (4xx)"
                );
            } else if status.is_server_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Server error (5xx)"
                );
            }

            return Err(Error::HttpError {
                status,
                raw_response: raw_body,
                headers,
            });
        }

        Ok(Response::new((), raw_body, status, headers, latency))
    }

    /// Builds the full URL for a request: the host's base URL, the resolved
    /// path segments (percent-encoded) and the query string.
    pub fn url_for(&self, metadata: &RequestMetadata) -> Result<Url> {
        let mut url = match metadata.host {
            Host::OAuth => self.inner.oauth_base_url.clone(),
            Host::Web => self.inner.web_base_url.clone(),
        };

        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend(metadata.path.segments());
            }
            Err(()) => {
                return Err(Error::ConfigurationError(
                    "Base URL cannot have a path".to_string(),
                ))
            }
        }

        let mut query: Vec<(&str, &str)> = metadata
            .query_params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        if self.inner.raw_json && !metadata.query_params.contains_key("raw_json") {
            query.push(("raw_json", "1"));
        }
        if !query.is_empty() {
            query.sort_unstable();
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

/// Turns a 2xx response whose body lists `{"json": {"errors": [...]}}` into
/// [`Error::Rejected`].
pub(crate) fn reject_api_errors(
    metadata: &RequestMetadata,
    json: &Value,
    response: Response<()>,
) -> Result<Response<()>> {
    let errors = envelope::api_errors(json);
    if errors.is_empty() {
        return Ok(response);
    }

    tracing::error!(
        method = %metadata.method,
        path = %metadata.path,
        raw_response = %response.raw_body,
        "Request rejected"
    );

    Err(Error::Rejected {
        errors,
        raw_response: response.raw_body,
        status: response.status,
    })
}

fn decode_failed(metadata: &RequestMetadata, e: DecodeError, response: Response<()>) -> Error {
    tracing::error!(
        error = %e,
        method = %metadata.method,
        path = %metadata.path,
        raw_response = %response.raw_body,
        "Failed to decode response"
    );

    Error::DecodeFailed {
        source: e,
        raw_response: response.raw_body,
        status: response.status,
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Network(e)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// A user agent is required; Reddit throttles or blocks generic ones. The
/// recommended format is `platform:app-id:version (by /u/username)`.
///
/// # Examples
///
/// ```no_run
/// use redwire::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), redwire::Error> {
/// let client = ClientBuilder::new()
///     .user_agent("linux:redwire-example:v0.1.0 (by /u/example)")?
///     .access_token("token")?
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    oauth_base_url: Option<Url>,
    web_base_url: Option<Url>,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
    raw_json: bool,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            oauth_base_url: None,
            web_base_url: None,
            default_headers: HeaderMap::new(),
            timeout: None,
            raw_json: true,
        }
    }

    /// Overrides the base URL of the OAuth API host.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn oauth_base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.oauth_base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Overrides the base URL of the web host.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn web_base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.web_base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Sets the bearer token sent with every request.
    ///
    /// Obtaining and refreshing the token is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value.
    pub fn access_token(self, token: impl AsRef<str>) -> Result<Self> {
        self.default_header(header::AUTHORIZATION, format!("bearer {}", token.as_ref()))
    }

    /// Sets the `User-Agent` sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the user agent is not a valid header value.
    pub fn user_agent(self, user_agent: impl AsRef<str>) -> Result<Self> {
        self.default_header(header::USER_AGENT, user_agent)
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether to send `raw_json=1` so Reddit skips HTML-escaping text
    /// fields. Enabled by default.
    pub fn raw_json(mut self, enabled: bool) -> Self {
        self.raw_json = enabled;
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if no user agent was provided or if the client
    /// configuration is invalid.
    pub fn build(self) -> Result<Client> {
        if !self.default_headers.contains_key(header::USER_AGENT) {
            return Err(Error::ConfigurationError(
                "User agent is required".to_string(),
            ));
        }

        let oauth_base_url = match self.oauth_base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_OAUTH_BASE_URL)?,
        };
        let web_base_url = match self.web_base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_WEB_BASE_URL)?,
        };

        for url in [&oauth_base_url, &web_base_url] {
            if url.cannot_be_a_base() {
                return Err(Error::ConfigurationError(format!(
                    "{url} cannot be used as a base URL"
                )));
            }
        }

        let http_client = reqwest::Client::builder().build().map_err(|e| {
            Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                oauth_base_url,
                web_base_url,
                default_headers: self.default_headers,
                timeout: self.timeout,
                raw_json: self.raw_json,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
