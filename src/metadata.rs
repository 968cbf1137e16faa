//! Request metadata: everything needed to send one call to one endpoint.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::endpoint::{Endpoint, Host, ResolveError, ResolvedPath};

/// The body sent with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded`, used by most `POST /api/*` endpoints.
    Form(Vec<(String, String)>),
    /// `application/json`, used by `PATCH /api/v1/me/prefs`.
    Json(Value),
}

/// Metadata for an individual HTTP request.
///
/// Built from an [`Endpoint`] and its path arguments, then decorated with
/// query parameters, headers and a body.
///
/// # Examples
///
/// ```
/// use redwire::endpoints;
/// use redwire::metadata::RequestMetadata;
///
/// let request = RequestMetadata::for_endpoint(&endpoints::GET_USER_USERNAME_ABOUT, &[&"spez"])?
///     .with_query_param("sr_detail", "true");
/// assert_eq!(request.path.to_string(), "/user/spez/about");
/// # Ok::<(), redwire::endpoint::ResolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// Which base URL the path is joined onto.
    pub host: Host,

    /// The resolved path segments.
    pub path: ResolvedPath,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters for this request.
    pub query_params: HashMap<String, String>,

    /// Optional request body.
    pub body: Option<RequestBody>,
}

impl RequestMetadata {
    /// Resolves `endpoint` with `args` and takes its method and host.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if `args` does not fit the endpoint's
    /// placeholders.
    pub fn for_endpoint(
        endpoint: &Endpoint,
        args: &[&dyn fmt::Display],
    ) -> Result<Self, ResolveError> {
        Ok(Self {
            method: endpoint.method().clone(),
            host: endpoint.host(),
            path: endpoint.try_resolve(args)?,
            headers: HeaderMap::new(),
            query_params: HashMap::new(),
            body: None,
        })
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Adds multiple query parameters to the request.
    pub fn with_query_params(
        mut self,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.query_params.extend(params);
        self
    }

    /// Adds a form field, switching the body to a form if it was empty.
    pub fn with_form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let pair = (key.into(), value.into());
        match &mut self.body {
            Some(RequestBody::Form(fields)) => fields.push(pair),
            _ => self.body = Some(RequestBody::Form(vec![pair])),
        }
        self
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, crate::Error> {
        let json = serde_json::to_value(body)
            .map_err(|e| crate::Error::SerializationFailed(e.to_string()))?;
        self.body = Some(RequestBody::Json(json));
        Ok(self)
    }
}
