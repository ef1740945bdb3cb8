//! Immutable HTTP request values.

use std::any::Any;
use std::collections::HashMap;
use serde::de::DeserializeOwned;

use crate::dispatch::Error;
use crate::http::{Body, Context, HeaderMap, Params};
use crate::parser::{HttpVersion, Method};

/// Represents an HTTP request as it travels through a handler chain.
///
/// A request is never changed in place. Middleware that derives something from it returns
/// a new request built with one of the `with_*` methods, usually [`HttpRequest::with_context`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    version: HttpVersion,
    /// Path as received (still percent-encoded), relative to the router currently handling
    /// the request
    path: String,
    /// The part of the path consumed by enclosing mounts
    base_path: String,
    /// Raw query string, without the leading `?`
    query: String,
    headers: HeaderMap,
    params: Params,
    context: Context,
    body: Body,
}

impl HttpRequest {
    /// Create a new HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `target` - The request target; anything after the first `?` becomes the query string
    ///
    /// # Returns
    ///
    /// A new HTTP request with no headers and an empty body
    pub fn new(method: Method, target: impl AsRef<str>) -> Self {
        let target = target.as_ref();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, query),
            None => (target, ""),
        };

        Self {
            method,
            version: HttpVersion::Http11,
            path: path.to_string(),
            base_path: String::new(),
            query: query.to_string(),
            headers: HeaderMap::new(),
            params: Params::new(),
            context: Context::new(),
            body: Body::empty(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn version(&self) -> HttpVersion {
        self.version
    }

    /// The path as seen by the current router, with any mount prefix removed.
    ///
    /// The path is kept percent-encoded so an encoded `/` is not mistaken for a separator.
    /// Route matching decodes each segment; use [`HttpRequest::param`] for decoded values.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The prefix consumed by the mounts this request passed through.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The full path as received from the client.
    pub fn original_path(&self) -> String {
        if self.base_path.is_empty() {
            return self.path.clone();
        }
        match self.path.as_str() {
            "/" => self.base_path.clone(),
            path => format!("{base}{path}", base = self.base_path),
        }
    }

    /// The raw query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get a decoded query parameter value.
    ///
    /// When the parameter appears more than once, the first value wins.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| decode_query(key) == name)
            .map(|(_, value)| decode_query(value))
    }

    /// Get every query parameter, decoded. Later duplicates are dropped.
    pub fn query_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        for pair in self.query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.entry(decode_query(key)).or_insert_with(|| decode_query(value));
        }
        params
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the first value of a header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Get every value of a header.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers.get_all(name)
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// Get a path parameter bound by route matching.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Check if the request has a JSON body.
    pub fn is_json(&self) -> bool {
        self.header("Content-Type")
            .map(|content_type| content_type.starts_with("application/json"))
            .unwrap_or(false)
    }

    /// Parse the request body as JSON.
    ///
    /// Fails with a validation error when the content type is not JSON or the body does not
    /// deserialize into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::Validation(
                "expected Content-Type: application/json".to_string(),
            ));
        }
        serde_json::from_slice(self.body.as_bytes())
            .map_err(|e| Error::Validation(format!("invalid JSON body: {e}")))
    }

    pub fn with_version(mut self, version: HttpVersion) -> Self {
        self.version = version;
        self
    }

    /// Replace every value of a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the whole header map.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// Bind a path parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Store a value in the request context.
    pub fn with_context<T>(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        self.context = self.context.with(key, value);
        self
    }

    /// Overlay freshly matched parameters on the ones bound upstream.
    pub(crate) fn with_params(mut self, params: &Params) -> Self {
        if !params.is_empty() {
            self.params = self.params.merged(params);
        }
        self
    }

    /// Move `consumed` from the front of the path onto the base path.
    pub(crate) fn nested(mut self, consumed: &str, remainder: String) -> Self {
        self.base_path.push_str(consumed);
        self.path = remainder;
        self
    }

    /// Put back the path a mount saw before nesting.
    pub(crate) fn with_location(mut self, base_path: String, path: String) -> Self {
        self.base_path = base_path;
        self.path = path;
        self
    }
}

fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn decode_query(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}
