//! HTTP request description and query encoding

use crate::error::{Error, Result};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// A fully-resolved HTTP request.
///
/// Plain data: the URL already carries its encoded query and the body is
/// already serialized, so the request can be cloned and re-sent on retry.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl Request {
    /// Create a new request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute URL, including the encoded query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Serialized body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Set a header.
    ///
    /// # Panics
    /// Panics if the header name or value contains invalid characters.
    /// For fallible header setting, use [`try_header`](Self::try_header) instead.
    pub fn header(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key_str = key.into();
        let value_str = value.into();
        self.try_header(key_str.as_str(), value_str.as_str())
            .unwrap_or_else(|e| panic!("Invalid header '{}': {}", key_str, e))
    }

    /// Try to set a header, returning an error if the name or value is invalid.
    pub fn try_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|e| Error::InvalidHeaderName(format!("'{}': {}", key_str, e)))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|e| Error::InvalidHeaderValue(format!("'{}': {}", key_str, e)))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Merge a header map into this request, replacing existing values.
    pub(crate) fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Append query parameters taken from a serializable struct.
    ///
    /// Field names become parameter names, so `#[serde(rename =
    /// "filter[bundleId]")]` is how a field maps to a vendor key. `None`
    /// fields and empty lists are skipped, lists are comma-joined and
    /// parameters are appended sorted by name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuery`] if `params` is not a flat struct or map.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let pairs = encode_query(params)?;
        if !pairs.is_empty() {
            let mut query = self.url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        Ok(self)
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(body)?;
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }

    /// Set a raw request body.
    pub fn body_bytes(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Flatten a query struct into `(name, value)` pairs, sorted by name.
///
/// ```rust
/// use asconnect::http::encode_query;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Params {
///     #[serde(rename = "fields[apps]")]
///     fields: Option<Vec<&'static str>>,
///     limit: Option<u32>,
///     cursor: Option<String>,
/// }
///
/// let pairs = encode_query(&Params {
///     fields: Some(vec!["name", "bundleId"]),
///     limit: Some(50),
///     cursor: None,
/// })
/// .unwrap();
///
/// assert_eq!(
///     pairs,
///     vec![
///         ("fields[apps]".to_string(), "name,bundleId".to_string()),
///         ("limit".to_string(), "50".to_string()),
///     ]
/// );
/// ```
pub fn encode_query<Q: Serialize + ?Sized>(params: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(|e| Error::InvalidQuery(e.to_string()))?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::InvalidQuery(format!(
                "expected a struct or map, got {}",
                kind(&other)
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        if let Some(encoded) = encode_value(&key, value)? {
            pairs.push((key, encoded));
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs)
}

fn encode_value(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match encode_scalar(key, item)? {
                    Some(part) => parts.push(part),
                    None => continue,
                }
            }
            if parts.is_empty() {
                Ok(None)
            } else {
                Ok(Some(parts.join(",")))
            }
        }
        scalar => encode_scalar(key, scalar),
    }
}

fn encode_scalar(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(Error::InvalidQuery(format!(
            "parameter '{}' must be a scalar or a list of scalars, got {}",
            key,
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
