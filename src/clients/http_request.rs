//! HTTP request types for the Wish API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, along with
//! the [`RequestParams`] map every endpoint call is marshaled into.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Wish merchant API.
///
/// Reads are `GET`; every mutation is a `POST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating or changing resources.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A single request parameter value: a scalar or a list.
///
/// Values are sent as strings. Booleans become `"true"`/`"false"` and lists
/// are joined with commas, which is how the API expects country lists.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A decimal value, such as a price.
    Float(f64),
    /// A boolean flag.
    Bool(bool),
    /// A list of values, sent comma-separated.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the wire representation of this value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wish_api::clients::ParamValue;
    ///
    /// assert_eq!(ParamValue::from(true).to_wire(), "true");
    /// assert_eq!(ParamValue::from(vec!["US", "CA"]).to_wire(), "US,CA");
    /// assert_eq!(ParamValue::from(10.99).to_wire(), "10.99");
    /// ```
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

/// Named parameters for one API call.
///
/// Keys are kept sorted so the encoded query string is deterministic.
///
/// # Example
///
/// ```rust
/// use wish_api::clients::RequestParams;
///
/// let mut params = RequestParams::new();
/// params.insert("id", "123");
/// params.insert_opt("reason_note", None::<String>);
///
/// assert_eq!(params.len(), 1);
/// assert_eq!(params.to_wire_pairs(), vec![("id".to_string(), "123".to_string())]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestParams(BTreeMap<String, ParamValue>);

impl RequestParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets a parameter only when `value` is `Some`.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Removes and returns the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.0.remove(name)
    }

    /// Returns `true` if a parameter named `name` is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every parameter of `other` into `self`, overwriting clashes.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Encodes the parameters as `(name, value)` string pairs.
    #[must_use]
    pub fn to_wire_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_wire()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// An HTTP request to be sent to the Wish API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
/// A request is built fresh for each call and never reused.
///
/// # Example
///
/// ```rust
/// use wish_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "product/enable")
///     .param("id", "5413fe984ad3ab745fee8b0c")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "product/enable");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The endpoint path, relative to the environment's base URL.
    pub path: String,
    /// The parameters sent with the request.
    pub params: RequestParams,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path or a parameter name is
    /// empty.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.params.iter().any(|(name, _)| name.is_empty()) {
            return Err(InvalidHttpRequestError::EmptyParamName {
                path: self.path.clone(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    params: RequestParams,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    ///
    /// Leading and trailing slashes are stripped from the path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            http_method: method,
            path: path.trim().trim_matches('/').to_string(),
            params: RequestParams::new(),
        }
    }

    /// Adds a single parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Merges a whole parameter map into the request.
    #[must_use]
    pub fn params(mut self, params: RequestParams) -> Self {
        self.params.extend(params);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            params: self.params,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_param_value_wire_format() {
        assert_eq!(ParamValue::from("abc").to_wire(), "abc");
        assert_eq!(ParamValue::from(42_i64).to_wire(), "42");
        assert_eq!(ParamValue::from(-1_i32).to_wire(), "-1");
        assert_eq!(ParamValue::from(9.5).to_wire(), "9.5");
        assert_eq!(ParamValue::from(false).to_wire(), "false");
        assert_eq!(
            ParamValue::from(vec!["US".to_string(), "GB".to_string()]).to_wire(),
            "US,GB"
        );
        assert_eq!(ParamValue::List(Vec::new()).to_wire(), "");
    }

    #[test]
    fn test_request_params_are_sorted_and_overwrite() {
        let mut params = RequestParams::new();
        params.insert("start", 0_i64);
        params.insert("limit", 50_i64);
        params.insert("start", 50_i64);

        assert_eq!(
            params.to_wire_pairs(),
            vec![
                ("limit".to_string(), "50".to_string()),
                ("start".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_params_from_iterator() {
        let params: RequestParams = [("id", "1"), ("reply", "thanks")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert!(params.contains("reply"));
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/product/")
            .param("id", "123")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "product");
        assert_eq!(request.params.get("id"), Some(&ParamValue::from("123")));
    }

    #[test]
    fn test_builder_rejects_empty_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "/").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::EmptyPath)));
    }

    #[test]
    fn test_builder_rejects_empty_param_name() {
        let result = HttpRequest::builder(HttpMethod::Post, "ticket/reply")
            .param("", "x")
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::EmptyParamName { path }) if path == "ticket/reply"
        ));
    }

    #[test]
    fn test_builder_merges_params() {
        let extra = RequestParams::new().with("since", "2024-01-01").with("limit", 50_i64);
        let request = HttpRequest::builder(HttpMethod::Get, "order/multi-get")
            .param("start", 0_i64)
            .params(extra)
            .build()
            .unwrap();

        assert_eq!(request.params.len(), 3);
    }
}
