// File: src/request_context.rs
// Purpose: Request context with typed path params, query params, and headers

use axum::http::{HeaderMap, Method};
use std::collections::HashMap;

/// A path parameter value, coerced according to its route descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            ParamValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Str(_) => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
        }
    }
}

/// Path parameters bound from the matched route pattern.
///
/// Preserves the left-to-right order in which the parameters appeared in the
/// route file's path, which is the binding order handlers observe.
#[derive(Debug, Clone, Default)]
pub struct PathParams {
    params: Vec<(String, ParamValue)>,
}

impl PathParams {
    pub fn new(params: Vec<(String, ParamValue)>) -> Self {
        Self { params }
    }

    /// Get a parameter value by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Get a string parameter by name
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_str())
    }

    /// Get an integer parameter by name
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.as_int())
    }

    /// Iterate parameters in binding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Query parameters from the request URL
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Create from HashMap
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Parse from a raw query string (`limit=10&offset=0`)
    pub fn from_query(query: &str) -> Self {
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = urlencoding::decode(key).ok()?;
                let value = urlencoding::decode(value).ok()?;
                Some((key.into_owned(), value.into_owned()))
            })
            .collect();
        Self { params }
    }

    /// Get a query parameter value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a query parameter parsed as a specific type
    pub fn get_as<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.params.get(key).and_then(|v| v.parse().ok())
    }
}

/// Request context passed to route handlers
#[derive(Clone)]
pub struct RequestContext {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: Method,

    /// Request path
    pub path: String,

    /// Typed path parameters, in route discovery order
    pub params: PathParams,

    /// Query parameters from URL (?key=value)
    pub query: QueryParams,

    /// Request headers
    pub headers: HeaderMap,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

impl RequestContext {
    /// Create a new request context
    pub fn new(
        method: Method,
        path: String,
        params: PathParams,
        query: QueryParams,
        headers: HeaderMap,
    ) -> Self {
        Self {
            method,
            path,
            params,
            query,
            headers,
        }
    }

    /// Get a header value
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_params_typed_access() {
        let params = PathParams::new(vec![
            ("user_id".to_string(), ParamValue::Str("john".to_string())),
            ("post_id".to_string(), ParamValue::Int(42)),
        ]);

        assert_eq!(params.get_str("user_id"), Some("john"));
        assert_eq!(params.get_int("post_id"), Some(42));
        assert_eq!(params.get_int("user_id"), None);
        assert!(params.get("missing").is_none());
    }

    #[test]
    fn test_path_params_preserve_order() {
        let params = PathParams::new(vec![
            ("a".to_string(), ParamValue::Str("1".to_string())),
            ("b".to_string(), ParamValue::Str("2".to_string())),
        ]);

        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_query_params_from_query() {
        let query = QueryParams::from_query("limit=10&offset=0&flag");
        assert_eq!(query.get("limit"), Some(&"10".to_string()));
        assert_eq!(query.get_as::<usize>("limit"), Some(10));
        assert_eq!(query.get("flag"), Some(&"".to_string()));
    }

    #[test]
    fn test_query_params_percent_decoding() {
        let query = QueryParams::from_query("q=hello%20world");
        assert_eq!(query.get("q"), Some(&"hello world".to_string()));
    }
}
