// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API request model and header construction

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::headers;
use crate::error::{Error, Result};

/// Outgoing API request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Request method
    pub method: Method,
    /// Full request URL (base URL + path)
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Pre-serialized request body, sent unchanged whatever the method
    pub body: Option<Bytes>,
}

/// Uppercase the methods fetch treats case-insensitively, keep others as given
pub fn normalize_method(method: &str) -> Result<Method> {
    const NORMALIZED: [&str; 6] = ["DELETE", "GET", "HEAD", "OPTIONS", "POST", "PUT"];

    let upper = method.to_ascii_uppercase();
    let name = if NORMALIZED.contains(&upper.as_str()) {
        upper.as_str()
    } else {
        method
    };
    Method::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidMethod(method.to_string()))
}

/// Standard JSON API headers, plus `Authorization` when a token is present
pub fn api_headers(token: Option<&str>, origin: Option<&str>) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(
        headers::CONTENT_TYPE,
        HeaderValue::from_static(headers::APPLICATION_JSON),
    );
    map.insert(
        headers::CACHE_CONTROL,
        HeaderValue::from_static(headers::NO_CACHE),
    );
    map.insert(headers::PRAGMA, HeaderValue::from_static(headers::NO_CACHE));

    if let Some(origin) = origin {
        match HeaderValue::from_str(origin) {
            Ok(value) => {
                map.insert(headers::ORIGIN, value);
            }
            Err(_) => tracing::warn!(%origin, "origin is not a valid header value, skipping"),
        }
    }

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                map.insert(headers::AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("jwt cookie is not a valid header value, sending without it"),
        }
    }

    map
}

impl ApiRequest {
    /// Create a new request
    pub fn new(method: &str, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method: normalize_method(method)?,
            url: Url::parse(url.as_ref())?,
            headers: HeaderMap::new(),
            body: None,
        })
    }

    /// Replace all headers
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set a header, ignoring names or values that are not valid HTTP
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data)?;
        self.body = Some(Bytes::from(json));
        Ok(self.header(headers::CONTENT_TYPE, headers::APPLICATION_JSON))
    }

    /// Whether an `Authorization` header is attached
    pub fn has_bearer(&self) -> bool {
        self.headers.contains_key(headers::AUTHORIZATION)
    }

    /// Get a header value
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_without_token() {
        let map = api_headers(None, None);
        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(map.get("cache-control").unwrap(), "no-cache");
        assert!(map.get("authorization").is_none());
        assert!(map.get("origin").is_none());
    }

    #[test]
    fn test_headers_with_token() {
        let map = api_headers(Some("abc.def.ghi"), Some("http://localhost:3000"));
        assert_eq!(map.get("authorization").unwrap(), "Bearer abc.def.ghi");
        assert_eq!(map.get("origin").unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_invalid_token_is_dropped() {
        let map = api_headers(Some("bad\ntoken"), None);
        assert!(map.get("authorization").is_none());
    }

    #[test]
    fn test_method_normalization() {
        assert_eq!(normalize_method("get").unwrap(), Method::GET);
        assert_eq!(normalize_method("Delete").unwrap(), Method::DELETE);
        assert_eq!(normalize_method("PATCH").unwrap(), Method::PATCH);
        assert_eq!(normalize_method("patch").unwrap().as_str(), "patch");
        assert!(matches!(
            normalize_method("BAD METHOD"),
            Err(Error::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_request_creation() {
        let req = ApiRequest::new("post", "http://127.0.0.1:8000/api/movies")
            .unwrap()
            .headers(api_headers(Some("t"), None))
            .body("{}");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url.path(), "/api/movies");
        assert!(req.has_bearer());
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
    }
}
