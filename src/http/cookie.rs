// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie store modelled on a browser's document cookie jar
//!
//! Reads go through the rendered cookie string (`a=1; b=2`), writes go
//! through cookie assignment lines (`name=value; expires=...; path=/`).
//! Both are behind the [`CookieStore`] trait so the API client can be
//! driven by an in-memory jar in tests or by any other backing store.

use std::sync::Arc;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Format used for the `expires` attribute (HTTP-date, always GMT)
pub const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A single cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value, stored exactly as assigned (still percent-encoded)
    pub value: String,
    /// Path the cookie is valid for
    pub path: String,
    /// Expiration time (None = session cookie)
    pub expires: Option<DateTime<Utc>>,
}

impl Cookie {
    /// Create a new session cookie scoped to `/`
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            expires: None,
        }
    }

    /// Set the path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set expiration time
    pub fn expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Check if the cookie is expired
    pub fn is_expired(&self) -> bool {
        self.expires.map_or(false, |exp| exp <= Utc::now())
    }

    /// Check if the cookie is visible from a document at `document_path`
    pub fn path_matches(&self, document_path: &str) -> bool {
        if self.path == document_path || self.path == "/" {
            return true;
        }
        match document_path.strip_prefix(self.path.as_str()) {
            Some(rest) => self.path.ends_with('/') || rest.starts_with('/'),
            None => false,
        }
    }

    /// Parse a cookie assignment line (`name=value; expires=...; path=...`)
    ///
    /// An `expires` value that is not an HTTP-date (e.g. `-1`) and a
    /// non-positive `max-age` both mark the cookie as already expired.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split(';');
        let first = parts.next()?.trim();

        let (name, value) = first.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let mut cookie = Cookie::new(name, value.trim());

        let mut max_age = None;
        for part in parts {
            let Some((attr, val)) = part.trim().split_once('=') else {
                continue;
            };
            let val = val.trim();
            match attr.trim().to_lowercase().as_str() {
                "path" if val.starts_with('/') => cookie.path = val.to_string(),
                "expires" => {
                    cookie.expires = Some(
                        DateTime::parse_from_rfc2822(val)
                            .map(|dt| dt.with_timezone(&Utc))
                            .unwrap_or_else(|_| epoch()),
                    );
                }
                "max-age" => {
                    if let Ok(secs) = val.parse::<i64>() {
                        max_age = Some(secs);
                    }
                }
                _ => {}
            }
        }

        // max-age wins over expires
        if let Some(secs) = max_age {
            cookie.expires = Some(if secs <= 0 {
                epoch()
            } else {
                Utc::now() + chrono::Duration::seconds(secs)
            });
        }

        Some(cookie)
    }

    /// Render as a `name=value` pair
    pub fn to_pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from(UNIX_EPOCH)
}

/// Clamp to the last instant an HTTP-date can spell (four-digit year)
pub fn clamp_expires(expires: DateTime<Utc>) -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).single() {
        Some(max) if expires > max => max,
        _ => expires,
    }
}

/// Find `name` in a rendered cookie string.
///
/// The name must sit at the start of the string or after a space, and the
/// value runs up to the next `;`. Empty values count as absent. The value
/// is returned raw, without percent-decoding.
pub fn lookup_cookie(cookie_string: &str, name: &str) -> Option<String> {
    let pattern = format!("(^| ){}=([^;]+)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    re.captures(cookie_string)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Get/set/delete access to a cookie jar
pub trait CookieStore: Send + Sync {
    /// Visible cookies rendered as `a=1; b=2`
    fn cookie_string(&self) -> String;

    /// Apply a cookie assignment line
    fn assign(&self, line: &str);

    /// Read a cookie's raw value
    fn get_cookie(&self, name: &str) -> Option<String> {
        lookup_cookie(&self.cookie_string(), name)
    }

    /// Write a cookie. The value is percent-encoded; `expires` is written as an
    /// HTTP-date, clamped to the end of year 9999.
    fn set_cookie(&self, name: &str, value: &str, expires: DateTime<Utc>, path: &str) {
        let line = format!(
            "{}={}; expires={}; path={}",
            name,
            urlencoding::encode(value),
            clamp_expires(expires).format(EXPIRES_FORMAT),
            path
        );
        self.assign(&line);
    }

    /// Write a cookie scoped to `/`
    fn set_cookie_default_path(&self, name: &str, value: &str, expires: DateTime<Utc>) {
        self.set_cookie(name, value, expires, "/");
    }

    /// Write a cookie without an expiration
    fn set_session_cookie(&self, name: &str, value: &str, path: &str) {
        self.assign(&format!("{}={}; path={}", name, urlencoding::encode(value), path));
    }

    /// Remove a cookie by overwriting it with an empty, already-expired value
    fn delete_cookie(&self, name: &str, path: &str) {
        self.set_cookie(name, "", epoch(), path);
    }
}

impl<T: CookieStore + ?Sized> CookieStore for Arc<T> {
    fn cookie_string(&self) -> String {
        (**self).cookie_string()
    }

    fn assign(&self, line: &str) {
        (**self).assign(line)
    }

    fn get_cookie(&self, name: &str) -> Option<String> {
        (**self).get_cookie(name)
    }
}

/// Thread-safe in-memory cookie jar
///
/// Clones share the same cookies. Insertion order is preserved, and
/// overwriting a cookie keeps its original position.
#[derive(Debug, Clone)]
pub struct CookieJar {
    cookies: Arc<RwLock<Vec<Cookie>>>,
    /// Path of the document reading the jar
    document_path: String,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    /// Create a new empty cookie jar seen from `/`
    pub fn new() -> Self {
        Self::with_document_path("/")
    }

    /// Create a new empty cookie jar seen from `document_path`
    pub fn with_document_path(document_path: impl Into<String>) -> Self {
        Self {
            cookies: Arc::new(RwLock::new(Vec::new())),
            document_path: document_path.into(),
        }
    }

    /// Seed a jar from a rendered cookie string such as `foo=; bar=baz`
    pub fn parse(cookie_string: &str) -> Self {
        let jar = Self::new();
        {
            let mut cookies = jar.cookies.write();
            for pair in cookie_string.split(';') {
                let pair = pair.trim_start();
                if let Some((name, value)) = pair.split_once('=') {
                    if !name.is_empty() {
                        cookies.push(Cookie::new(name, value));
                    }
                }
            }
        }
        jar
    }

    /// Insert or replace a cookie
    pub fn add(&self, cookie: Cookie) {
        let mut cookies = self.cookies.write();
        let existing = cookies
            .iter()
            .position(|c| c.name == cookie.name && c.path == cookie.path);

        if cookie.is_expired() {
            if let Some(idx) = existing {
                cookies.remove(idx);
            }
            return;
        }

        match existing {
            Some(idx) => cookies[idx] = cookie,
            None => cookies.push(cookie),
        }
    }

    /// Cookies visible from the document path
    pub fn get_cookies(&self) -> Vec<Cookie> {
        self.remove_expired();
        self.cookies
            .read()
            .iter()
            .filter(|c| c.path_matches(&self.document_path))
            .cloned()
            .collect()
    }

    /// Remove a specific cookie
    pub fn remove(&self, name: &str, path: &str) {
        self.cookies
            .write()
            .retain(|c| c.name != name || c.path != path);
    }

    /// Clear all cookies
    pub fn clear(&self) {
        self.cookies.write().clear();
    }

    fn remove_expired(&self) {
        self.cookies.write().retain(|c| !c.is_expired());
    }

    /// Get total cookie count, including cookies on other paths
    pub fn len(&self) -> usize {
        self.cookies.read().len()
    }

    /// Check if jar is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export all cookies as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&*self.cookies.read())
    }

    /// Import cookies from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let cookies: Vec<Cookie> = serde_json::from_str(json)?;
        let jar = CookieJar::new();
        for cookie in cookies {
            jar.add(cookie);
        }
        Ok(jar)
    }
}

impl CookieStore for CookieJar {
    fn cookie_string(&self) -> String {
        self.get_cookies()
            .iter()
            .map(Cookie::to_pair)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn assign(&self, line: &str) {
        match Cookie::parse(line) {
            Some(cookie) => {
                tracing::trace!(cookie = %cookie.name, path = %cookie.path, "cookie assigned");
                self.add(cookie);
            }
            None => tracing::trace!("ignoring cookie assignment without a name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomorrow() -> DateTime<Utc> {
        Utc::now() + chrono::Duration::days(1)
    }

    #[test]
    fn test_cookie_parsing() {
        let cookie =
            Cookie::parse("session=abc123; expires=Wed, 21 Oct 2099 07:28:00 GMT; path=/movies")
                .unwrap();

        assert_eq!(cookie.name, "session");
        assert_eq!(cookie.value, "abc123");
        assert_eq!(cookie.path, "/movies");
        assert_eq!(cookie.expires.unwrap().timestamp(), 4096250880);
        assert!(!cookie.is_expired());
    }

    #[test]
    fn test_invalid_expires_is_expired() {
        let cookie = Cookie::parse("jwt=; expires=-1; path=/").unwrap();
        assert!(cookie.is_expired());

        let cookie = Cookie::parse("jwt=x; max-age=0").unwrap();
        assert!(cookie.is_expired());
    }

    #[test]
    fn test_set_then_get() {
        let jar = CookieJar::new();
        jar.set_cookie_default_path("a", "b", tomorrow());
        assert_eq!(jar.get_cookie("a"), Some("b".to_string()));
    }

    #[test]
    fn test_value_is_encoded_and_returned_raw() {
        let jar = CookieJar::new();
        jar.set_cookie_default_path("greeting", "hello world;x", tomorrow());
        assert_eq!(jar.get_cookie("greeting"), Some("hello%20world%3Bx".to_string()));
    }

    #[test]
    fn test_far_future_expiry_is_clamped() {
        let jar = CookieJar::new();
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        jar.set_cookie_default_path("a", "b", far);
        assert_eq!(jar.get_cookie("a"), Some("b".to_string()));

        let stored = jar.get_cookies()[0].expires.unwrap();
        assert_eq!(stored, Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap());

        let near = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(clamp_expires(near), near);
    }

    #[test]
    fn test_delete_cookie() {
        let jar = CookieJar::new();
        jar.set_cookie("a", "b", tomorrow(), "/");
        jar.delete_cookie("a", "/");
        assert_eq!(jar.get_cookie("a"), None);
        assert!(jar.is_empty());
    }

    #[test]
    fn test_empty_value_is_absent() {
        let jar = CookieJar::parse("foo=; bar=baz");
        assert_eq!(jar.get_cookie("foo"), None);
        assert_eq!(jar.get_cookie("bar"), Some("baz".to_string()));
        assert_eq!(jar.get_cookie("missing"), None);
    }

    #[test]
    fn test_lookup_requires_name_boundary() {
        assert_eq!(lookup_cookie("xjwt=1; jwt=2", "jwt"), Some("2".to_string()));
        assert_eq!(lookup_cookie("xjwt=1", "jwt"), None);
        assert_eq!(lookup_cookie("a=1;jwt=2", "jwt"), None);
        assert_eq!(lookup_cookie("a.b=1", "a.b"), Some("1".to_string()));
        assert_eq!(lookup_cookie("axb=1", "a.b"), None);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let jar = CookieJar::new();
        jar.set_cookie_default_path("a", "1", tomorrow());
        jar.set_cookie_default_path("b", "2", tomorrow());
        jar.set_cookie_default_path("a", "3", tomorrow());
        assert_eq!(jar.cookie_string(), "a=3; b=2");
    }

    #[test]
    fn test_path_scoping() {
        let jar = CookieJar::with_document_path("/movies/list");
        jar.set_cookie("a", "1", tomorrow(), "/movies");
        jar.set_cookie("b", "2", tomorrow(), "/users");
        jar.set_cookie("c", "3", tomorrow(), "/mov");
        assert_eq!(jar.cookie_string(), "a=1");
        assert_eq!(jar.len(), 3);
    }

    #[test]
    fn test_session_cookie() {
        let jar = CookieJar::new();
        jar.set_session_cookie("jwt", "t", "/");
        assert_eq!(jar.get_cookie("jwt"), Some("t".to_string()));
        assert!(jar.get_cookies()[0].expires.is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let jar = CookieJar::new();
        jar.set_cookie_default_path("jwt", "abc", tomorrow());
        let restored = CookieJar::from_json(&jar.to_json().unwrap()).unwrap();
        assert_eq!(restored.get_cookie("jwt"), Some("abc".to_string()));
    }

    #[test]
    fn test_shared_through_arc() {
        let jar = CookieJar::new();
        let store: Arc<dyn CookieStore> = Arc::new(jar.clone());
        store.set_cookie_default_path("jwt", "abc", tomorrow());
        assert_eq!(jar.get_cookie("jwt"), Some("abc".to_string()));
    }
}
