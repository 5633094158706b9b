// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Query-string access for the current page

use parking_lot::RwLock;
use regex::Regex;
use url::Url;

use crate::error::{ParamError, Result};

/// Provides the current page's query string
pub trait Location: Send + Sync {
    /// Query string including the leading `?`, or empty when there is none
    fn search(&self) -> String;
}

impl Location for str {
    fn search(&self) -> String {
        self.to_string()
    }
}

impl Location for String {
    fn search(&self) -> String {
        self.clone()
    }
}

/// Current page URL, replaceable on navigation
#[derive(Debug)]
pub struct PageLocation {
    url: RwLock<Url>,
}

impl PageLocation {
    /// Create a location from a page URL
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            url: RwLock::new(Url::parse(url.as_ref())?),
        })
    }

    /// Move to another page
    pub fn navigate(&self, url: impl AsRef<str>) -> Result<()> {
        *self.url.write() = Url::parse(url.as_ref())?;
        Ok(())
    }

    /// Full page URL
    pub fn href(&self) -> String {
        self.url.read().to_string()
    }
}

impl Location for PageLocation {
    fn search(&self) -> String {
        match self.url.read().query() {
            Some(query) if !query.is_empty() => format!("?{}", query),
            _ => String::new(),
        }
    }
}

/// Look up `name` in the location's query string.
///
/// The first `name=value` pair wins. `+` decodes to a space before
/// percent-decoding. A `%` not followed by two hex digits, or escapes that
/// decode to invalid UTF-8, make the value `Malformed`.
pub fn try_parameter_by_name<L: Location + ?Sized>(
    location: &L,
    name: &str,
) -> std::result::Result<String, ParamError> {
    let pattern = format!("[?&]{}=([^&]*)", regex::escape(name));
    let not_found = || ParamError::NotFound(name.to_string());
    let re = Regex::new(&pattern).map_err(|_| not_found())?;

    let search = location.search();
    let raw = re
        .captures(&search)
        .and_then(|caps| caps.get(1))
        .ok_or_else(not_found)?
        .as_str()
        .replace('+', " ");

    let malformed = || ParamError::Malformed {
        name: name.to_string(),
    };
    if has_broken_escape(&raw) {
        return Err(malformed());
    }

    urlencoding::decode(&raw)
        .map(|value| value.into_owned())
        .map_err(|_| malformed())
}

/// Whether any `%` lacks two hex digits after it
fn has_broken_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

/// Look up `name` in the location's query string, `None` when absent or undecodable
pub fn get_parameter_by_name<L: Location + ?Sized>(location: &L, name: &str) -> Option<String> {
    try_parameter_by_name(location, name).ok()
}
