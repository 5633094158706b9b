// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the MovieRama client
//!
//! Provides the JSON request helper, its request/response model and the
//! cookie store the bearer token is read from.

mod client;
mod cookie;
mod request;
mod response;

pub use client::{ApiClient, TOKEN_PATH};
pub use cookie::{clamp_expires, lookup_cookie, Cookie, CookieJar, CookieStore, EXPIRES_FORMAT};
pub use request::{api_headers, normalize_method, ApiRequest};
pub use response::FetchOutcome;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("movierama-client/", env!("CARGO_PKG_VERSION"));

/// HTTP headers set on API requests
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
    pub const CACHE_CONTROL: &str = "cache-control";
    pub const PRAGMA: &str = "pragma";
    pub const ORIGIN: &str = "origin";
    pub const AUTHORIZATION: &str = "authorization";

    pub const APPLICATION_JSON: &str = "application/json";
    pub const NO_CACHE: &str = "no-cache";
}
