// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # movierama-client - MovieRama API helper
//!
//! A thin client for the MovieRama REST API. Requests carry JSON headers
//! and, when a `jwt` cookie is present, an `Authorization: Bearer` header.
//!
//! ## Features
//!
//! - `fetch_api`: JSON in, JSON (or `None`) out
//! - Cookie store trait with an in-memory document-style jar
//! - JWT payload decoding (no signature verification)
//! - Query-string parameter lookup over an injected page location
//! - Token session: login, expiry from `exp`, logout
//! - Typed movie, vote and user endpoints
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use movierama_client::{ApiClient, CookieJar};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let jar = CookieJar::new();
//!     let client = ApiClient::new(Arc::new(jar.clone()))?;
//!
//!     if client.login("john", "Testing-123").await? {
//!         let movies = client.fetch_api("/api/movies", "GET", None).await?;
//!         println!("{:?}", movies);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod location;

// Re-exports for convenience

// Client
pub use http::{ApiClient, ApiRequest, FetchOutcome, TOKEN_PATH};

// Resources
pub use api::{Movie, MovieSort, NewMovie, NewUser, Reaction, SortField, User, Vote};

// Cookies
pub use http::{Cookie, CookieJar, CookieStore};

// Auth
pub use auth::{parse_jwt, try_parse_jwt, Claims, ClaimsExt, Session, JWT_COOKIE};

// Query string
pub use location::{get_parameter_by_name, try_parameter_by_name, Location, PageLocation};

// Config
pub use config::{ClientConfig, DEFAULT_BASE_URL};

// Errors
pub use error::{Error, JwtError, ParamError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
