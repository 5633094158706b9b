// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie-backed token session

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::jwt::{parse_jwt, Claims, ClaimsExt};
use crate::http::CookieStore;

/// Cookie the bearer token lives in
pub const JWT_COOKIE: &str = "jwt";

const SESSION_PATH: &str = "/";

/// Reads and writes the `jwt` cookie
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CookieStore>,
}

impl Session {
    /// Create a session over a cookie store
    pub fn new(store: Arc<dyn CookieStore>) -> Self {
        Self { store }
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.store.get_cookie(JWT_COOKIE)
    }

    /// Store a token until `expires`
    pub fn store_token(&self, token: &str, expires: DateTime<Utc>) {
        self.store
            .set_cookie(JWT_COOKIE, token, expires, SESSION_PATH);
    }

    /// Store a token until its own `exp` claim, or for the session if it has none
    pub fn store_token_from_claims(&self, token: &str) {
        match parse_jwt(token).and_then(|claims| claims.expires_at()) {
            Some(expires) => self.store_token(token, expires),
            None => self
                .store
                .set_session_cookie(JWT_COOKIE, token, SESSION_PATH),
        }
    }

    /// Decoded payload of the current token
    pub fn claims(&self) -> Option<Claims> {
        self.token().and_then(|token| parse_jwt(&token))
    }

    /// `user_id` claim of the current token
    pub fn user_id(&self) -> Option<i64> {
        self.claims().and_then(|claims| claims.user_id())
    }

    /// Whether a token is present and not past its `exp`
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Some(token) => parse_jwt(&token).map_or(true, |claims| !claims.is_expired()),
            None => false,
        }
    }

    /// Delete the `jwt` cookie
    pub fn clear(&self) {
        self.store.delete_cookie(JWT_COOKIE, SESSION_PATH);
    }
}
