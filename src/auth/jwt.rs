// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JWT payload decoding
//!
//! Only the middle segment is decoded. Signatures are never checked, so
//! the claims are informational (who the cookie says we are, when the
//! token runs out) and must not be used for authorization decisions.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::error::JwtError;

/// Decoded JWT payload
pub type Claims = Map<String, Value>;

/// Decode a token's payload, or `None` on any failure
pub fn parse_jwt(token: &str) -> Option<Claims> {
    match try_parse_jwt(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::trace!(error = %e, "JWT payload decode failed");
            None
        }
    }
}

/// Decode a token's payload, reporting why it failed
pub fn try_parse_jwt(token: &str) -> Result<Claims, JwtError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(JwtError::Malformed {
            segments: segments.len(),
        });
    }

    let payload = decode_segment(segments[1])?;
    match serde_json::from_slice::<Value>(&payload)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(JwtError::NotAnObject),
    }
}

/// base64url first, then the standard alphabet; padding optional
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
}

/// Typed access to registered and MovieRama-specific claims
pub trait ClaimsExt {
    /// `exp` claim as a timestamp
    fn expires_at(&self) -> Option<DateTime<Utc>>;

    /// `user_id` claim; numeric or a numeric string
    fn user_id(&self) -> Option<i64>;

    /// Whether `exp` lies in the past. Tokens without `exp` never expire.
    fn is_expired(&self) -> bool {
        self.expires_at().map_or(false, |exp| exp <= Utc::now())
    }
}

impl ClaimsExt for Claims {
    fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.get("exp")?;
        let secs = exp.as_i64().or_else(|| exp.as_f64().map(|f| f as i64))?;
        Utc.timestamp_opt(secs, 0).single()
    }

    fn user_id(&self) -> Option<i64> {
        match self.get("user_id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(payload: &Value) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    #[test]
    fn test_parse_subject() {
        let claims = parse_jwt(&token_with(&json!({"sub": "x"}))).unwrap();
        assert_eq!(claims.get("sub"), Some(&json!("x")));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_not_a_jwt() {
        assert!(parse_jwt("not-a-jwt").is_none());
        assert!(parse_jwt("").is_none());
        assert!(parse_jwt("a.b").is_none());
        assert!(matches!(
            try_parse_jwt("a.b"),
            Err(JwtError::Malformed { segments: 2 })
        ));
    }

    #[test]
    fn test_failure_causes() {
        assert!(matches!(try_parse_jwt("a.!!!.c"), Err(JwtError::Base64(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("nope"));
        assert!(matches!(try_parse_jwt(&not_json), Err(JwtError::Json(_))));
        assert!(matches!(
            try_parse_jwt(&token_with(&json!([1, 2]))),
            Err(JwtError::NotAnObject)
        ));
    }

    #[test]
    fn test_padded_standard_alphabet() {
        // "{\"a\":1}" padded with the standard engine
        let token = format!("h.{}.s", base64::engine::general_purpose::STANDARD.encode("{\"a\":1}"));
        assert!(token.contains('='));
        assert_eq!(parse_jwt(&token).unwrap().get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_claim_helpers() {
        let claims = parse_jwt(&token_with(&json!({
            "token_type": "access",
            "exp": 4096250880u64,
            "user_id": 7,
        })))
        .unwrap();
        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.expires_at().unwrap().timestamp(), 4096250880);
        assert!(!claims.is_expired());

        let claims = parse_jwt(&token_with(&json!({"exp": 10, "user_id": "12"}))).unwrap();
        assert!(claims.is_expired());
        assert_eq!(claims.user_id(), Some(12));

        let claims = parse_jwt(&token_with(&json!({}))).unwrap();
        assert!(claims.expires_at().is_none());
        assert!(!claims.is_expired());
    }
}
