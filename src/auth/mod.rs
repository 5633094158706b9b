// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Token handling: JWT payload decoding and the cookie-backed session

mod jwt;
mod session;

pub use jwt::{parse_jwt, try_parse_jwt, Claims, ClaimsExt};
pub use session::{Session, JWT_COOKIE};
