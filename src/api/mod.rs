// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Typed MovieRama endpoints
//!
//! Thin wrappers over [`ApiClient::fetch_json`](crate::ApiClient::fetch_json)
//! for the movie, vote and user resources. They keep the same contract:
//! `Ok(None)` for 204 or a non-2xx status, `Err` for transport failures and
//! bodies that do not match the model.

mod endpoints;
mod models;

pub use endpoints::{movie_votes_path, movies_path, MOVIES_PATH, USERS_PATH};
pub use models::{Movie, MovieSort, NewMovie, NewUser, Reaction, SortField, User, Vote};
