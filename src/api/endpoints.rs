// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Endpoint wrappers on [`ApiClient`]

use url::form_urlencoded;

use super::models::{Movie, MovieSort, NewMovie, NewUser, Reaction, User, Vote};
use crate::error::Result;
use crate::http::{ApiClient, FetchOutcome};

/// Movie collection
pub const MOVIES_PATH: &str = "/api/movies";

/// User collection
pub const USERS_PATH: &str = "/api/users";

/// Movie list path with optional `ordering` and `user_id` filter
pub fn movies_path(sort: Option<MovieSort>, user_id: Option<i64>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(sort) = sort {
        query.append_pair("ordering", &sort.as_param());
    }
    if let Some(user_id) = user_id {
        query.append_pair("user_id", &user_id.to_string());
    }
    let query = query.finish();

    if query.is_empty() {
        MOVIES_PATH.to_string()
    } else {
        format!("{}?{}", MOVIES_PATH, query)
    }
}

/// Vote path of one movie
pub fn movie_votes_path(movie_id: i64) -> String {
    format!("{}/{}/votes", MOVIES_PATH, movie_id)
}

fn reaction_body(reaction: Reaction) -> String {
    serde_json::json!({ "reaction": reaction }).to_string()
}

impl ApiClient {
    /// List movies
    pub async fn movies(
        &self,
        sort: Option<MovieSort>,
        user_id: Option<i64>,
    ) -> Result<Option<Vec<Movie>>> {
        self.fetch_json(&movies_path(sort, user_id), "GET", None)
            .await
    }

    /// Submit a movie; requires a logged-in session
    pub async fn create_movie(&self, movie: &NewMovie) -> Result<Option<Movie>> {
        let body = serde_json::to_string(movie)?;
        self.fetch_json(MOVIES_PATH, "POST", Some(body)).await
    }

    /// Votes cast on a movie
    pub async fn movie_votes(&self, movie_id: i64) -> Result<Option<Vec<Vote>>> {
        self.fetch_json(&movie_votes_path(movie_id), "GET", None)
            .await
    }

    /// Cast the session user's vote
    ///
    /// `None` when the server refuses it (own movie, second vote, anonymous).
    pub async fn vote(&self, movie_id: i64, reaction: Reaction) -> Result<Option<Vote>> {
        self.fetch_json(&movie_votes_path(movie_id), "POST", Some(reaction_body(reaction)))
            .await
    }

    /// Replace the session user's existing vote
    pub async fn change_vote(&self, movie_id: i64, reaction: Reaction) -> Result<Option<Vote>> {
        self.fetch_json(&movie_votes_path(movie_id), "PUT", Some(reaction_body(reaction)))
            .await
    }

    /// Remove the session user's vote. `true` when the server deleted it.
    pub async fn retract_vote(&self, movie_id: i64) -> Result<bool> {
        let outcome = self
            .fetch_outcome(&movie_votes_path(movie_id), "DELETE", None)
            .await?;
        Ok(matches!(outcome, FetchOutcome::NoContent | FetchOutcome::Data(_)))
    }

    /// Register a new user
    pub async fn register(&self, user: &NewUser) -> Result<Option<User>> {
        let body = serde_json::to_string(user)?;
        self.fetch_json(USERS_PATH, "POST", Some(body)).await
    }

    /// All registered users
    pub async fn users(&self) -> Result<Option<Vec<User>>> {
        self.fetch_json(USERS_PATH, "GET", None).await
    }

    /// One user by id
    pub async fn user(&self, id: i64) -> Result<Option<User>> {
        self.fetch_json(&format!("{}/{}", USERS_PATH, id), "GET", None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SortField;

    #[test]
    fn test_movies_path() {
        assert_eq!(movies_path(None, None), "/api/movies");
        assert_eq!(
            movies_path(Some(MovieSort::desc(SortField::Likes)), Some(4)),
            "/api/movies?ordering=-likes&user_id=4"
        );
        assert_eq!(movies_path(None, Some(9)), "/api/movies?user_id=9");
    }

    #[test]
    fn test_votes_path_and_body() {
        assert_eq!(movie_votes_path(12), "/api/movies/12/votes");
        assert_eq!(reaction_body(Reaction::Like), r#"{"reaction":"like"}"#);
    }
}
