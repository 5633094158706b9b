// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resource models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A reaction to a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Hate,
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reaction::Like => write!(f, "like"),
            Reaction::Hate => write!(f, "hate"),
        }
    }
}

/// Submitted movie with vote counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created: DateTime<Utc>,
    /// Submitter; absent for movies whose user was removed
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub hates: u64,
    /// The logged-in user's own reaction, `None` when anonymous or not voted
    #[serde(default)]
    pub vote: Option<Reaction>,
}

/// Movie submission payload
#[derive(Debug, Clone, Serialize)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A user's vote on a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub reaction: Reaction,
    #[serde(default)]
    pub user: Option<User>,
    pub created: DateTime<Utc>,
}

/// Fields the movie list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Created,
    Title,
    Likes,
    Hates,
}

impl SortField {
    fn as_str(self) -> &'static str {
        match self {
            SortField::Created => "created",
            SortField::Title => "title",
            SortField::Likes => "likes",
            SortField::Hates => "hates",
        }
    }
}

/// Movie list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieSort {
    pub field: SortField,
    pub descending: bool,
}

impl MovieSort {
    /// Ascending by `field`
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    /// Descending by `field`
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Value of the `ordering` query parameter
    pub fn as_param(&self) -> String {
        if self.descending {
            format!("-{}", self.field.as_str())
        } else {
            self.field.as_str().to_string()
        }
    }
}

impl Default for MovieSort {
    /// Newest first, the server's own default
    fn default() -> Self {
        Self::desc(SortField::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_param() {
        assert_eq!(MovieSort::default().as_param(), "-created");
        assert_eq!(MovieSort::asc(SortField::Title).as_param(), "title");
        assert_eq!(MovieSort::desc(SortField::Likes).as_param(), "-likes");
    }

    #[test]
    fn test_movie_from_server_json() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 3,
            "title": "Heat",
            "description": "",
            "created": "2021-03-01T10:15:30.123456Z",
            "user": {
                "id": 1,
                "first_name": "John",
                "last_name": "Doe",
                "username": "john",
                "email": "john@mr.com"
            },
            "likes": 2,
            "hates": 0,
            "vote": null
        }))
        .unwrap();

        assert_eq!(movie.user.unwrap().username, "john");
        assert_eq!(movie.likes, 2);
        assert!(movie.vote.is_none());
    }

    #[test]
    fn test_reaction_wire_format() {
        assert_eq!(serde_json::to_value(Reaction::Hate).unwrap(), json!("hate"));
        let vote: Vote =
            serde_json::from_value(json!({"reaction": "like", "created": "2021-03-01T10:15:30Z"}))
                .unwrap();
        assert_eq!(vote.reaction, Reaction::Like);
        assert_eq!(Reaction::Like.to_string(), "like");
    }

    #[test]
    fn test_new_user_serializes_password() {
        let user = NewUser {
            first_name: "John".into(),
            last_name: "Doe".into(),
            username: "john".into(),
            email: "john@mr.com".into(),
            password: "Testing-123".into(),
        };
        assert_eq!(serde_json::to_value(&user).unwrap()["password"], json!("Testing-123"));
    }
}
