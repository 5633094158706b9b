// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response classification

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::Result;

/// What an API call produced
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx (other than 204) with a JSON body
    Data(Value),
    /// 204 No Content
    NoContent,
    /// Any non-2xx status
    Status(StatusCode),
}

impl FetchOutcome {
    /// Classify a status that carries no usable body.
    ///
    /// Returns `None` when the status is a 2xx other than 204, meaning the
    /// body should be read and parsed.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status == StatusCode::NO_CONTENT {
            Some(FetchOutcome::NoContent)
        } else if !status.is_success() {
            Some(FetchOutcome::Status(status))
        } else {
            None
        }
    }

    /// Classify a complete response
    pub fn from_parts(status: StatusCode, body: &[u8]) -> Result<Self> {
        match Self::from_status(status) {
            Some(outcome) => Ok(outcome),
            None => Ok(FetchOutcome::Data(serde_json::from_slice(body)?)),
        }
    }

    /// Collapse to the JSON body, or `None` for 204 and non-2xx
    pub fn into_json(self) -> Option<Value> {
        match self {
            FetchOutcome::Data(value) => Some(value),
            FetchOutcome::NoContent | FetchOutcome::Status(_) => None,
        }
    }

    /// Check if a body was returned
    pub fn is_data(&self) -> bool {
        matches!(self, FetchOutcome::Data(_))
    }

    /// Status code for non-2xx outcomes
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchOutcome::Status(status) => Some(*status),
            _ => None,
        }
    }
}
