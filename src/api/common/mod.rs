//
//  bitbucket-search
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for Bitbucket Cloud
//!
//! This module provides shared types used across the Cloud endpoints the
//! search handlers call: error handling, links and user references.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Link`] / [`Links`] - HATEOAS-style link representation
//! - [`UserRef`] - Lightweight user reference
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use bitbucket_search::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthFailed(reason)) => println!("Check your credentials: {}", reason),
//!         Err(ApiError::NotFound(resource)) => println!("Resource not found: {}", resource),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

use crate::exit_codes;

/// Unified error type for all Bitbucket API operations.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `AuthFailed` | Invalid or missing credentials | 401 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests, retry later | 429 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `BadRequest` | Invalid request parameters (often a bad BBQL query) | 400 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Network` | Network connectivity issues | N/A |
/// | `Unknown` | Unexpected or unclassified errors | N/A |
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed due to invalid, expired or missing credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    ///
    /// The workspace or repository does not exist or is not visible to the
    /// current credentials.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Access to the resource is forbidden.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The request was malformed or contained invalid parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal server error occurred on the Bitbucket side (HTTP 5xx).
    #[error("Server error: {0}")]
    ServerError(String),

    /// A network-level error occurred during the request.
    ///
    /// Connection failures, timeouts, DNS resolution errors and other
    /// transport-layer issues.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An unknown or unexpected error occurred.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Returns the process exit code the CLI uses for this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_search::api::ApiError;
    /// use bitbucket_search::exit_codes;
    ///
    /// assert_eq!(ApiError::RateLimited.exit_code(), exit_codes::RATE_LIMIT);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed(_) | Self::Forbidden(_) => exit_codes::AUTH_ERROR,
            Self::NotFound(_) => exit_codes::NOT_FOUND,
            Self::RateLimited => exit_codes::RATE_LIMIT,
            _ => exit_codes::ERROR,
        }
    }
}

/// HATEOAS-style link for API resource navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// The URL of the linked resource.
    pub href: String,

    /// Optional descriptive name for the link.
    #[serde(default)]
    pub name: Option<String>,
}

/// The `links` object attached to most Cloud resources.
///
/// Only the links the formatters print are modelled; the rest are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    /// API URL of the resource itself.
    #[serde(default, rename = "self")]
    pub self_link: Option<Link>,

    /// Browser URL of the resource.
    #[serde(default)]
    pub html: Option<Link>,
}

impl Links {
    /// Returns the browser URL if present.
    pub fn html_href(&self) -> Option<&str> {
        self.html.as_ref().map(|l| l.href.as_str())
    }
}

/// Lightweight user reference.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::api::common::UserRef;
///
/// let cloud_json = r#"{
///     "account_id": "557058:12345678-1234-1234-1234-123456789012",
///     "display_name": "John Doe",
///     "nickname": "johnd"
/// }"#;
///
/// let user: UserRef = serde_json::from_str(cloud_json).unwrap();
/// assert_eq!(user.name, "John Doe");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    /// Atlassian account identifier.
    #[serde(default)]
    pub account_id: Option<String>,

    /// UUID identifier for the user (with curly braces).
    #[serde(default)]
    pub uuid: Option<String>,

    /// Display name of the user.
    #[serde(alias = "display_name")]
    pub name: String,

    /// Username or nickname of the user.
    #[serde(default, alias = "nickname")]
    pub username: Option<String>,
}
