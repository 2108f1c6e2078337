//
//  bitbucket-search
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client used by the search handlers to talk to
//! the Bitbucket Cloud REST API v2.0.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`cloud`]: Cloud payload types (search results, repositories, PRs, issues, workspaces)
//! - [`common`]: Shared types (pagination, errors, user references)
//!
//! ## Error Handling
//!
//! Non-success responses are returned as [`ApiError`] variants wrapped in
//! `anyhow::Error`, so callers can downcast to pick an exit code:
//!
//! - `AuthFailed`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `ServerError`: 5xx Server Errors

/// Core HTTP client wrapper for the Bitbucket Cloud API.
pub mod client;

/// Bitbucket Cloud API v2.0 payload types.
pub mod cloud;

/// Common types shared by every endpoint.
///
/// Includes:
/// - [`ApiError`]: Standardized error types
/// - [`PaginatedResponse`](common::PaginatedResponse): Cloud pagination format
/// - [`UserRef`](common::UserRef): User reference type
pub mod common;

/// Re-export of the main Bitbucket API client.
pub use client::BitbucketClient;

/// Re-export of the API error type.
pub use common::ApiError;
