//
//  bitbucket-search
//  api/cloud/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket Cloud API v2.0 payload types.
//!
//! Type-safe bindings for the Cloud responses the search handlers read,
//! organized by resource type.
//!
//! # Module Organization
//!
//! - [`search`] - Workspace code search results
//! - [`repositories`] - Repository metadata
//! - [`pullrequests`] - Pull requests
//! - [`issues`] - Issue tracker entries
//! - [`workspaces`] - Workspaces and workspace permissions
//!
//! # Notes
//!
//! - All timestamps are in ISO 8601 format
//! - UUIDs are returned with curly braces (e.g., `{123e4567-e89b-...}`)
//! - Unknown fields are ignored, so partial fixtures deserialize

pub mod issues;
pub mod pullrequests;
pub mod repositories;
pub mod search;
pub mod workspaces;

// Re-export common types
pub use repositories::*;
