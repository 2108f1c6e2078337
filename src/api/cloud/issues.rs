//
//  bitbucket-search
//  api/cloud/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud issue tracker types, used by `issue` content search.
//!
//! # Notes
//!
//! - Issues must be enabled for the repository; otherwise the endpoint
//!   returns 404
//! - Content supports Markdown formatting

use serde::{Deserialize, Serialize};

use crate::api::common::{Links, UserRef};

/// Represents an issue in the Bitbucket Cloud issue tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub content: Option<IssueContent>,

    /// `new`, `open`, `resolved`, `on hold`, `invalid`, `duplicate`, `wontfix`, `closed`.
    pub state: String,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub reporter: Option<UserRef>,

    #[serde(default)]
    pub updated_on: Option<String>,

    #[serde(default)]
    pub links: Links,
}

/// Rendered and raw issue body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueContent {
    #[serde(default)]
    pub raw: Option<String>,

    #[serde(default)]
    pub markup: Option<String>,
}
