//
//  bitbucket-search
//  api/cloud/pullrequests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud pull request API types.
//!
//! Returned by `GET /repositories/{workspace}/{repo}/pullrequests`, which both
//! pull request search and `pullrequest` content search query with BBQL.
//!
//! # Pull Request States
//!
//! * `OPEN` - Active pull request awaiting review/merge
//! * `MERGED` - Pull request has been merged
//! * `DECLINED` - Pull request was rejected
//! * `SUPERSEDED` - Pull request was replaced by another

use serde::{Deserialize, Serialize};

use super::repositories::{Branch, RepositoryRef};
use crate::api::common::{Links, UserRef};

/// Every state Bitbucket knows. Search sends all of them because the
/// endpoint otherwise only returns `OPEN` pull requests.
pub const ALL_STATES: [&str; 4] = ["OPEN", "MERGED", "DECLINED", "SUPERSEDED"];

/// Represents a Bitbucket Cloud pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Sequential number within the repository.
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// One of [`ALL_STATES`].
    pub state: String,

    #[serde(default)]
    pub author: Option<UserRef>,

    pub source: PrBranchRef,

    pub destination: PrBranchRef,

    #[serde(default)]
    pub created_on: Option<String>,

    #[serde(default)]
    pub updated_on: Option<String>,

    #[serde(default)]
    pub comment_count: u32,

    #[serde(default)]
    pub links: Links,
}

/// Source or destination side of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrBranchRef {
    pub branch: Branch,

    #[serde(default)]
    pub repository: Option<RepositoryRef>,
}
