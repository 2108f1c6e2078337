//
//  bitbucket-search
//  api/cloud/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud repository API types.
//!
//! Returned by `GET /repositories/{workspace}` (repository search) and embedded
//! in code search results and pull requests.
//!
//! # Notes
//!
//! - Repository slugs are URL-safe versions of repository names
//! - The `full_name` field follows the format `{workspace}/{repo_slug}`

use serde::{Deserialize, Serialize};

use crate::api::common::Links;

/// Represents a Bitbucket Cloud repository.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::api::cloud::Repository;
///
/// let repo: Repository = serde_json::from_str(r#"{
///     "name": "Project API",
///     "full_name": "myteam/project-api",
///     "slug": "project-api",
///     "is_private": true,
///     "mainbranch": {"name": "main", "type": "branch"}
/// }"#).unwrap();
///
/// assert_eq!(repo.main_branch(), Some("main"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Unique identifier (with curly braces).
    #[serde(default)]
    pub uuid: Option<String>,

    /// Display name.
    pub name: String,

    /// `{workspace}/{slug}`.
    pub full_name: String,

    /// URL-safe identifier.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_private: bool,

    /// Primary language as configured on the repository.
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub mainbranch: Option<Branch>,

    #[serde(default)]
    pub project: Option<ProjectRef>,

    #[serde(default)]
    pub updated_on: Option<String>,

    #[serde(default)]
    pub links: Links,
}

impl Repository {
    /// Name of the main branch, if the repository has one.
    pub fn main_branch(&self) -> Option<&str> {
        self.mainbranch.as_ref().map(|b| b.name.as_str())
    }
}

/// A branch reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,

    #[serde(default, rename = "type")]
    pub branch_type: Option<String>,
}

/// Project a repository belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    #[serde(default)]
    pub uuid: Option<String>,

    pub key: String,

    #[serde(default)]
    pub name: Option<String>,
}

/// Minimal repository reference embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRef {
    #[serde(default)]
    pub uuid: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    pub full_name: String,
}
