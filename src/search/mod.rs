//
//  bitbucket-search
//  search/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Search Dispatch
//!
//! Everything between a parsed request and the upstream API call.
//!
//! ## Flow
//!
//! ```text
//! SearchOptions ──> SearchController::search
//!                     1. default workspace      (DefaultWorkspace)
//!                     2. scope/limit defaults   (SearchOptions::or_defaults)
//!                     3. content type coercion  (ContentType::coerce)
//!                     4. workspace required
//!                     5. match SearchScope ──> SearchHandler (one request)
//!                                                  └─> ControllerResponse
//! ```
//!
//! ## Components
//!
//! - [`SearchOptions`], [`ResolvedSearchParams`], [`Cursor`], [`ContentType`]: request shapes
//! - [`SearchScope`]: the four search categories
//! - [`SearchController`]: normalization and routing
//! - [`SearchHandler`] / [`CloudSearchHandler`]: one upstream query per scope
//! - [`DefaultWorkspace`]: fallback workspace lookup
//! - [`ControllerResponse`] / [`ControllerError`]: the two result channels

mod controller;
mod format;
mod handlers;
mod options;
mod query;
mod scope;
mod workspace;

pub use controller::*;
pub use handlers::*;
pub use options::*;
pub use scope::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

use crate::output::TextOutput;

/// Page size used when the caller does not pass a limit.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest page size Bitbucket accepts for search endpoints.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Prefix marking a user-correctable problem reported in-band.
pub const ERROR_PREFIX: &str = "Error: ";

/// The `{content}` envelope every handler and the controller return.
///
/// Problems the caller can fix (a missing workspace, an unknown scope) are
/// reported as a normal response whose content starts with `Error: `.
/// Transport and upstream failures are [`ControllerError`]s instead.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::search::ControllerResponse;
///
/// let ok = ControllerResponse::new("# Results");
/// assert!(!ok.is_error());
///
/// let err = ControllerResponse::error("Repository is required for pull request search.");
/// assert_eq!(err.content, "Error: Repository is required for pull request search.");
/// assert!(err.is_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerResponse {
    pub content: String,
}

impl ControllerResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// An in-band error response.
    pub fn error(message: impl AsRef<str>) -> Self {
        Self::new(format!("{}{}", ERROR_PREFIX, message.as_ref()))
    }

    /// True if this response carries an in-band error.
    pub fn is_error(&self) -> bool {
        self.content.starts_with(ERROR_PREFIX)
    }
}

impl TextOutput for ControllerResponse {
    fn render_text(&self) -> String {
        self.content.clone()
    }
}
