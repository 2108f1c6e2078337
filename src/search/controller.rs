//
//  bitbucket-search
//  search/controller.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Search Controller
//!
//! Normalizes a [`SearchOptions`] and routes it to exactly one
//! [`SearchHandler`] method.
//!
//! Problems the caller can fix come back as `Ok` responses starting with
//! `Error: `. Anything that goes wrong talking to Bitbucket, including the
//! default workspace lookup, comes back as a [`ControllerError`].

use thiserror::Error;
use tracing::{debug, warn};

use super::{
    ContentType, ControllerResponse, DefaultWorkspace, ResolvedSearchParams, SearchHandler,
    SearchOptions, SearchScope,
};
use crate::api::ApiError;

const ENTITY_TYPE: &str = "Search";
const OPERATION: &str = "search";
const SOURCE_ID: &str = "search/controller.rs@search";

/// An unexpected failure during a search, with the request that caused it.
#[derive(Debug, Error)]
#[error("{entity_type} operation '{operation}' failed")]
pub struct ControllerError {
    pub entity_type: &'static str,
    pub operation: &'static str,
    /// `file@function` where the failure was caught.
    pub source_id: &'static str,
    /// The caller's options as received, before any defaulting.
    pub options: serde_json::Value,
    #[source]
    pub cause: anyhow::Error,
}

impl ControllerError {
    fn wrap(options: &SearchOptions, cause: anyhow::Error) -> Self {
        Self {
            entity_type: ENTITY_TYPE,
            operation: OPERATION,
            source_id: SOURCE_ID,
            options: serde_json::to_value(options).unwrap_or_else(|e| {
                debug!("Could not record search options: {}", e);
                serde_json::Value::Null
            }),
            cause,
        }
    }

    /// The upstream API error behind this failure, if there is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        self.cause.chain().find_map(|e| e.downcast_ref::<ApiError>())
    }
}

/// Routes search requests to a [`SearchHandler`].
///
/// # Example
///
/// ```rust,no_run
/// use bitbucket_search::api::BitbucketClient;
/// use bitbucket_search::search::{CloudSearchHandler, SearchController, SearchOptions, StaticWorkspace};
///
/// # async fn example() -> anyhow::Result<()> {
/// let handler = CloudSearchHandler::new(BitbucketClient::cloud()?);
/// let controller = SearchController::new(handler, StaticWorkspace::new(Some("myteam".into())));
///
/// let response = controller
///     .search(SearchOptions::new("TODO").with_scope("repos"))
///     .await?;
/// println!("{}", response.content);
/// # Ok(())
/// # }
/// ```
pub struct SearchController<H, W> {
    handler: H,
    workspace: W,
    defaults: SearchOptions,
}

impl<H: SearchHandler, W: DefaultWorkspace> SearchController<H, W> {
    pub fn new(handler: H, workspace: W) -> Self {
        Self {
            handler,
            workspace,
            defaults: SearchOptions::defaults(),
        }
    }

    /// Runs one search.
    ///
    /// # Errors
    ///
    /// Returns a [`ControllerError`] when the default workspace lookup or the
    /// handler fails. Missing workspace, unknown scope and a pull request
    /// search without a repository are `Ok` responses starting with `Error: `.
    pub async fn search(
        &self,
        options: SearchOptions,
    ) -> Result<ControllerResponse, ControllerError> {
        let original = options.clone();
        self.dispatch(options).await.map_err(|cause| {
            warn!("Search failed: {:#}", cause);
            ControllerError::wrap(&original, cause)
        })
    }

    async fn dispatch(&self, mut options: SearchOptions) -> anyhow::Result<ControllerResponse> {
        // An empty slug counts as not given.
        options.workspace_slug = non_empty(options.workspace_slug);
        options.repo_slug = non_empty(options.repo_slug);

        if options.workspace_slug.is_none() {
            options.workspace_slug = non_empty(self.workspace.resolve().await?);
        }

        let options = options.or_defaults(&self.defaults);
        let content_type = options.content_type.as_deref().map(ContentType::coerce);

        let Some(workspace_slug) = options.workspace_slug.clone() else {
            return Ok(ControllerResponse::error(
                "Please provide a workspace to search in (or ensure a default workspace is configured).",
            ));
        };

        let raw_scope = options.scope.as_deref().unwrap_or_default();
        let Some(scope) = SearchScope::from_name(raw_scope) else {
            return Ok(ControllerResponse::error(format!(
                "Unknown search scope \"{}\". Supported types are: {}.",
                raw_scope,
                SearchScope::supported_list()
            )));
        };

        let params = ResolvedSearchParams {
            workspace_slug,
            repo_slug: options.repo_slug,
            query: options.query,
            scope,
            content_type,
            language: options.language,
            extension: options.extension,
            limit: options.limit.unwrap_or(super::DEFAULT_PAGE_SIZE),
            cursor: options.cursor,
        };

        debug!(
            "Searching {} in {} for {:?}",
            params.scope, params.workspace_slug, params.query
        );

        match params.scope {
            SearchScope::Code => self.handler.search_code(&params).await,
            SearchScope::Content => self.handler.search_content(&params).await,
            SearchScope::Repositories => self.handler.search_repositories(&params).await,
            SearchScope::PullRequests => match params.repo_slug.as_deref() {
                Some(repo_slug) => self.handler.search_pull_requests(&params, repo_slug).await,
                None => Ok(ControllerResponse::error(
                    "Repository is required for pull request search.",
                )),
            },
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
