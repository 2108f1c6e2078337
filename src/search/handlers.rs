//
//  bitbucket-search
//  search/handlers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Scope Handlers
//!
//! One upstream query per scope. The controller decides which handler runs;
//! handlers only build the request and shape the page into Markdown.
//!
//! | Scope | Endpoint |
//! |-------|----------|
//! | code | `GET /workspaces/{ws}/search/code` |
//! | content | code search, issues or pull requests by content type |
//! | repositories | `GET /repositories/{ws}` with a BBQL `q` |
//! | pullrequests | `GET /repositories/{ws}/{repo}/pullrequests` with a BBQL `q` |

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::format;
use super::query::{bbql_quote, code_search_query, page_params, text_match};
use super::{ContentType, ControllerResponse, ResolvedSearchParams};
use crate::api::cloud::issues::Issue;
use crate::api::cloud::pullrequests::{PullRequest, ALL_STATES};
use crate::api::cloud::search::CodeSearchPage;
use crate::api::cloud::Repository;
use crate::api::common::PaginatedResponse;
use crate::api::client::api_path;
use crate::api::BitbucketClient;

/// Runs one search against one scope.
///
/// Implementations return in-band `Error:` responses for problems the caller
/// can fix and `Err` for transport or upstream failures.
#[async_trait]
pub trait SearchHandler: Send + Sync {
    async fn search_code(&self, params: &ResolvedSearchParams) -> Result<ControllerResponse>;

    async fn search_content(&self, params: &ResolvedSearchParams) -> Result<ControllerResponse>;

    async fn search_repositories(
        &self,
        params: &ResolvedSearchParams,
    ) -> Result<ControllerResponse>;

    /// `repo_slug` is checked by the controller before this is called.
    async fn search_pull_requests(
        &self,
        params: &ResolvedSearchParams,
        repo_slug: &str,
    ) -> Result<ControllerResponse>;
}

/// [`SearchHandler`] backed by the Bitbucket Cloud REST API.
pub struct CloudSearchHandler {
    client: Arc<BitbucketClient>,
}

impl CloudSearchHandler {
    pub fn new(client: impl Into<Arc<BitbucketClient>>) -> Self {
        Self {
            client: client.into(),
        }
    }

    async fn code_page(
        &self,
        params: &ResolvedSearchParams,
        search_query: String,
    ) -> Result<ControllerResponse> {
        let path = api_path(&["workspaces", &params.workspace_slug, "search", "code"])?;
        let mut query = vec![("search_query", search_query)];
        query.extend(page_params(params.limit, params.cursor.as_ref()));

        debug!("Code search in {}: {:?}", params.workspace_slug, query);
        let page: CodeSearchPage = self.client.get_with_query(&path, &query).await?;

        Ok(ControllerResponse::new(format::code_results(
            &params.query,
            &page,
        )))
    }

    async fn pull_request_page(
        &self,
        params: &ResolvedSearchParams,
        repo_slug: &str,
    ) -> Result<ControllerResponse> {
        let path = api_path(&["repositories", &params.workspace_slug, repo_slug, "pullrequests"])?;
        let mut query = vec![("q", text_match(&["title", "description"], &params.query))];
        // Without explicit states Bitbucket only returns open pull requests.
        query.extend(ALL_STATES.iter().map(|s| ("state", s.to_string())));
        query.extend(page_params(params.limit, params.cursor.as_ref()));

        let page: PaginatedResponse<PullRequest> =
            self.client.get_with_query(&path, &query).await?;

        Ok(ControllerResponse::new(format::pull_request_results(
            &params.query,
            repo_slug,
            &page,
        )))
    }

    async fn issue_page(
        &self,
        params: &ResolvedSearchParams,
        repo_slug: &str,
    ) -> Result<ControllerResponse> {
        let path = api_path(&["repositories", &params.workspace_slug, repo_slug, "issues"])?;
        let mut query = vec![("q", text_match(&["title", "content.raw"], &params.query))];
        query.extend(page_params(params.limit, params.cursor.as_ref()));

        let page: PaginatedResponse<Issue> = self.client.get_with_query(&path, &query).await?;

        Ok(ControllerResponse::new(format::issue_results(
            &params.query,
            repo_slug,
            &page,
        )))
    }
}

#[async_trait]
impl SearchHandler for CloudSearchHandler {
    async fn search_code(&self, params: &ResolvedSearchParams) -> Result<ControllerResponse> {
        let search_query = code_search_query(
            &params.query,
            params.repo_slug.as_deref(),
            params.language.as_deref(),
            params.extension.as_deref(),
        );
        self.code_page(params, search_query).await
    }

    async fn search_content(&self, params: &ResolvedSearchParams) -> Result<ControllerResponse> {
        match &params.content_type {
            None | Some(ContentType::Code) => {
                let search_query =
                    code_search_query(&params.query, params.repo_slug.as_deref(), None, None);
                self.code_page(params, search_query).await
            }
            Some(content_type @ (ContentType::Issue | ContentType::PullRequest)) => {
                let Some(repo_slug) = params.repo_slug.as_deref() else {
                    return Ok(ControllerResponse::error(format!(
                        "Repository is required for {} content search.",
                        content_type
                    )));
                };
                if *content_type == ContentType::Issue {
                    self.issue_page(params, repo_slug).await
                } else {
                    self.pull_request_page(params, repo_slug).await
                }
            }
            Some(other) => Ok(ControllerResponse::error(format!(
                "Content type \"{}\" is not supported for content search. Supported types are: code, issue, pullrequest.",
                other
            ))),
        }
    }

    async fn search_repositories(
        &self,
        params: &ResolvedSearchParams,
    ) -> Result<ControllerResponse> {
        let path = api_path(&["repositories", &params.workspace_slug])?;
        let mut filter = text_match(&["name", "description"], &params.query);
        if let Some(repo) = &params.repo_slug {
            filter.push_str(&format!(" AND slug = {}", bbql_quote(repo)));
        }

        let mut query = vec![("q", filter)];
        query.extend(page_params(params.limit, params.cursor.as_ref()));

        let page: PaginatedResponse<Repository> =
            self.client.get_with_query(&path, &query).await?;

        Ok(ControllerResponse::new(format::repository_results(
            &params.query,
            &page,
        )))
    }

    async fn search_pull_requests(
        &self,
        params: &ResolvedSearchParams,
        repo_slug: &str,
    ) -> Result<ControllerResponse> {
        self.pull_request_page(params, repo_slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Cursor, SearchScope};
    use mockito::Matcher;

    fn params(scope: SearchScope) -> ResolvedSearchParams {
        ResolvedSearchParams {
            workspace_slug: "myteam".to_string(),
            repo_slug: None,
            query: "TODO".to_string(),
            scope,
            content_type: None,
            language: None,
            extension: None,
            limit: 25,
            cursor: None,
        }
    }

    fn handler(server: &mockito::ServerGuard) -> CloudSearchHandler {
        CloudSearchHandler::new(BitbucketClient::cloud().unwrap().with_base_url(&server.url()))
    }

    #[tokio::test]
    async fn test_code_search_builds_modifiers_and_cursor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces/myteam/search/code")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "search_query".into(),
                    "TODO repo:api lang:python ext:py".into(),
                ),
                Matcher::UrlEncoded("pagelen".into(), "10".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"values": [], "size": 0}"#)
            .create_async()
            .await;

        let mut p = params(SearchScope::Code);
        p.repo_slug = Some("api".into());
        p.language = Some("python".into());
        p.extension = Some(".py".into());
        p.limit = 10;
        p.cursor = Some(Cursor::Page(2));

        let response = handler(&server).search_code(&p).await.unwrap();
        mock.assert_async().await;
        assert!(response.content.contains("No code results found matching \"TODO\"."));
    }

    #[tokio::test]
    async fn test_repository_search_filters_by_slug() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repositories/myteam")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "q".into(),
                    r#"(name ~ "TODO" OR description ~ "TODO") AND slug = "api""#.into(),
                ),
                Matcher::UrlEncoded("pagelen".into(), "25".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"values": [{"name": "api", "full_name": "myteam/api"}], "size": 1}"#)
            .create_async()
            .await;

        let mut p = params(SearchScope::Repositories);
        p.repo_slug = Some("api".into());

        let response = handler(&server).search_repositories(&p).await.unwrap();
        mock.assert_async().await;
        assert!(response.content.contains("## api"));
    }

    #[tokio::test]
    async fn test_slugs_stay_inside_their_path_segment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repositories/myteam/a%2Fb/pullrequests")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"values": []}"#)
            .create_async()
            .await;

        handler(&server)
            .search_pull_requests(&params(SearchScope::PullRequests), "a/b")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_pull_request_search_requests_all_states() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repositories/myteam/api/pullrequests")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded(
                    "q".into(),
                    r#"(title ~ "TODO" OR description ~ "TODO")"#.into(),
                ),
                // Repeated keys collapse in UrlEncoded, so match them in the raw query.
                Matcher::Regex(
                    "state=OPEN&state=MERGED&state=DECLINED&state=SUPERSEDED".into(),
                ),
            ]))
            .with_status(200)
            .with_body(r#"{"values": []}"#)
            .create_async()
            .await;

        let response = handler(&server)
            .search_pull_requests(&params(SearchScope::PullRequests), "api")
            .await
            .unwrap();
        mock.assert_async().await;
        assert!(response.content.contains("No pull requests found"));
    }

    #[tokio::test]
    async fn test_content_search_issues() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repositories/myteam/api/issues")
            .match_query(Matcher::UrlEncoded(
                "q".into(),
                r#"(title ~ "TODO" OR content.raw ~ "TODO")"#.into(),
            ))
            .with_status(200)
            .with_body(r#"{"values": [{"id": 4, "title": "Crash", "state": "open"}]}"#)
            .create_async()
            .await;

        let mut p = params(SearchScope::Content);
        p.repo_slug = Some("api".into());
        p.content_type = Some(ContentType::Issue);

        let response = handler(&server).search_content(&p).await.unwrap();
        mock.assert_async().await;
        assert!(response.content.contains("## #4: Crash"));
    }

    #[tokio::test]
    async fn test_content_search_in_band_errors_make_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let handler = handler(&server);

        let mut p = params(SearchScope::Content);
        p.content_type = Some(ContentType::PullRequest);
        let response = handler.search_content(&p).await.unwrap();
        assert_eq!(
            response.content,
            "Error: Repository is required for pullrequest content search."
        );

        p.content_type = Some(ContentType::Other("snippet".into()));
        let response = handler.search_content(&p).await.unwrap();
        assert_eq!(
            response.content,
            "Error: Content type \"snippet\" is not supported for content search. Supported types are: code, issue, pullrequest."
        );

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upstream_failure_is_err() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/repositories/myteam")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"type": "error", "error": {"message": "Bad credentials"}}"#)
            .create_async()
            .await;

        let err = handler(&server)
            .search_repositories(&params(SearchScope::Repositories))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::api::ApiError>(),
            Some(crate::api::ApiError::AuthFailed(m)) if m == "Bad credentials"
        ));
    }
}
