//
//  bitbucket-search
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for Bitbucket API
//!
//! This module provides the HTTP client for the Bitbucket Cloud REST API.
//! It handles the base URL, authentication, query strings and
//! request/response serialization.
//!
//! ## Features
//!
//! - Configurable base URL (`BB_API_URL` or `api_url` in the config file)
//! - Authentication header injection
//! - JSON deserialization
//! - Status codes mapped to [`ApiError`] variants
//! - Custom User-Agent header

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::common::ApiError;
use crate::auth::AuthCredential;
use crate::config::{normalize_api_url, Config, DEFAULT_API_URL};

/// Joins raw path segments into an API path, percent-encoding each one.
///
/// A slug containing `/`, `?` or `#` stays inside its own segment instead of
/// changing the endpoint.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::api::client::api_path;
///
/// assert_eq!(api_path(&["repositories", "myteam", "api"])?, "/repositories/myteam/api");
/// assert_eq!(api_path(&["repositories", "a/b"])?, "/repositories/a%2Fb");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn api_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse(DEFAULT_API_URL)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("{} cannot take path segments", DEFAULT_API_URL))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}

/// Parses a Bitbucket API error response into an [`ApiError`].
///
/// Bitbucket Cloud returns errors in the format:
/// ```json
/// {"type": "error", "error": {"message": "Human readable message"}}
/// ```
///
/// Some endpoints use `{"error": {"detail": "..."}}` or a bare
/// `{"message": "..."}`. If none of these match, the raw body is used as the
/// message.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
///
/// # Example
///
/// ```rust
/// use bitbucket_search::api::client::format_api_error;
/// use bitbucket_search::api::ApiError;
/// use reqwest::StatusCode;
///
/// let err = format_api_error(
///     StatusCode::NOT_FOUND,
///     r#"{"type": "error", "error": {"message": "Repository not found"}}"#,
/// );
/// assert!(matches!(err, ApiError::NotFound(ref m) if m == "Repository not found"));
/// ```
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = extract_error_message(body)
        .unwrap_or_else(|| format!("API error ({}): {}", status, body));

    match status.as_u16() {
        400 => ApiError::BadRequest(message),
        401 => ApiError::AuthFailed(message),
        403 => ApiError::Forbidden(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited,
        500..=599 => ApiError::ServerError(message),
        _ => ApiError::Unknown(message),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;

    // Cloud format: {"type": "error", "error": {"message": "..."}}
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    // Alternative Cloud format: {"error": {"detail": "..."}}
    if let Some(detail) = json
        .get("error")
        .and_then(|e| e.get("detail"))
        .and_then(|m| m.as_str())
    {
        return Some(detail.to_string());
    }

    // Simple message format: {"message": "..."}
    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// The HTTP client for the Bitbucket Cloud API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use bitbucket_search::api::BitbucketClient;
/// use bitbucket_search::auth::AuthCredential;
///
/// let client = BitbucketClient::cloud()?
///     .with_auth(AuthCredential::bearer("your-token"));
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Tests and proxies point the client elsewhere with
/// [`with_base_url`](Self::with_base_url).
pub struct BitbucketClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL without trailing slash, e.g. `https://api.bitbucket.org/2.0`
    base_url: String,
    /// Optional authentication credentials
    auth: Option<AuthCredential>,
}

impl BitbucketClient {
    /// Creates a new client for `https://api.bitbucket.org/2.0`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitbucket_search::api::BitbucketClient;
    ///
    /// let client = BitbucketClient::cloud()?;
    /// assert_eq!(client.base_url(), "https://api.bitbucket.org/2.0");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn cloud() -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("bb/{}", crate::VERSION))
                .build()?,
            base_url: DEFAULT_API_URL.to_string(),
            auth: None,
        })
    }

    /// Creates a client from the loaded configuration.
    ///
    /// The base URL is taken from [`Config::api_url`] and credentials from
    /// [`AuthCredential::from_env`]. Missing credentials are not an error;
    /// public workspaces can be searched anonymously.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut client = Self::cloud()?.with_base_url(&config.api_url());

        if let Some(auth) = AuthCredential::from_env() {
            client = client.with_auth(auth);
        } else {
            debug!("No Bitbucket credentials in environment, using anonymous access");
        }

        Ok(client)
    }

    /// Overrides the base URL. A trailing slash is removed.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_api_url(base_url);
        self
    }

    /// Sets the authentication credentials for this client.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an HTTP GET request with query parameters.
    ///
    /// Parameters are URL-encoded by reqwest. Repeated keys are sent as
    /// repeated parameters, which Bitbucket uses for filters like `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The response status is not successful (2xx); the error is an [`ApiError`]
    /// - The response body cannot be deserialized to type `T`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitbucket_search::api::BitbucketClient;
    /// use bitbucket_search::api::common::PaginatedResponse;
    /// use bitbucket_search::api::cloud::Repository;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BitbucketClient::cloud()?;
    /// let page: PaginatedResponse<Repository> = client
    ///     .get_with_query(
    ///         "/repositories/myteam",
    ///         &[("q", r#"name ~ "api""#.to_string()), ("pagelen", "10".to_string())],
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text).into());
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_error_cloud_message() {
        let err = format_api_error(
            StatusCode::FORBIDDEN,
            r#"{"type": "error", "error": {"message": "Access denied"}}"#,
        );
        assert!(matches!(err, ApiError::Forbidden(ref m) if m == "Access denied"));
    }

    #[test]
    fn test_format_api_error_detail_and_raw_body() {
        let err = format_api_error(StatusCode::BAD_REQUEST, r#"{"error": {"detail": "bad q"}}"#);
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "bad q"));

        let err = format_api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, ApiError::ServerError(ref m) if m.contains("upstream down")));
    }

    #[test]
    fn test_format_api_error_status_mapping() {
        assert!(matches!(
            format_api_error(StatusCode::UNAUTHORIZED, "{}"),
            ApiError::AuthFailed(_)
        ));
        assert!(matches!(
            format_api_error(StatusCode::TOO_MANY_REQUESTS, "{}"),
            ApiError::RateLimited
        ));
        assert!(matches!(
            format_api_error(StatusCode::IM_A_TEAPOT, "{}"),
            ApiError::Unknown(_)
        ));
    }

    #[test]
    fn test_api_path_encodes_each_segment() {
        assert_eq!(
            api_path(&["workspaces", "myteam", "search", "code"]).unwrap(),
            "/workspaces/myteam/search/code"
        );
        assert_eq!(
            api_path(&["repositories", "a/b", "x?y#z", "pullrequests"]).unwrap(),
            "/repositories/a%2Fb/x%3Fy%23z/pullrequests"
        );
        assert_eq!(api_path(&["repositories", "my team"]).unwrap(), "/repositories/my%20team");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = BitbucketClient::cloud()
            .unwrap()
            .with_base_url("http://127.0.0.1:1234/");
        assert_eq!(client.base_url(), "http://127.0.0.1:1234");
    }

    #[tokio::test]
    async fn test_get_maps_not_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/workspaces/missing")
            .with_status(404)
            .with_body(r#"{"type": "error", "error": {"message": "No workspace"}}"#)
            .create_async()
            .await;

        let client = BitbucketClient::cloud().unwrap().with_base_url(&server.url());
        let err = client
            .get_with_query::<serde_json::Value>("/workspaces/missing", &[])
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::NotFound(m)) if m == "No workspace"
        ));
    }
}
