//
//  bitbucket-search
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Credential Passthrough
//!
//! The search CLI does not log users in. It picks up credentials that are
//! already present in the environment and attaches them to every request.
//!
//! ## Supported Credentials
//!
//! | Variables | Header |
//! |-----------|--------|
//! | `BB_TOKEN` | `Authorization: Bearer <token>` (repository/workspace access token) |
//! | `BB_USERNAME` + `BB_APP_PASSWORD` | `Authorization: Basic ...` (app password) |
//! | `ATLASSIAN_BITBUCKET_USERNAME` + `ATLASSIAN_BITBUCKET_APP_PASSWORD` | same, fallback names |
//!
//! A bearer token wins when both kinds are set.

use reqwest::RequestBuilder;

/// Credentials applied to outgoing API requests.
#[derive(Clone)]
pub enum AuthCredential {
    /// Repository, project or workspace access token.
    Bearer { token: String },

    /// Username and app password.
    AppPassword { username: String, password: String },
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f.debug_struct("Bearer").finish_non_exhaustive(),
            Self::AppPassword { username, .. } => f
                .debug_struct("AppPassword")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

impl AuthCredential {
    /// Creates a bearer credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates an app password credential.
    pub fn app_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::AppPassword {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads credentials from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through `lookup`, treating empty values as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_search::auth::AuthCredential;
    ///
    /// let cred = AuthCredential::from_lookup(|key| match key {
    ///     "BB_USERNAME" => Some("alice".to_string()),
    ///     "BB_APP_PASSWORD" => Some("secret".to_string()),
    ///     _ => None,
    /// });
    /// assert!(matches!(cred, Some(AuthCredential::AppPassword { .. })));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get("BB_TOKEN") {
            return Some(Self::bearer(token));
        }

        let username = get("BB_USERNAME").or_else(|| get("ATLASSIAN_BITBUCKET_USERNAME"))?;
        let password =
            get("BB_APP_PASSWORD").or_else(|| get("ATLASSIAN_BITBUCKET_APP_PASSWORD"))?;

        Some(Self::app_password(username, password))
    }

    /// Adds the authorization header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer { token } => request.bearer_auth(token),
            Self::AppPassword { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_bearer_takes_precedence() {
        let cred = AuthCredential::from_lookup(lookup(&[
            ("BB_TOKEN", "tok"),
            ("BB_USERNAME", "alice"),
            ("BB_APP_PASSWORD", "pw"),
        ]));
        assert!(matches!(cred, Some(AuthCredential::Bearer { token }) if token == "tok"));
    }

    #[test]
    fn test_atlassian_fallback_names() {
        let cred = AuthCredential::from_lookup(lookup(&[
            ("ATLASSIAN_BITBUCKET_USERNAME", "bob"),
            ("ATLASSIAN_BITBUCKET_APP_PASSWORD", "pw"),
        ]));
        assert!(
            matches!(cred, Some(AuthCredential::AppPassword { username, .. }) if username == "bob")
        );
    }

    #[test]
    fn test_incomplete_or_empty_is_none() {
        assert!(AuthCredential::from_lookup(lookup(&[("BB_USERNAME", "alice")])).is_none());
        assert!(AuthCredential::from_lookup(lookup(&[("BB_TOKEN", "  ")])).is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", AuthCredential::app_password("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
