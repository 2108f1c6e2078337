//
//  bitbucket-search
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Host constants and URL normalization.

use super::HostConfig;

/// Hostname of Bitbucket Cloud, used as the config key.
pub const BITBUCKET_CLOUD: &str = "bitbucket.org";

/// Base URL of the Bitbucket Cloud REST API v2.0.
pub const DEFAULT_API_URL: &str = "https://api.bitbucket.org/2.0";

/// A fresh host entry for Bitbucket Cloud.
pub fn cloud_host_config() -> HostConfig {
    HostConfig {
        host: BITBUCKET_CLOUD.to_string(),
        ..Default::default()
    }
}

/// Trims whitespace and trailing slashes from an API base URL.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::config::normalize_api_url;
///
/// assert_eq!(normalize_api_url(" https://api.bitbucket.org/2.0/ "), "https://api.bitbucket.org/2.0");
/// ```
pub fn normalize_api_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
