//
//  bitbucket-search
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitbucket Search Library
//!
//! Search Bitbucket Cloud code, content, repositories and pull requests from
//! the command line or from an agent tool call.
//!
//! ## Overview
//!
//! The library is a thin dispatch layer in front of the Bitbucket Cloud REST API.
//! A request arrives either as CLI flags (`bb search ...`) or as a JSON tool
//! payload, is validated, normalized (default workspace, scope and page size),
//! and routed to exactly one scope handler which issues a single upstream query
//! and formats the results as Markdown.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`search`]: Search options, dispatch controller, scope handlers
//! - [`tools`]: Tool argument schemas and validation
//! - [`api`]: HTTP client and Bitbucket Cloud payload types
//! - [`auth`]: Credentials passed through from the environment
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Markdown, JSON, styled messages)
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bitbucket_search::search::{SearchController, SearchOptions, StaticWorkspace};
//! use bitbucket_search::search::CloudSearchHandler;
//! use bitbucket_search::api::BitbucketClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let handler = CloudSearchHandler::new(BitbucketClient::cloud()?);
//! let controller = SearchController::new(handler, StaticWorkspace::new(Some("myteam".into())));
//!
//! let response = controller
//!     .search(SearchOptions::new("TODO"))
//!     .await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Model
//!
//! | Failure | Surface |
//! |---------|---------|
//! | Missing workspace, missing repository for PR search, unknown scope | `Ok` response whose content starts with `Error: ` |
//! | Network failure, upstream API error, default workspace lookup error | `Err(ControllerError)` with context |

/// Command-line interface definitions.
///
/// Contains the `search`, `tool` and `config` commands defined using the clap
/// derive API.
pub mod cli;

/// Search dispatch.
///
/// Caller options, default application, scope parsing, the dispatch
/// controller and the scope handlers that talk to Bitbucket Cloud.
pub mod search;

/// Tool argument schemas.
///
/// serde/schemars types describing the arguments accepted by every tool
/// operation, with validation that reports structured issues instead of
/// failing.
pub mod tools;

/// API client implementations for Bitbucket Cloud.
///
/// The client handles authentication headers, request building and error
/// mapping. Payload types live under [`api::cloud`].
pub mod api;

/// Credential passthrough.
///
/// Reads a bearer token or username/app password pair from the environment.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/bb/config.toml`
/// - macOS: `~/Library/Application Support/bb/config.toml`
/// - Windows: `%APPDATA%\bb\config.toml`
pub mod config;

/// Output formatting.
///
/// Markdown builders used by the scope handlers, JSON writers for `--json`,
/// and styled stderr messages.
pub mod output;

/// Utility functions and helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "bb";

/// Application version constant.
///
/// Derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use bitbucket_search::VERSION;
///
/// println!("bb version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Also used when tool arguments fail validation.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// Set `BB_TOKEN`, or `BB_USERNAME` and `BB_APP_PASSWORD`.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The workspace or repository does not exist, or the credentials cannot
    /// see it.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    ///
    /// Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
