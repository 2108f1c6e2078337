//
//  bitbucket-search
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod search;
mod tool;

pub use config::ConfigCommand;
pub use search::SearchCommand;
pub use tool::ToolCommand;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::BitbucketClient;
use crate::config::Config;
use crate::search::{CloudSearchHandler, ConfiguredWorkspace, SearchController};

/// Bitbucket Search - Search Bitbucket Cloud from the command line
#[derive(Parser, Debug)]
#[command(
    name = "bb",
    version,
    about = "Search Bitbucket Cloud from the command line",
    long_about = "bb searches Bitbucket Cloud code, content, repositories and pull requests.\n\n\
                  The same search is available to agents as the `search` tool.",
    propagate_version = true,
    after_help = "Use 'bb <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search code, content, repositories or pull requests
    #[command(visible_alias = "s")]
    Search(SearchCommand),

    /// Inspect, validate and call tool operations
    Tool(ToolCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

/// The controller the CLI searches through.
pub type CliSearchController = SearchController<CloudSearchHandler, ConfiguredWorkspace>;

/// Builds the search controller from the loaded configuration and the
/// credentials in the environment.
pub(crate) fn search_controller(config: &Config) -> Result<CliSearchController> {
    let client = Arc::new(BitbucketClient::from_config(config)?);
    let workspace = ConfiguredWorkspace::new(
        config.default_workspace().map(String::from),
        Arc::clone(&client),
    );
    Ok(SearchController::new(
        CloudSearchHandler::new(client),
        workspace,
    ))
}
