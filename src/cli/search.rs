//
//  bitbucket-search
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bb search`
//!
//! Translates flags into [`SearchOptions`] and prints the controller's
//! response. In-band `Error:` responses are printed like any other result
//! and exit successfully.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};
use crate::search::{Cursor, SearchOptions};

use super::{search_controller, GlobalOptions};

/// Search Bitbucket Cloud
#[derive(Args, Debug)]
#[command(after_help = "Examples:\n  \
    bb search -q TODO -w myteam\n  \
    bb search -q 'auth service' -t repos\n  \
    bb search -q bug -t prs -r api\n  \
    bb search -q crash -t content -c issue -r api")]
pub struct SearchCommand {
    /// Search query text
    #[arg(long, short = 'q')]
    pub query: String,

    /// Workspace slug (defaults to the configured workspace)
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,

    /// Repository slug (required for pull request search)
    #[arg(long, short = 'r')]
    pub repo: Option<String>,

    /// Search scope: code, content, repositories (repos), pullrequests (prs)
    #[arg(long = "type", short = 't', default_value = "code")]
    pub scope: String,

    /// Content type for content search: code, issue, pullrequest
    #[arg(long, short = 'c')]
    pub content_type: Option<String>,

    /// Filter code search by language
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Filter code search by file extension
    #[arg(long, short = 'e')]
    pub extension: Option<String>,

    /// Maximum number of results (1-100)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,

    /// Page cursor from a previous result's footer
    #[arg(long)]
    pub cursor: Option<String>,
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let controller = search_controller(&config)?;

        let options = self.options();
        debug!("bb search {:?}", options);

        let response = controller.search(options).await?;

        OutputWriter::new(OutputFormat::from_json_flag(global.json)).write(&response)
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            workspace_slug: self.workspace.clone(),
            repo_slug: self.repo.clone(),
            query: self.query.clone(),
            scope: Some(self.scope.clone()),
            content_type: self.content_type.clone(),
            language: self.language.clone(),
            extension: self.extension.clone(),
            limit: Some(self.limit),
            cursor: self.cursor.clone().map(Cursor::from),
        }
    }
}
