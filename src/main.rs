//
//  bitbucket-search
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bitbucket_search::api::ApiError;
use bitbucket_search::cli::{Cli, Commands};
use bitbucket_search::exit_codes;
use bitbucket_search::search::ControllerError;
use bitbucket_search::tools::ToolArgsError;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("BB_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Picks the exit code from the first recognizable error in the chain.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(api) = cause.downcast_ref::<ApiError>() {
            return api.exit_code();
        }
        if let Some(api) = cause
            .downcast_ref::<ControllerError>()
            .and_then(ControllerError::api_error)
        {
            return api.exit_code();
        }
        if cause.downcast_ref::<ToolArgsError>().is_some() {
            return exit_codes::USAGE;
        }
    }
    exit_codes::ERROR
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Tool(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("bb version {}", bitbucket_search::VERSION);
            Ok(())
        }
    }
}
