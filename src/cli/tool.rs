//
//  bitbucket-search
//  cli/tool.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bb tool`: the tool-invocation surface from a shell.
//!
//! Lets a user or a test harness see what an agent host sees: the tool list,
//! each tool's argument schema, validation results and the `search` call.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::output::{write_json, OutputFormat, OutputWriter, TextOutput};
use crate::search::SearchOptions;
use crate::tools::{self, parse_tool_args, SearchToolArgs, ToolArgsError};

use super::{search_controller, GlobalOptions};

/// Inspect, validate and call tools
#[derive(Args, Debug)]
pub struct ToolCommand {
    #[command(subcommand)]
    pub command: ToolSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ToolSubcommand {
    /// List available tools
    #[command(visible_alias = "ls")]
    List,

    /// Print the JSON Schema of a tool's arguments
    Schema(SchemaArgs),

    /// Check a JSON payload against a tool's arguments
    Validate(PayloadArgs),

    /// Validate a payload and run the tool
    Call(PayloadArgs),
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Tool name (see `bb tool list`)
    pub name: String,
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Tool name (see `bb tool list`)
    pub name: String,

    /// Arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub args: String,
}

#[derive(Serialize)]
struct ToolSummary {
    name: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
#[serde(transparent)]
struct ToolList(Vec<ToolSummary>);

impl TextOutput for ToolList {
    fn render_text(&self) -> String {
        let width = self.0.iter().map(|t| t.name.len()).max().unwrap_or(0);
        self.0
            .iter()
            .map(|t| {
                format!(
                    "{}  {}",
                    style(format!("{:<width$}", t.name, width = width)).cyan(),
                    t.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ToolCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ToolSubcommand::List => self.list(global),
            ToolSubcommand::Schema(args) => self.schema(args),
            ToolSubcommand::Validate(args) => self.validate(args, global),
            ToolSubcommand::Call(args) => self.call(args, global).await,
        }
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let tools = ToolList(
            tools::registry()
                .iter()
                .map(|t| ToolSummary {
                    name: t.name,
                    description: t.description,
                })
                .collect(),
        );

        OutputWriter::new(OutputFormat::from_json_flag(global.json)).write(&tools)
    }

    fn schema(&self, args: &SchemaArgs) -> Result<()> {
        let tool = find(&args.name)?;
        write_json(&tool.schema())
    }

    fn validate(&self, args: &PayloadArgs, global: &GlobalOptions) -> Result<()> {
        let tool = find(&args.name)?;
        let result = parse_payload(&args.args).and_then(|payload| tool.validate(payload));

        if global.json {
            let issues = result.as_ref().err().map(|e| e.issues()).unwrap_or_default();
            write_json(&serde_json::json!({
                "tool": tool.name,
                "valid": result.is_ok(),
                "issues": issues,
            }))?;
        }

        match result {
            Ok(()) => {
                if !global.json {
                    println!(
                        "{} Arguments are valid for {}",
                        style("✓").green(),
                        style(tool.name).cyan()
                    );
                }
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn call(&self, args: &PayloadArgs, global: &GlobalOptions) -> Result<()> {
        let tool = find(&args.name)?;
        if tool.name != "search" {
            bail!(
                "Tool '{}' can be validated but not called from this CLI; only 'search' is callable",
                tool.name
            );
        }

        let search_args: SearchToolArgs = parse_tool_args(parse_payload(&args.args)?)?;

        let config = Config::load()?;
        let controller = search_controller(&config)?;
        let response = controller.search(SearchOptions::from(search_args)).await?;

        OutputWriter::new(OutputFormat::from_json_flag(global.json)).write(&response)
    }
}

fn find(name: &str) -> Result<&'static tools::ToolDefinition, ToolArgsError> {
    tools::find_tool(name).ok_or_else(|| ToolArgsError::UnknownTool(name.to_string()))
}

fn parse_payload(raw: &str) -> Result<serde_json::Value, ToolArgsError> {
    Ok(serde_json::from_str(raw)?)
}
