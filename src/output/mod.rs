//
//  bitbucket-search
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the CLI:
//!
//! - **Text format**: the Markdown text produced by the search handlers, printed as-is
//! - **JSON format**: the response envelope serialized for scripting and automation
//!
//! ## Architecture
//!
//! - [`json`]: JSON serialization utilities using `serde_json`
//! - [`markdown`]: Markdown builders used to shape handler responses
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: Enum representing the available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TextOutput`]: Trait for types that have a plain-text rendering
//!
//! ## Example
//!
//! ```rust,ignore
//! use bitbucket_search::output::{OutputWriter, OutputFormat};
//!
//! let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
//! writer.write(&response)?;
//! ```

mod json;
mod markdown;

pub use json::*;
pub use markdown::*;

use serde::Serialize;

/// Output format selected by the global `--json` flag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    /// Plain text (the Markdown the handlers produce).
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Writes values in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Writes a value to stdout.
    pub fn write<T: Serialize + TextOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Text => {
                println!("{}", value.render_text());
                Ok(())
            }
        }
    }
}

/// Plain-text rendering used when `--json` is not set.
pub trait TextOutput {
    fn render_text(&self) -> String;
}
