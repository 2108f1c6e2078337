//
//  bitbucket-search
//  output/markdown.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Markdown Builders
//!
//! Helpers for the Markdown the search handlers return. The output is valid
//! CommonMark so agents can pass it on and terminals show it legibly as-is.
//!
//! | Function | Element | Output |
//! |----------|---------|--------|
//! | [`md_header`] | Headers | `# Title` |
//! | [`md_bold`] | Bold text | `**text**` |
//! | [`md_italic`] | Italic text | `*text*` |
//! | [`md_inline_code`] | Inline code | `` `code` `` |
//! | [`md_list`] | Bullet lists | `- item` |
//! | [`md_link`] | Links | `[text](url)` |

pub fn md_header(level: u8, text: &str) -> String {
    let prefix = "#".repeat(level as usize);
    format!("{} {}", prefix, text)
}

pub fn md_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps `text` in backticks, using a longer fence if it contains one.
pub fn md_inline_code(text: &str) -> String {
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

pub fn md_bold(text: &str) -> String {
    format!("**{}**", text)
}

pub fn md_italic(text: &str) -> String {
    format!("*{}*", text)
}

pub fn md_link(text: &str, url: &str) -> String {
    format!("[{}]({})", text, url)
}
