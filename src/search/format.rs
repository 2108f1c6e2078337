//
//  bitbucket-search
//  search/format.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Markdown rendering of upstream search pages.
//!
//! Every page renders as a level-1 heading, one level-2 section per result,
//! and a footer with the result count and the next page cursor.

use crate::api::cloud::issues::Issue;
use crate::api::cloud::pullrequests::PullRequest;
use crate::api::cloud::search::{CodeSearchPage, CodeSearchResult};
use crate::api::cloud::Repository;
use crate::api::common::PaginatedResponse;
use crate::output::{md_bold, md_header, md_inline_code, md_italic, md_link, md_list};
use crate::util::{first_line, format_timestamp, truncate};

const DESCRIPTION_WIDTH: usize = 200;

pub(crate) fn code_results(query: &str, response: &CodeSearchPage) -> String {
    let page = &response.page;
    let mut sections = vec![md_header(
        1,
        &format!("Code Search Results: \"{}\"", query),
    )];

    if response.query_substituted {
        sections.push(md_italic(
            "Bitbucket adjusted the query before running it; results may differ from the literal input.",
        ));
    }

    if page.values.is_empty() {
        sections.push(no_results("code results", query));
        return sections.join("\n\n");
    }

    sections.extend(page.values.iter().map(code_result));
    sections.push(footer(page));
    sections.join("\n\n")
}

fn code_result(result: &CodeSearchResult) -> String {
    let mut details = Vec::new();
    if let Some(repo) = result.repository() {
        details.push(format!("{}: {}", md_bold("Repository"), md_inline_code(repo)));
    }
    details.push(format!(
        "{}: {}",
        md_bold("Matches"),
        result.content_match_count
    ));
    if let Some(path) = result.highlighted_path() {
        details.push(format!("{}: {}", md_bold("Path match"), path));
    }
    if let Some(href) = result.file.links.html_href() {
        details.push(format!("{}: {}", md_bold("Link"), md_link(&result.file.path, href)));
    }

    let mut section = format!(
        "{}\n\n{}",
        md_header(2, &md_inline_code(&result.file.path)),
        md_list(&details)
    );

    let lines: Vec<String> = result
        .content_matches
        .iter()
        .flat_map(|m| m.lines.iter())
        .map(|l| format!("Line {}: {}", l.line, l.highlighted().trim_end()))
        .collect();
    if !lines.is_empty() {
        section.push_str("\n\n");
        section.push_str(&md_list(&lines));
    }

    section
}

pub(crate) fn repository_results(query: &str, page: &PaginatedResponse<Repository>) -> String {
    let mut sections = vec![md_header(
        1,
        &format!("Repository Search Results: \"{}\"", query),
    )];

    if page.values.is_empty() {
        sections.push(no_results("repositories", query));
        return sections.join("\n\n");
    }

    for repo in &page.values {
        let mut details = vec![
            format!("{}: {}", md_bold("Full name"), md_inline_code(&repo.full_name)),
            format!(
                "{}: {}",
                md_bold("Visibility"),
                if repo.is_private { "private" } else { "public" }
            ),
        ];
        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            details.push(format!("{}: {}", md_bold("Language"), language));
        }
        if let Some(branch) = repo.main_branch() {
            details.push(format!("{}: {}", md_bold("Main branch"), md_inline_code(branch)));
        }
        if let Some(project) = &repo.project {
            details.push(format!("{}: {}", md_bold("Project"), project.key));
        }
        if let Some(updated) = &repo.updated_on {
            details.push(format!("{}: {}", md_bold("Updated"), format_timestamp(updated)));
        }
        if let Some(href) = repo.links.html_href() {
            details.push(format!("{}: {}", md_bold("Link"), md_link(&repo.full_name, href)));
        }

        let mut section = md_header(2, &repo.name);
        if let Some(description) = repo.description.as_deref().and_then(first_line) {
            section.push_str("\n\n");
            section.push_str(&truncate(description, DESCRIPTION_WIDTH));
        }
        section.push_str("\n\n");
        section.push_str(&md_list(&details));
        sections.push(section);
    }

    sections.push(footer(page));
    sections.join("\n\n")
}

pub(crate) fn pull_request_results(
    query: &str,
    repo_slug: &str,
    page: &PaginatedResponse<PullRequest>,
) -> String {
    let mut sections = vec![md_header(
        1,
        &format!("Pull Request Search Results in {}: \"{}\"", repo_slug, query),
    )];

    if page.values.is_empty() {
        sections.push(no_results("pull requests", query));
        return sections.join("\n\n");
    }

    for pr in &page.values {
        let mut details = vec![
            format!("{}: {}", md_bold("State"), pr.state),
            format!(
                "{}: {} → {}",
                md_bold("Branches"),
                md_inline_code(&pr.source.branch.name),
                md_inline_code(&pr.destination.branch.name)
            ),
        ];
        if let Some(author) = &pr.author {
            details.push(format!("{}: {}", md_bold("Author"), author.name));
        }
        if let Some(created) = &pr.created_on {
            details.push(format!("{}: {}", md_bold("Created"), format_timestamp(created)));
        }
        if let Some(updated) = &pr.updated_on {
            details.push(format!("{}: {}", md_bold("Updated"), format_timestamp(updated)));
        }
        if pr.comment_count > 0 {
            details.push(format!("{}: {}", md_bold("Comments"), pr.comment_count));
        }
        if let Some(href) = pr.links.html_href() {
            details.push(format!(
                "{}: {}",
                md_bold("Link"),
                md_link(&format!("PR #{}", pr.id), href)
            ));
        }

        let mut section = md_header(2, &format!("#{}: {}", pr.id, pr.title));
        if let Some(description) = pr.description.as_deref().and_then(first_line) {
            section.push_str("\n\n");
            section.push_str(&truncate(description, DESCRIPTION_WIDTH));
        }
        section.push_str("\n\n");
        section.push_str(&md_list(&details));
        sections.push(section);
    }

    sections.push(footer(page));
    sections.join("\n\n")
}

pub(crate) fn issue_results(query: &str, repo_slug: &str, page: &PaginatedResponse<Issue>) -> String {
    let mut sections = vec![md_header(
        1,
        &format!("Issue Search Results in {}: \"{}\"", repo_slug, query),
    )];

    if page.values.is_empty() {
        sections.push(no_results("issues", query));
        return sections.join("\n\n");
    }

    for issue in &page.values {
        let mut details = vec![format!("{}: {}", md_bold("State"), issue.state)];
        if let Some(kind) = &issue.kind {
            details.push(format!("{}: {}", md_bold("Kind"), kind));
        }
        if let Some(priority) = &issue.priority {
            details.push(format!("{}: {}", md_bold("Priority"), priority));
        }
        if let Some(reporter) = &issue.reporter {
            details.push(format!("{}: {}", md_bold("Reporter"), reporter.name));
        }
        if let Some(updated) = &issue.updated_on {
            details.push(format!("{}: {}", md_bold("Updated"), format_timestamp(updated)));
        }
        if let Some(href) = issue.links.html_href() {
            details.push(format!(
                "{}: {}",
                md_bold("Link"),
                md_link(&format!("Issue #{}", issue.id), href)
            ));
        }

        let mut section = md_header(2, &format!("#{}: {}", issue.id, issue.title));
        if let Some(body) = issue
            .content
            .as_ref()
            .and_then(|c| c.raw.as_deref())
            .and_then(first_line)
        {
            section.push_str("\n\n");
            section.push_str(&truncate(body, DESCRIPTION_WIDTH));
        }
        section.push_str("\n\n");
        section.push_str(&md_list(&details));
        sections.push(section);
    }

    sections.push(footer(page));
    sections.join("\n\n")
}

fn no_results(noun: &str, query: &str) -> String {
    format!("No {} found matching \"{}\".", noun, query)
}

fn footer<T>(page: &PaginatedResponse<T>) -> String {
    let shown = page.values.len();
    let total = page.size.map(|s| s as usize).unwrap_or(shown);

    let mut footer = format!(
        "---\n\n{}",
        md_italic(&format!("Showing {} of {} results", shown, total))
    );
    if let Some(next) = page.next_page() {
        footer.push_str(&format!("\n\nNext page cursor: {}", next));
    }
    footer
}
