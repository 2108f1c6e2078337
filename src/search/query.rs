//
//  bitbucket-search
//  search/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query strings for the Bitbucket search and filter endpoints.

use super::Cursor;

/// Quotes a value as a BBQL string literal.
///
/// Backslashes and double quotes are escaped so user input cannot end the
/// literal early.
pub(crate) fn bbql_quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// `(a ~ "q" OR b ~ "q")` over the given fields.
pub(crate) fn text_match(fields: &[&str], query: &str) -> String {
    let quoted = bbql_quote(query);
    let clauses = fields
        .iter()
        .map(|field| format!("{} ~ {}", field, quoted))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("({})", clauses)
}

/// The `search_query` value for the code search endpoint.
///
/// Filters become Bitbucket's inline modifiers. A leading dot on the
/// extension is dropped since `ext:` expects the bare suffix.
pub(crate) fn code_search_query(
    query: &str,
    repo: Option<&str>,
    language: Option<&str>,
    extension: Option<&str>,
) -> String {
    let mut parts = vec![query.to_string()];

    if let Some(repo) = repo {
        parts.push(format!("repo:{}", repo));
    }
    if let Some(language) = language {
        parts.push(format!("lang:{}", language));
    }
    if let Some(extension) = extension {
        parts.push(format!("ext:{}", extension.trim_start_matches('.')));
    }

    parts.join(" ")
}

/// `pagelen` and, when continuing, `page`.
pub(crate) fn page_params(limit: u32, cursor: Option<&Cursor>) -> Vec<(&'static str, String)> {
    let mut params = vec![("pagelen", limit.to_string())];
    if let Some(cursor) = cursor {
        params.push(("page", cursor.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbql_quote_escapes() {
        assert_eq!(bbql_quote("api"), r#""api""#);
        assert_eq!(bbql_quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(bbql_quote(r"C:\tmp"), r#""C:\\tmp""#);
    }

    #[test]
    fn test_text_match() {
        assert_eq!(
            text_match(&["name", "description"], "api"),
            r#"(name ~ "api" OR description ~ "api")"#
        );
    }

    #[test]
    fn test_code_search_query_modifiers() {
        assert_eq!(code_search_query("TODO", None, None, None), "TODO");
        assert_eq!(
            code_search_query("TODO", Some("api"), Some("python"), Some(".py")),
            "TODO repo:api lang:python ext:py"
        );
    }

    #[test]
    fn test_page_params() {
        assert_eq!(page_params(25, None), vec![("pagelen", "25".to_string())]);
        assert_eq!(
            page_params(10, Some(&Cursor::Token("abc".into()))),
            vec![("pagelen", "10".to_string()), ("page", "abc".to_string())]
        );
    }
}
