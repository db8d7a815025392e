//! Cell boundary lexers
//!
//! Each function takes a normalized row (no line feed, no trailing whitespace)
//! and returns the raw, untrimmed byte span of every cell in it.

use logos::Logos;
use std::ops::Range;

/// Tokens of a tab separated row
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum TabbedToken {
    #[regex(r"\t+")]
    Tab,

    #[regex(r"[^\t]+")]
    Content,
}

/// Tokens of a space separated row (tabs already expanded)
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum SpacedToken {
    // Two or more spaces separate cells
    #[regex(r" {2,}")]
    Gap,

    #[token(" ")]
    Space,

    #[regex(r"[^ ]+")]
    Word,
}

/// Split on tab runs. Only a leading tab yields an empty cell.
pub(crate) fn split_tabbed(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    for (index, (token, span)) in TabbedToken::lexer(text).spanned().enumerate() {
        match token {
            Ok(TabbedToken::Tab) => {
                if index == 0 {
                    spans.push(0..0);
                }
            }
            _ => spans.push(span),
        }
    }
    spans
}

/// Split on runs of two or more spaces. A leading gap yields an empty cell.
pub(crate) fn split_spaced(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut current: Option<Range<usize>> = None;
    for (token, span) in SpacedToken::lexer(text).spanned() {
        match token {
            Ok(SpacedToken::Gap) => match current.take() {
                Some(cell) => spans.push(cell),
                None if spans.is_empty() => spans.push(0..0),
                None => {}
            },
            _ => {
                current = Some(match current {
                    Some(cell) => cell.start..span.end,
                    None => span,
                });
            }
        }
    }
    if let Some(cell) = current {
        spans.push(cell);
    }
    spans
}

/// Whether a row uses the `| cell | cell |` table form.
pub(crate) fn is_piped(text: &str) -> bool {
    text.starts_with("| ")
}

/// Split a pipe row on ` |` followed by a space, after dropping the leading
/// `|` and an optional trailing ` |`. Trailing empty cells are discarded.
pub(crate) fn split_piped(text: &str) -> Vec<Range<usize>> {
    let start = 1;
    let end = if text.len() > start + 1 && text.ends_with(" |") {
        text.len() - 2
    } else {
        text.len()
    };
    let body = &text[start..end];
    let bytes = body.as_bytes();

    let mut spans = Vec::new();
    let mut cell_start = 0;
    for (at, _) in body.match_indices(" |") {
        if bytes.get(at + 2) == Some(&b' ') {
            spans.push(start + cell_start..start + at);
            cell_start = at + 2;
        }
    }
    spans.push(start + cell_start..start + body.len());

    while spans
        .last()
        .is_some_and(|span| text[span.clone()].trim().is_empty())
        && spans.len() > 1
    {
        spans.pop();
    }
    spans
}
