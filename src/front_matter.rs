//! Pulls a handful of known scalar fields out of a post header.
//!
//! This is not a YAML parser: every field is an independent line-anchored
//! search, so there is no nesting, no multi-line scalars and no type
//! coercion. `categories` is only checked for presence.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CheckError;

const DELIMITER: &str = "---";

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^title:[ \t]*(.+?)[ \t]*$").expect("valid title pattern"));
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^date:[ \t]*(.+?)[ \t]*$").expect("valid date pattern"));
static CATEGORIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^categories:[ \t]*\r?\n[ \t]+-[ \t]+\S").expect("valid categories pattern")
});
// themes nest the teaser under `header:`, so it may be indented
static TEASER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^[ \t]*teaser:[ \t]*(.+?)[ \t]*$").expect("valid teaser pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub categories: bool,
    pub teaser: Option<String>,
}

impl FrontMatter {
    /// Runs every field search over `text`, which may be the whole file.
    pub fn extract(text: &str) -> Self {
        FrontMatter {
            title: find_value(&TITLE, text),
            date: find_value(&DATE, text),
            categories: CATEGORIES.is_match(text),
            teaser: find_value(&TEASER, text),
        }
    }

    /// Required fields that are absent or empty, in declaration order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [("title", &self.title), ("date", &self.date)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Returns the text between the opening `---` line and the next line
/// starting with `---`.
pub(crate) fn delimited_block(content: &str) -> Result<&str, CheckError> {
    if content.lines().next() != Some(DELIMITER) {
        return Err(CheckError::MissingFrontMatterStart);
    }

    let rest = &content[DELIMITER.len()..];
    match rest.find("\n---") {
        Some(end) => Ok(&rest[..end]),
        None => Err(CheckError::MissingFrontMatterEnd),
    }
}

fn find_value(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| unquote(caps[1].trim()).to_string())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() > 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
