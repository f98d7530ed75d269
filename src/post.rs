use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::CheckError;

static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)\.md$").expect("valid file name pattern")
});

/// A post identified by its `YYYY-MM-DD-slug.md` file name.
///
/// Every field is the literal substring captured from the file name; nothing
/// here checks that the date actually exists (see [`PostFile::published_on`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostFile {
    pub year: String,
    pub month: String,
    pub day: String,
    pub slug: String,
}

impl PostFile {
    /// Matches the base name of `path` only. The file itself is not touched.
    pub fn from_path(path: &Path) -> Result<Self, CheckError> {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        let caps = FILE_NAME_PATTERN
            .captures(&file_name)
            .ok_or(CheckError::InvalidFilename)?;

        Ok(PostFile {
            year: caps[1].to_string(),
            month: caps[2].to_string(),
            day: caps[3].to_string(),
            slug: caps[4].to_string(),
        })
    }

    /// `/{year}/{month}/{Title Cased Slug}/`
    pub fn permalink(&self) -> String {
        format!("/{}/{}/{}/", self.year, self.month, title_case(&self.slug))
    }

    /// The file name date as a calendar date, `None` for things like `2024-02-30`.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(
            &format!("{}-{}-{}", self.year, self.month, self.day),
            "%Y-%m-%d",
        )
        .ok()
    }
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
