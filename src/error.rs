use std::path::PathBuf;

use thiserror::Error;

/// Why a post was rejected. The message is what gets printed after `❌ ERROR:`.
#[derive(Debug, Error)]
pub(crate) enum CheckError {
    #[error("Filename invalid!")]
    InvalidFilename,

    #[error("Could not read file: {source} ({})", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File does not start with '---'")]
    MissingFrontMatterStart,

    #[error("Closing '---' not found")]
    MissingFrontMatterEnd,

    #[error("Missing required Front Matter fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
}

impl CheckError {
    /// Extra guidance printed under the error line, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CheckError::InvalidFilename => Some("Expected format: YYYY-MM-DD-title-slug.md"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_listed_in_order() {
        let e = CheckError::MissingRequiredFields(vec!["title", "date"]);
        assert_eq!(
            e.to_string(),
            "Missing required Front Matter fields: title, date"
        );
    }

    #[test]
    fn unreadable_file_includes_io_message() {
        let e = CheckError::UnreadableFile {
            path: PathBuf::from("_posts/2024-01-15-a.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(
            e.to_string(),
            "Could not read file: stream did not contain valid UTF-8 (_posts/2024-01-15-a.md)"
        );
        assert!(e.hint().is_none());
    }

    #[test]
    fn only_filename_errors_carry_a_hint() {
        let e = CheckError::InvalidFilename;
        assert_eq!(e.hint(), Some("Expected format: YYYY-MM-DD-title-slug.md"));
        assert!(CheckError::MissingFrontMatterEnd.hint().is_none());
    }
}
