use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::{
    error::CheckError,
    front_matter::{self, FrontMatter},
    post::PostFile,
    renderer::Renderer,
};

/// Progress through a single validation. Stages only move forward; a failure
/// at any point is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Stage {
    Start,
    FilenameChecked,
    ContentRead,
    FrontMatterExtracted,
    FieldsValidated,
    PreviewRendered,
    Done,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CheckOptions {
    /// Fail on missing delimiters and only read fields inside the delimited block.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct CheckedPost {
    pub post: PostFile,
    pub front_matter: FrontMatter,
}

#[derive(Debug)]
pub(crate) enum Outcome {
    Passed(CheckedPost),
    Failed { reached: Stage, error: CheckError },
}

impl Outcome {
    /// Last stage completed before the preview.
    pub fn reached(&self) -> Stage {
        match self {
            Outcome::Passed(_) => Stage::FieldsValidated,
            Outcome::Failed { reached, .. } => *reached,
        }
    }
}

pub(crate) struct Validator {
    options: CheckOptions,
    renderer: Renderer,
}

impl Validator {
    pub fn new(options: CheckOptions) -> anyhow::Result<Self> {
        Ok(Validator {
            options,
            renderer: Renderer::new()?,
        })
    }

    /// Checks `path` and writes the full report to `out`.
    ///
    /// Returns whether the post passed. `Err` is reserved for failures to
    /// produce the report itself.
    pub fn validate<W: Write>(&self, path: &Path, out: &mut W) -> anyhow::Result<bool> {
        let outcome = self.check(path);
        self.renderer.report(path, &outcome, out)?;

        match outcome {
            Outcome::Passed(_) => {
                debug!("{path:?}: {:?} -> {:?}", Stage::PreviewRendered, Stage::Done);
                Ok(true)
            }
            Outcome::Failed { reached, error } => {
                info!("{path:?}: failed after {reached:?}: {error}");
                Ok(false)
            }
        }
    }

    /// Runs every check up to and including the required-field check.
    pub fn check(&self, path: &Path) -> Outcome {
        let post = match PostFile::from_path(path) {
            Ok(post) => post,
            Err(error) => {
                return Outcome::Failed {
                    reached: Stage::Start,
                    error,
                }
            }
        };
        debug!("{path:?}: {:?}", Stage::FilenameChecked);
        if post.published_on().is_none() {
            warn!(
                "{path:?}: {}-{}-{} is not a calendar date",
                post.year, post.month, post.day
            );
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                return Outcome::Failed {
                    reached: Stage::FilenameChecked,
                    error: CheckError::UnreadableFile {
                        path: path.to_owned(),
                        source,
                    },
                }
            }
        };
        debug!("{path:?}: {:?} ({} bytes)", Stage::ContentRead, content.len());

        let searched = match front_matter::delimited_block(&content) {
            Ok(block) if self.options.strict => block,
            Ok(_) => content.as_str(),
            Err(error) if self.options.strict => {
                return Outcome::Failed {
                    reached: Stage::ContentRead,
                    error,
                }
            }
            Err(error) => {
                warn!("{path:?}: {error}; searching the whole file");
                content.as_str()
            }
        };
        let front_matter = FrontMatter::extract(searched);
        debug!("{path:?}: {:?} {front_matter:?}", Stage::FrontMatterExtracted);
        if !front_matter.categories {
            info!("{path:?}: no categories listed");
        }

        let missing = front_matter.missing_required();
        if !missing.is_empty() {
            return Outcome::Failed {
                reached: Stage::FrontMatterExtracted,
                error: CheckError::MissingRequiredFields(missing),
            };
        }
        if let (Some(declared), Some(named)) = (
            front_matter.date.as_deref().and_then(leading_date),
            post.published_on(),
        ) {
            if declared != named {
                warn!("{path:?}: front matter date {declared} differs from file name date {named}");
            }
        }
        debug!("{path:?}: {:?}", Stage::FieldsValidated);

        Outcome::Passed(CheckedPost { post, front_matter })
    }
}

/// `2024-01-15 10:00:00 +0900` -> 2024-01-15
fn leading_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()
}
