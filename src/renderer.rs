use std::io::Write;
use std::path::Path;

use handlebars::{handlebars_helper, Handlebars, JsonValue};
use serde::Serialize;

use crate::validator::{CheckedPost, Outcome, Stage};

const PREVIEW: &str = concat!(
    "\n",
    "-----------------------------------------------------------\n",
    "📄 PREVIEW: {{title}}\n",
    "-----------------------------------------------------------\n",
    "📅 Published: {{date}} (Year: {{year}}, Month: {{month}})\n",
    "🔗 Permalink: {{permalink}}\n",
    "🖼  Header Image: {{or_none teaser}}\n",
    "-----------------------------------------------------------\n",
);

handlebars_helper!(or_none: |value: Json| match value {
    JsonValue::Null => "None".to_string(),
    JsonValue::String(s) => s.clone(),
    other => other.to_string(),
});

#[derive(Serialize, Debug)]
struct PreviewData<'a> {
    title: &'a str,
    date: &'a str,
    year: &'a str,
    month: &'a str,
    permalink: String,
    teaser: Option<&'a str>,
}

impl<'a> From<&'a CheckedPost> for PreviewData<'a> {
    fn from(checked: &'a CheckedPost) -> Self {
        let fm = &checked.front_matter;
        PreviewData {
            title: fm.title.as_deref().unwrap_or_default(),
            date: fm.date.as_deref().unwrap_or_default(),
            year: &checked.post.year,
            month: &checked.post.month,
            permalink: checked.post.permalink(),
            teaser: fm.teaser.as_deref(),
        }
    }
}

/// Turns a validation [`Outcome`] into the human-readable report.
pub(crate) struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("or_none", Box::new(or_none));
        handlebars.register_template_string("preview", PREVIEW)?;

        Ok(Renderer { handlebars })
    }

    pub fn report<W: Write>(
        &self,
        path: &Path,
        outcome: &Outcome,
        out: &mut W,
    ) -> anyhow::Result<()> {
        writeln!(out, "\n🔍 Checking file: {}", path.display())?;
        if outcome.reached() >= Stage::FilenameChecked {
            writeln!(out, "✅ Filename format is valid.")?;
        }

        match outcome {
            Outcome::Failed { error, .. } => {
                writeln!(out, "❌ ERROR: {error}")?;
                if let Some(hint) = error.hint() {
                    writeln!(out, "   {hint}")?;
                }
            }
            Outcome::Passed(checked) => {
                writeln!(out, "✅ Front Matter structure is valid.")?;
                self.handlebars
                    .render_to_write("preview", &PreviewData::from(checked), &mut *out)?;
                writeln!(
                    out,
                    "\n✅ Verification Successful! This post is ready for Jekyll."
                )?;
            }
        }

        Ok(())
    }
}
