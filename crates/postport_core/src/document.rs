use crate::frontmatter::{parse_header, split_document, FrontMatterError};
use crate::shortcode::extract_image_refs;

/// A parsed source post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Source filename without its extension.
    pub slug: String,
    pub title: String,
    /// `YYYY-MM-DD` with an optional ` HH:MM:SS`, kept verbatim.
    pub date: String,
    pub tags: Vec<String>,
    /// Raw body text after the header block.
    pub body: String,
    /// Image basenames referenced from the body, in order of appearance.
    pub images: Vec<String>,
}

impl SourceDocument {
    pub fn parse(slug: impl Into<String>, text: &str) -> Result<Self, FrontMatterError> {
        let (header, body) = split_document(text)?;
        let fm = parse_header(header);
        Ok(Self {
            slug: slug.into(),
            title: fm.title,
            date: fm.date,
            tags: fm.tags,
            body: body.to_string(),
            images: extract_image_refs(body),
        })
    }
}

/// A post rendered into the target format, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDocument {
    pub slug: String,
    /// Publish date reduced to `YYYY-MM-DD`.
    pub date: String,
    /// Front-matter block followed by the (rewritten) body.
    pub content: String,
    pub images: Vec<String>,
}
