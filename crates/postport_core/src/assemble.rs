use std::borrow::Cow;

use postport_logging::port_error;

use crate::document::{SourceDocument, TargetDocument};
use crate::shortcode::rewrite_image_shortcodes;

/// Convert a parsed source post into its target form.
///
/// Bodies that reference images go through the shortcode rewriter first. A
/// rewrite failure is logged and the original body is kept.
pub fn build_target_document(source: &SourceDocument, author: &str) -> TargetDocument {
    let body = converted_body(source);
    let content = render_document(&source.slug, &source.title, author, &source.tags, &body);
    TargetDocument {
        slug: source.slug.clone(),
        date: publish_date(&source.date).to_string(),
        content,
        images: source.images.clone(),
    }
}

/// Render the target front-matter block followed by `body`.
pub fn render_document(slug: &str, title: &str, author: &str, tags: &[String], body: &str) -> String {
    let tags = tags.join(", ");
    format!("---\nslug: {slug}\ntitle: {title}\nauthors: [{author}]\ntags: [{tags}]\n---\n{body}")
}

/// Date part of a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn publish_date(date: &str) -> &str {
    date.split(' ').next().unwrap_or_default()
}

fn converted_body(source: &SourceDocument) -> Cow<'_, str> {
    if source.images.is_empty() {
        return Cow::Borrowed(&source.body);
    }
    match rewrite_image_shortcodes(&source.body) {
        Ok(rewritten) => Cow::Owned(rewritten),
        Err(err) => {
            port_error!("Keeping original body of {}: {}", source.slug, err);
            Cow::Borrowed(&source.body)
        }
    }
}
