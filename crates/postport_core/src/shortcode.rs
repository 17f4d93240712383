//! Recognition and rewriting of the `asset_img` image shortcode.
//!
//! Source bodies embed images as `{% asset_img pic.jpg some caption %}`.
//! The target format wants plain Markdown: `![pic](./pic.jpg)`.
//!
//! Both patterns below capture the filename in group 1, so a shortcode span
//! and its filename come out of one match. The braced pattern only matches
//! text the bare pattern also matches.
//!
//! Images are copied flat into the post directory, so a captured
//! `folder/pic.jpg` is reduced to `pic.jpg` everywhere it is reported.

use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Bare reference: `asset_img <ws> <file.ext> <ws>`.
static IMAGE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"asset_img\s+(\S+?\.(?:jpg|jpeg|png))\s").expect("valid image reference regex")
});

/// Full shortcode: `{% asset_img <ws> <file.ext> <ws> <anything> %}` on one line.
static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{%\s*asset_img\s+(\S+?\.(?:jpg|jpeg|png))\s.*?%\}")
        .expect("valid image shortcode regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("shortcode at bytes {span:?} matched without a recoverable filename")]
    Consistency { span: Range<usize> },
}

/// One `{% asset_img ... %}` occurrence in a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageShortcode<'a> {
    /// Byte range of the whole shortcode, braces included.
    pub span: Range<usize>,
    pub filename: &'a str,
}

impl ImageShortcode<'_> {
    /// Markdown replacement, using the filename stem as alt text.
    pub fn to_markdown(&self) -> String {
        format!("![{}](./{})", alt_text(self.filename), self.filename)
    }
}

/// Filenames referenced via `asset_img`, in order of appearance, duplicates kept.
pub fn extract_image_refs(text: &str) -> Vec<String> {
    IMAGE_REF_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| basename(m.as_str()).to_string())
        .collect()
}

/// Every full shortcode in `body`, leftmost first, non-overlapping.
pub fn find_shortcodes(body: &str) -> Result<Vec<ImageShortcode<'_>>, RewriteError> {
    let mut found = Vec::new();
    for caps in SHORTCODE_RE.captures_iter(body) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let filename = caps
            .get(1)
            .map(|m| basename(m.as_str()))
            .ok_or(RewriteError::Consistency {
                span: whole.range(),
            })?;
        found.push(ImageShortcode {
            span: whole.range(),
            filename,
        });
    }
    Ok(found)
}

/// Replace each shortcode in `body` with Markdown image syntax.
///
/// Text outside the shortcodes is copied byte for byte. A body without
/// shortcodes comes back unchanged.
pub fn rewrite_image_shortcodes(body: &str) -> Result<String, RewriteError> {
    let shortcodes = find_shortcodes(body)?;
    if shortcodes.is_empty() {
        return Ok(body.to_string());
    }

    let mut out = String::with_capacity(body.len());
    let mut cursor = 0;
    for shortcode in &shortcodes {
        out.push_str(&body[cursor..shortcode.span.start]);
        out.push_str(&shortcode.to_markdown());
        cursor = shortcode.span.end;
    }
    out.push_str(&body[cursor..]);
    Ok(out)
}

/// Last component of `reference`, splitting on both `/` and `\`.
fn basename(reference: &str) -> &str {
    reference
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(reference)
}

fn alt_text(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_drops_only_last_extension() {
        assert_eq!(alt_text("pic.jpg"), "pic");
        assert_eq!(alt_text("archive.v2.png"), "archive.v2");
    }

    #[test]
    fn shortcode_spans_cover_braces() {
        let body = "x {% asset_img a.png cap %} y";
        let found = find_shortcodes(body).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(&body[found[0].span.clone()], "{% asset_img a.png cap %}");
        assert_eq!(found[0].filename, "a.png");
    }

    #[test]
    fn two_shortcodes_on_one_line_stay_separate() {
        let body = "{% asset_img a.jpg one %} and {% asset_img b.jpg two %}";
        let found = find_shortcodes(body).unwrap();
        let names: Vec<&str> = found.iter().map(|s| s.filename).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn every_shortcode_filename_is_also_an_image_ref() {
        let body = "{% asset_img a.jpg %}\n{% asset_img b.jpeg caption here %}\n";
        let from_shortcodes: Vec<String> = find_shortcodes(body)
            .unwrap()
            .iter()
            .map(|s| s.filename.to_string())
            .collect();
        assert_eq!(from_shortcodes, extract_image_refs(body));
    }
}
