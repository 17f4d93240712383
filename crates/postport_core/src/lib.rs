//! Postport core: pure conversion of source posts into target posts.
mod assemble;
mod document;
mod filename;
mod frontmatter;
mod shortcode;

pub use assemble::{build_target_document, publish_date, render_document};
pub use document::{SourceDocument, TargetDocument};
pub use filename::target_dir_name;
pub use frontmatter::{parse_header, split_document, FrontMatter, FrontMatterError};
pub use shortcode::{
    extract_image_refs, find_shortcodes, rewrite_image_shortcodes, ImageShortcode, RewriteError,
};
