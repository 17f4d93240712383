use serde::{Deserialize, Serialize};

/// What a scan does when some source posts fail to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanPolicy {
    /// Any failed post fails the whole scan; no documents are returned.
    #[default]
    AllOrNothing,
    /// Failed posts are reported and the rest are converted.
    SkipMalformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    /// Name of the document written inside each target post directory.
    pub index_filename: String,
    /// Extension (without the dot) identifying source posts.
    pub source_extension: String,
    /// Entries whose name ends with this suffix are never read or copied.
    pub ignored_suffix: String,
    pub scan_policy: ScanPolicy,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            index_filename: "index.md".to_string(),
            source_extension: "md".to_string(),
            ignored_suffix: ".DS_Store".to_string(),
            scan_policy: ScanPolicy::AllOrNothing,
        }
    }
}

impl ConvertSettings {
    pub(crate) fn is_ignored(&self, name: &str) -> bool {
        !self.ignored_suffix.is_empty() && name.ends_with(&self.ignored_suffix)
    }

    /// Slug for a source post filename, or `None` if it is not a post.
    pub(crate) fn post_slug<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_suffix(self.source_extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|slug| !slug.is_empty())
    }
}
