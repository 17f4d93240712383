use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Every file found in the asset folders of a source root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredImages {
    paths: Vec<PathBuf>,
}

impl DiscoveredImages {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Resolve referenced basenames for the post `slug`.
    ///
    /// Each distinct name resolves to at most one file: the one inside the
    /// asset folder named after the post if present, else the first match in
    /// discovery order. Results follow discovery order.
    pub fn matching_for(&self, slug: &str, names: &[String]) -> Vec<&Path> {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut chosen: Vec<&Path> = Vec::new();

        for path in &self.paths {
            let Some(name) = basename(path) else {
                continue;
            };
            if !wanted.contains(name) {
                continue;
            }
            match chosen.iter().position(|c| basename(c) == Some(name)) {
                None => chosen.push(path.as_path()),
                Some(idx) => {
                    if in_folder(path, slug) && !in_folder(chosen[idx], slug) {
                        chosen[idx] = path.as_path();
                    }
                }
            }
        }
        chosen
    }

    /// Referenced names that have no discovered file at all.
    pub fn unmatched(&self, names: &[String]) -> Vec<String> {
        let known: HashSet<&str> = self.paths.iter().filter_map(|p| basename(p)).collect();
        let mut seen = HashSet::new();
        names
            .iter()
            .filter(|n| !known.contains(n.as_str()) && seen.insert(n.as_str()))
            .cloned()
            .collect()
    }
}

fn basename(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

fn in_folder(path: &Path, folder: &str) -> bool {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        == Some(folder)
}
