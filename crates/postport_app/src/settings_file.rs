//! Loading of `ConvertSettings` from a RON file.
//!
//! ```ron
//! (
//!     index_filename: "index.md",
//!     scan_policy: SkipMalformed,
//! )
//! ```
//!
//! Fields left out keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use postport_engine::{ConvertSettings, ScanPolicy};
use postport_logging::port_info;

use crate::cli::Cli;

pub fn load_settings(path: Option<&Path>) -> anyhow::Result<ConvertSettings> {
    let Some(path) = path else {
        return Ok(ConvertSettings::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("cannot read config {:?}", path))?;
    let settings: ConvertSettings =
        ron::from_str(&content).with_context(|| format!("cannot parse config {:?}", path))?;
    port_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Settings from the optional config file with command-line overrides applied.
pub fn resolve_settings(cli: &Cli) -> anyhow::Result<ConvertSettings> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if cli.skip_malformed {
        settings.scan_policy = ScanPolicy::SkipMalformed;
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_defaults() {
        assert_eq!(load_settings(None).unwrap(), ConvertSettings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("postport.ron");
        fs::write(&path, "(index_filename: \"index.mdx\", scan_policy: SkipMalformed)").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.index_filename, "index.mdx");
        assert_eq!(settings.scan_policy, ScanPolicy::SkipMalformed);
        assert_eq!(settings.ignored_suffix, ".DS_Store");
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.ron");
        fs::write(&path, "(index_filename: 42").unwrap();

        let err = load_settings(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("cannot parse config"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(load_settings(Some(&temp.path().join("absent.ron"))).is_err());
    }
}
