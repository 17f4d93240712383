use std::path::PathBuf;

use clap::Parser;
use postport_logging::{LevelFilter, LogDestination};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("blog dir is empty")]
    EmptyBlogDir,
    #[error("author is empty")]
    EmptyAuthor,
}

#[derive(Parser, Debug)]
#[command(name = "postport")]
#[command(about = "Convert Hexo blog posts into Docusaurus blog posts")]
#[command(long_about = "\
Convert Hexo blog posts into Docusaurus blog posts

Source layout:

  source/
  ├── welcome.md        # post: title/date/tags front-matter
  └── welcome/          # images referenced with {% asset_img pic.jpg %}
      └── pic.jpg

Target layout:

  target/
  └── 2022-06-28-welcome/
      ├── index.md      # slug/title/authors/tags front-matter
      └── pic.jpg       # referenced as ![pic](./pic.jpg)")]
pub struct Cli {
    /// Source blog directory
    #[arg(long, visible_alias = "hexo", default_value = "")]
    pub source: String,

    /// Target blog directory
    #[arg(long, visible_alias = "docusaurus", default_value = "")]
    pub target: String,

    /// Author written into every converted post
    #[arg(long, default_value = "")]
    pub author: String,

    /// RON file with conversion settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Convert the valid posts even if some fail to parse
    #[arg(long)]
    pub skip_malformed: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> Result<(), UsageError> {
        if self.source.is_empty() || self.target.is_empty() {
            return Err(UsageError::EmptyBlogDir);
        }
        if self.author.is_empty() {
            return Err(UsageError::EmptyAuthor);
        }
        Ok(())
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
