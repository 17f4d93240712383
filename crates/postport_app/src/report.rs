use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use postport_engine::{AtomicFileWriter, ConversionReport};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub generated_utc: String,
    pub source: &'a str,
    pub target: &'a str,
    pub author: &'a str,
    pub converted: usize,
    #[serde(flatten)]
    pub conversion: &'a ConversionReport,
}

impl<'a> RunReport<'a> {
    pub fn new(
        source: &'a str,
        target: &'a str,
        author: &'a str,
        conversion: &'a ConversionReport,
    ) -> Self {
        Self {
            generated_utc: Utc::now().to_rfc3339(),
            source,
            target,
            author,
            converted: conversion.converted(),
            conversion,
        }
    }
}

pub fn write_report(path: &Path, report: &RunReport<'_>) -> anyhow::Result<PathBuf> {
    let json = serde_json::to_string_pretty(report)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid report path {:?}", path))?;
    fs::create_dir_all(&dir).with_context(|| format!("cannot create {:?}", dir))?;

    let written = AtomicFileWriter::new(dir)
        .write(filename, &json)
        .with_context(|| format!("cannot write report {:?}", path))?;
    Ok(written)
}
