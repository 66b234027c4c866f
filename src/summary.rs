use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::grouper::RarityGroups;
use crate::reporter::Sample;

/// JSON record of one run, written next to the console report on request.
#[derive(Debug, Serialize)]
pub struct Summary<'a> {
    pub input: &'a Path,
    pub total_records: usize,
    pub skipped_records: usize,
    pub unique_rare_types: usize,
    pub groups: &'a [Sample],
}

impl<'a> Summary<'a> {
    pub fn new(input: &'a Path, groups: &RarityGroups, samples: &'a [Sample]) -> Self {
        Summary {
            input,
            total_records: groups.total_records(),
            skipped_records: groups.skipped_records(),
            unique_rare_types: samples.len(),
            groups: samples,
        }
    }
}

pub fn write_summary(path: &Path, summary: &Summary<'_>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .with_context(|| format!("writing {:?}", path))?;
    writer.flush().with_context(|| format!("flushing {:?}", path))?;
    Ok(())
}
