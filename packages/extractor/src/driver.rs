//! Batch driver that ties scanning, extraction and output together.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::Document;

use crate::classifier::classify;
use crate::config::validate_input_dir;
use crate::error::Result;
use crate::extractors::{extractor_for, Extractor};
use crate::output::save_csv;
use crate::scanner::scan_filings;
use crate::types::{Pipeline, Record};

/// What to do when a single filing cannot be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the run at the first failing filing; nothing is written.
    #[default]
    Abort,

    /// Log the failure, leave the filing out and continue.
    Skip,
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Filings found under the input directory.
    pub documents: usize,

    /// Filings left out because they failed (skip policy only).
    pub failed: Vec<PathBuf>,

    /// Rows written to the table.
    pub records: usize,

    /// Path of the written table.
    pub output: PathBuf,
}

/// Extract the records of one filing held in memory.
pub fn extract_document(xml: &str, extractor: &dyn Extractor) -> Result<Vec<Record>> {
    let doc = Document::parse(xml)?;
    let classified = classify(&doc)?;
    extractor.extract(&classified)
}

/// Read and extract one filing, attaching its path to any error.
pub fn extract_file(path: &Path, extractor: &dyn Extractor) -> Result<Vec<Record>> {
    let read = || -> Result<Vec<Record>> {
        let xml = fs::read_to_string(path)?;
        extract_document(&xml, extractor)
    };
    read().map_err(|e| e.in_document(path))
}

/// Extract all filings in order, concatenating their records.
///
/// `on_document` is called before each filing is processed. Returns the
/// records and the paths of filings skipped under [`ErrorPolicy::Skip`].
pub fn collect_records(
    paths: &[PathBuf],
    extractor: &dyn Extractor,
    policy: ErrorPolicy,
    mut on_document: impl FnMut(&Path),
) -> Result<(Vec<Record>, Vec<PathBuf>)> {
    let mut records = Vec::new();
    let mut failed = Vec::new();

    for path in paths {
        on_document(path);
        tracing::info!(path = %path.display(), pipeline = %extractor.pipeline(), "Processing filing");

        match extract_file(path, extractor) {
            Ok(document_records) => records.extend(document_records),
            Err(e) => match policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    tracing::warn!("Skipping filing: {e}");
                    failed.push(path.clone());
                }
            },
        }
    }

    Ok((records, failed))
}

/// Run one pipeline over every filing under `input_dir` and write its table.
pub fn run_pipeline(
    pipeline: Pipeline,
    input_dir: &Path,
    output_file: &Path,
    policy: ErrorPolicy,
    on_document: impl FnMut(&Path),
) -> Result<RunSummary> {
    validate_input_dir(input_dir)?;

    let paths = scan_filings(input_dir)?;
    let extractor = extractor_for(pipeline);
    let (records, failed) = collect_records(&paths, extractor.as_ref(), policy, on_document)?;

    let output = save_csv(&records, output_file)?;
    tracing::info!(
        pipeline = %pipeline,
        documents = paths.len(),
        records = records.len(),
        output = %output.display(),
        "Wrote table"
    );

    Ok(RunSummary {
        documents: paths.len(),
        failed,
        records: records.len(),
        output,
    })
}
