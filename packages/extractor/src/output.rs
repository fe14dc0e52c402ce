//! CSV table generation and atomic file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ExtractorError, Result};
use crate::text::normalize_value;
use crate::types::{Field, Record};

/// Column set of a table: the union of all record fields in first-seen order.
///
/// # Examples
/// ```
/// use irs990_extractor::output::table_columns;
/// use irs990_extractor::types::{Field, Record};
///
/// let records = vec![
///     Record::new().with(Field::Ein, "1"),
///     Record::new().with(Field::Ein, "2").with(Field::Phone, "555"),
/// ];
/// assert_eq!(table_columns(&records), vec![Field::Ein, Field::Phone]);
/// ```
#[must_use]
pub fn table_columns(records: &[Record]) -> Vec<Field> {
    let mut columns: Vec<Field> = Vec::new();
    for record in records {
        for (field, _) in record.fields() {
            if !columns.contains(&field) {
                columns.push(field);
            }
        }
    }
    columns
}

/// Render records as CSV.
///
/// Cells for fields a record does not carry are left empty. An empty record
/// set renders as an empty document without a header row.
pub fn generate_csv(records: &[Record]) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let columns = table_columns(records);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(Field::as_str))?;
    for record in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| record.get(*column).map(normalize_value).unwrap_or_default()),
        )?;
    }

    writer
        .into_inner()
        .map_err(|e| ExtractorError::Io(e.into_error()))
}

/// Write records as CSV to `output_file`, replacing it atomically.
///
/// Missing parent directories are created.
pub fn save_csv(records: &[Record], output_file: &Path) -> Result<PathBuf> {
    let file_name = output_file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            ExtractorError::InvalidInput(format!(
                "Output path has no file name: {}",
                output_file.display()
            ))
        })?;

    let output_dir = match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&output_dir)?;

    let temp_file = output_dir.join(format!(".{file_name}.tmp"));
    let content = generate_csv(records)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(&content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    Ok(output_file.to_path_buf())
}
