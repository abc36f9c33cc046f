//! Export of the completed work records (chronological order).

use crate::errors::{AppError, AppResult};
use crate::models::work_record::WorkRecord;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        records: &[WorkRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(records, path)?,
            ExportFormat::Json => export_json(records, path)?,
        }

        success(format!(
            "{} export completed: {} ({} records)",
            format.as_str().to_uppercase(),
            path.display(),
            records.len()
        ));
        Ok(())
    }
}

/// Check whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → ask the user
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Pretty-printed JSON, same object shape as the stored list.
fn export_json(records: &[WorkRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// CSV with a header row derived from the record fields.
fn export_csv(records: &[WorkRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in records {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
