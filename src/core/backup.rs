use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or into a zip archive beside it
    /// when `compress` is set. Returns the final path, or `None` when the user
    /// declined to overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = expand_tilde(db_path);
        let src = src.as_path();
        let dest = dest_file;
        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if final_path.exists() && !force && !confirm_overwrite(&final_path)? {
            println!("❌ Backup cancelled by user.");
            return Ok(None);
        }

        if compress {
            compress_backup(src, &final_path)?;
            return Ok(Some(final_path));
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        Ok(Some(dest.to_path_buf()))
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        dest.display()
    );

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Write `src` into the zip archive `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rworklog.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    success(format!("Compressed backup created: {}", zip_path.display()));

    Ok(())
}
