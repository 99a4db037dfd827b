use crate::config::Config;
use crate::db::log::record;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use clap::ValueEnum;
use flate2::Compression as GzLevel;
use flate2::write::GzEncoder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Archive format for a compressed backup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Compression {
    Zip,
    Tgz,
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest`, optionally compressing it.
    ///
    /// Returns the final path, or `None` when the user declined to overwrite.
    pub fn backup(
        cfg: &Config,
        dest: &Path,
        compress: Option<Compression>,
    ) -> AppResult<Option<PathBuf>> {
        let src = cfg.data_path();

        if !src.exists() {
            return Err(AppError::DataFileNotFound(src.display().to_string()));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() {
            warning(format!("The file '{}' already exists.", dest.display()));
            if !confirm("Overwrite it?") {
                info("Backup cancelled.");
                return Ok(None);
            }
        }

        fs::copy(&src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = match compress {
            Some(kind) => {
                let archive = match kind {
                    Compression::Zip => compress_zip(dest)?,
                    Compression::Tgz => compress_tgz(dest)?,
                };
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {e}"));
                }
                archive
            }
            None => dest.to_path_buf(),
        };

        record(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress.is_some() {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

fn entry_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Other(format!("Invalid backup path: {}", path.display())))
}

/// Compress a backup as `.zip` (deflate).
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path)?, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());
    Ok(zip_path)
}

/// Compress a backup as `.tar.gz`.
fn compress_tgz(path: &Path) -> AppResult<PathBuf> {
    let tgz_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tgz_path)?;
    let encoder = GzEncoder::new(file, GzLevel::default());

    let mut tar = tar::Builder::new(encoder);
    tar.append_path_with_name(path, entry_name(path)?)?;
    tar.into_inner()?.finish()?;

    println!("📦 Compressed: {}", tgz_path.display());
    Ok(tgz_path)
}
