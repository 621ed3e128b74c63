// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/file.rs
//
// File helpers: resolving input paths and writing cropped images.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::config::AppConfig;
use crate::constant::{MAX_NAME_ATTEMPTS, OUTPUT_FILE_NAME};
use crate::domain::error::{CropError, CropResult};

/// Resolve a user-supplied image path.
///
/// Relative paths that do not exist in the working directory are looked up
/// in `default_image_dir`.
pub fn resolve_input(path: &Path, config: &AppConfig) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }

    config
        .default_image_dir
        .as_ref()
        .map(|dir| dir.join(path))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Where a download goes: an explicit file, a directory, or the default.
pub fn download_target(target: Option<&Path>, config: &AppConfig) -> PathBuf {
    match target {
        Some(path) if path.is_dir() => path.join(OUTPUT_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => config.output_dir().join(OUTPUT_FILE_NAME),
    }
}

/// `photo.jpg` -> `photo (n).jpg`; `n == 0` keeps the name.
pub fn numbered(path: &Path, n: u32) -> PathBuf {
    if n == 0 {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    let name = match path.extension() {
        Some(ext) => format!("{stem} ({n}).{}", ext.to_string_lossy()),
        None => format!("{stem} ({n})"),
    };
    path.with_file_name(name)
}

/// Write `bytes` to `path`, creating parent directories.
///
/// Unless `overwrite` is set an existing file is never replaced: the first
/// free `name (n).ext` is used instead. Returns the path actually written.
pub async fn save(bytes: &[u8], path: &Path, overwrite: bool) -> CropResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| write_error(parent, e))?;
    }

    if overwrite {
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| write_error(path, e))?;
        return Ok(path.to_path_buf());
    }

    for n in 0..MAX_NAME_ATTEMPTS {
        let candidate = numbered(path, n);
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(write_error(&candidate, e)),
        };

        file.write_all(bytes)
            .await
            .map_err(|e| write_error(&candidate, e))?;
        file.flush().await.map_err(|e| write_error(&candidate, e))?;
        return Ok(candidate);
    }

    Err(write_error(
        path,
        std::io::Error::new(ErrorKind::AlreadyExists, "no free file name left"),
    ))
}

fn write_error(path: &Path, source: std::io::Error) -> CropError {
    CropError::Write {
        path: path.to_path_buf(),
        source,
    }
}
