// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application, persisted as TOML.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{APP_DIR, CONFIG_FILE_NAME, DEFAULT_MAX_SURFACE_PIXELS};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Optional directory relative image paths are also looked up in.
    pub default_image_dir: Option<PathBuf>,
    /// Directory downloads are written to (falls back to the download dir).
    pub output_dir: Option<PathBuf>,
    /// Replace an existing `cropped-image.jpg` instead of picking a new name.
    pub overwrite_output: bool,
    /// Rotate/flip photos according to their EXIF orientation on load.
    pub apply_exif_orientation: bool,
    /// Directory the preview file is written to (falls back to the cache dir).
    pub preview_dir: Option<PathBuf>,
    /// Launch the system image viewer on preview.
    pub open_preview: bool,
    /// Zoom step for `zoom+` / `zoom-` (the slider step).
    pub zoom_step: f32,
    /// Default pan distance in source pixels.
    pub pan_step: f32,
    /// Largest output surface (in pixels) extraction may allocate.
    pub max_surface_pixels: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir(),
            output_dir: None,
            overwrite_output: false,
            apply_exif_orientation: true,
            preview_dir: None,
            open_preview: true,
            zoom_step: 0.1,
            pan_step: 50.0,
            max_surface_pixels: DEFAULT_MAX_SURFACE_PIXELS,
        }
    }
}

impl AppConfig {
    /// Location of the user config file, if a config dir exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("invalid config file")?;
        Ok(config.sanitized())
    }

    /// Read a config file from disk.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load the config from `path` or the default location.
    ///
    /// A missing file silently yields defaults; a broken one is logged and
    /// replaced by defaults so a typo never blocks cropping.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e:#}; using defaults");
                Self::default()
            }
        }
    }

    /// Directory downloads go to when no explicit path is given.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Directory the preview file is written to.
    #[must_use]
    pub fn preview_dir(&self) -> PathBuf {
        self.preview_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
        })
    }

    fn sanitized(mut self) -> Self {
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            log::warn!("zoom_step {} is not positive, using 0.1", self.zoom_step);
            self.zoom_step = 0.1;
        }
        if !self.pan_step.is_finite() {
            self.pan_step = 50.0;
        }
        if self.max_surface_pixels == 0 {
            self.max_surface_pixels = DEFAULT_MAX_SURFACE_PIXELS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
overwrite_output = true
zoom_step = 0.25
"#,
        )
        .unwrap();

        assert!(config.overwrite_output);
        assert_eq!(config.zoom_step, 0.25);
        assert_eq!(config.pan_step, 50.0);
        assert!(config.apply_exif_orientation);
        assert_eq!(config.max_surface_pixels, DEFAULT_MAX_SURFACE_PIXELS);
    }

    #[test]
    fn nonsense_values_are_sanitized() {
        let config = AppConfig::from_toml_str("zoom_step = -1.0\nmax_surface_pixels = 0").unwrap();
        assert_eq!(config.zoom_step, 0.1);
        assert_eq!(config.max_surface_pixels, DEFAULT_MAX_SURFACE_PIXELS);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("zoom_step = \"fast\"").is_err());
    }

    #[test]
    fn load_falls_back_on_broken_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml = = =").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_reads_output_dir() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"/tmp/crops\"").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/crops"));
    }
}
