// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Apply messages to the model.

use std::path::{Path, PathBuf};

use crate::app::document::file;
use crate::app::message::AppMessage;
use crate::app::model::AppModel;
use crate::app::view::crop::CropSelection;
use crate::config::AppConfig;
use crate::constant::PREVIEW_FILE_NAME;
use crate::domain::document::operations::{CropArea, Extractor};
use crate::domain::document::{LoadOptions, SourceImage};
use crate::domain::error::CropError;

/// What an update did, for the front end to report.
#[derive(Debug)]
pub enum UpdateResult {
    None,
    Loaded { width: u32, height: u32 },
    SelectionChanged(CropArea),
    Cropped { width: u32, height: u32 },
    Saved(PathBuf),
    Previewed(PathBuf),
    Failed(CropError),
}

impl UpdateResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

pub async fn update(model: &mut AppModel, config: &AppConfig, message: AppMessage) -> UpdateResult {
    match message {
        AppMessage::OpenPath(path) => open_path(model, config, &path).await,

        AppMessage::ZoomTo(zoom) => with_selection(model, |s| {
            s.set_zoom(zoom);
        }),
        AppMessage::ZoomIn => with_selection(model, |s| {
            s.zoom_by(config.zoom_step);
        }),
        AppMessage::ZoomOut => with_selection(model, |s| {
            s.zoom_by(-config.zoom_step);
        }),
        AppMessage::ZoomAt { zoom, x, y } => with_selection(model, |s| {
            s.zoom_at(zoom, x, y);
        }),
        AppMessage::Pan { dx, dy } => with_selection(model, |s| s.pan_by(dx, dy)),
        AppMessage::CropDragStart { x, y } => with_selection(model, |s| s.start_drag(x, y)),
        AppMessage::CropDragMove { x, y } => with_selection(model, |s| s.update_drag(x, y)),
        AppMessage::CropDragEnd => with_selection(model, CropSelection::end_drag),
        AppMessage::ResetSelection => with_selection(model, CropSelection::reset),

        AppMessage::ReportArea(area) => {
            if !model.has_source() {
                return fail(model, CropError::NoSource);
            }
            log::debug!("crop area reported: {area}");
            model.crop_area = Some(area);
            UpdateResult::SelectionChanged(area)
        }

        AppMessage::ApplyCrop => apply_crop(model, config),

        AppMessage::Download(target) => download(model, config, target.as_deref()).await,

        AppMessage::Preview => preview(model, config).await,

        AppMessage::ClearError => {
            model.clear_error();
            UpdateResult::None
        }
    }
}

async fn open_path(model: &mut AppModel, config: &AppConfig, path: &Path) -> UpdateResult {
    let path = file::resolve_input(path, config);
    let options = LoadOptions {
        apply_exif_orientation: config.apply_exif_orientation,
    };

    match SourceImage::load(&path, options).await {
        Ok(source) => {
            let (width, height) = source.dimensions();
            log::info!("opened {} ({width}x{height})", path.display());
            model.replace_source(source);
            UpdateResult::Loaded { width, height }
        }
        // The previous image, selection and crop stay as they were.
        Err(e) => fail(model, e),
    }
}

fn with_selection<F>(model: &mut AppModel, f: F) -> UpdateResult
where
    F: FnOnce(&mut CropSelection),
{
    let Some(selection) = model.crop_selection.as_mut() else {
        return fail(model, CropError::NoSource);
    };

    f(selection);
    let area = selection.area();
    log::debug!("selection now {area} at zoom {}", selection.zoom());

    model.crop_area = Some(area);
    UpdateResult::SelectionChanged(area)
}

fn apply_crop(model: &mut AppModel, config: &AppConfig) -> UpdateResult {
    let Some(source) = model.source.as_ref() else {
        return fail(model, CropError::NoSource);
    };

    let area = model.crop_area.unwrap_or_else(|| {
        let (width, height) = source.dimensions();
        CropSelection::new(width, height).area()
    });

    match Extractor::new(config.max_surface_pixels).extract(source, &area) {
        Ok(output) => {
            let (width, height) = output.dimensions();
            model.output = Some(output);
            model.clear_error();
            UpdateResult::Cropped { width, height }
        }
        // A failed crop leaves the previous result in place.
        Err(e) => fail(model, e),
    }
}

async fn download(model: &mut AppModel, config: &AppConfig, target: Option<&Path>) -> UpdateResult {
    let Some(output) = model.output.as_ref() else {
        return fail(model, CropError::NoOutput);
    };

    let target = file::download_target(target, config);
    match file::save(output.encoded(), &target, config.overwrite_output).await {
        Ok(path) => {
            log::info!("saved crop to {}", path.display());
            model.last_saved = Some(path.clone());
            UpdateResult::Saved(path)
        }
        Err(e) => fail(model, e),
    }
}

async fn preview(model: &mut AppModel, config: &AppConfig) -> UpdateResult {
    let Some(output) = model.output.as_ref() else {
        return fail(model, CropError::NoOutput);
    };

    let path = config.preview_dir().join(PREVIEW_FILE_NAME);
    let path = match file::save(output.encoded(), &path, true).await {
        Ok(path) => path,
        Err(e) => return fail(model, e),
    };

    if config.open_preview {
        if let Err(e) = open::that_detached(&path) {
            return fail(model, CropError::Preview(e));
        }
    }

    UpdateResult::Previewed(path)
}

fn fail(model: &mut AppModel, error: CropError) -> UpdateResult {
    log::error!("{error}");
    model.set_error(error.to_string());
    UpdateResult::Failed(error)
}
