// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/status.rs
//
// Render the session state and update results as localized text lines.

use crate::app::model::AppModel;
use crate::app::update::UpdateResult;
use crate::domain::document::operations::CropArea;
use crate::fl;

/// Describe the whole session: source, selection and cropped result.
pub fn view(model: &AppModel) -> Vec<String> {
    let Some(source) = &model.source else {
        return vec![fl!("no-document")];
    };

    let (width, height) = source.dimensions();
    let mut lines = vec![fl!(
        "document-loaded",
        path = source.display_name(),
        width = width,
        height = height
    )];

    if let Some(area) = model.crop_area {
        let zoom = model.crop_selection.as_ref().map_or(1.0, |s| s.zoom());
        lines.push(selection_line(&area, zoom));
    }

    match &model.output {
        Some(output) => {
            let (width, height) = output.dimensions();
            lines.push(fl!("cropped", width = width, height = height));
        }
        None => lines.push(fl!("no-cropped")),
    }

    if let Some(error) = &model.error {
        lines.push(fl!("error", message = error.clone()));
    }

    lines
}

/// One line describing what an update did, if anything worth saying.
pub fn describe(model: &AppModel, result: &UpdateResult) -> Option<String> {
    let line = match result {
        UpdateResult::None => return None,
        UpdateResult::Loaded { width, height } => {
            let path = model
                .source
                .as_ref()
                .map_or_else(String::new, |s| s.display_name());
            fl!("document-loaded", path = path, width = (*width), height = (*height))
        }
        UpdateResult::SelectionChanged(area) => {
            let zoom = model.crop_selection.as_ref().map_or(1.0, |s| s.zoom());
            selection_line(area, zoom)
        }
        UpdateResult::Cropped { width, height } => {
            fl!("cropped", width = (*width), height = (*height))
        }
        UpdateResult::Saved(path) => fl!("saved-to", path = path.display().to_string()),
        UpdateResult::Previewed(path) => {
            fl!("preview-opened", path = path.display().to_string())
        }
        UpdateResult::Failed(error) => fl!("error", message = error.to_string()),
    };
    Some(line)
}

fn selection_line(area: &CropArea, zoom: f32) -> String {
    fl!(
        "selection",
        x = format!("{:.0}", area.x),
        y = format!("{:.0}", area.y),
        width = format!("{:.0}", area.width),
        height = format!("{:.0}", area.height),
        zoom = format!("{zoom:.1}")
    )
}
