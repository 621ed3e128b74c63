// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Library root: select a square region of an image and save it as JPEG.

pub mod app;
pub mod cli;
pub mod config;
pub mod constant;
pub mod domain;
pub mod i18n;
pub mod ui;

use tokio::io::BufReader;

pub use cli::Args;

use crate::app::AppMessage;
use crate::config::AppConfig;
use crate::ui::CropperApp;

/// Run the application for parsed command line arguments.
///
/// With a file and without `--interactive` the crop happens in one go;
/// otherwise the interactive shell reads commands from stdin.
pub async fn run(args: Args) -> anyhow::Result<()> {
    let config = AppConfig::load(args.config.as_deref());
    let mut app = CropperApp::new(config);
    let mut stdout = tokio::io::stdout();

    match args.file.clone() {
        Some(_) if !args.interactive => {
            app.run_once(&args, &mut stdout).await?;
        }
        initial => {
            if let Some(path) = initial {
                let result = app.dispatch(AppMessage::OpenPath(path)).await;
                app.report(&result, &mut stdout).await?;
            }
            let stdin = BufReader::new(tokio::io::stdin());
            app.run_shell(stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
