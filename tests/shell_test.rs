// SPDX-License-Identifier: GPL-3.0-or-later
// tests/shell_test.rs
//
// Drive the interactive shell and the one-shot run with scripted input.

use std::path::{Path, PathBuf};

use clap::Parser;
use cropper::Args;
use cropper::config::AppConfig;
use cropper::ui::CropperApp;
use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        default_image_dir: Some(dir.to_path_buf()),
        output_dir: Some(dir.join("out")),
        preview_dir: Some(dir.join("preview")),
        open_preview: false,
        ..AppConfig::default()
    }
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 200, 255]));
    let path = dir.join(name);
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

#[tokio::test]
async fn scripted_session_crops_and_saves() {
    let dir = TempDir::new().unwrap();
    let source = write_png(dir.path(), "photo.png", 200, 100);
    let mut app = CropperApp::new(test_config(dir.path()));

    let script = format!(
        "open {}\nzoom 2\ndrag 100 50 60 40\ncrop\nsave\ninfo\nquit\ncrop\n",
        source.display()
    );
    let mut out = Vec::new();
    app.run_shell(script.as_bytes(), &mut out).await.unwrap();

    let output = app.model.output.as_ref().unwrap();
    assert_eq!(output.dimensions(), (50, 50));
    assert_eq!(output.region().as_tuple(), (35, 15, 50, 50));

    let saved = app.model.last_saved.clone().unwrap();
    assert_eq!(saved, dir.path().join("out").join("cropped-image.jpg"));
    assert!(saved.exists());

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.lines().count() >= 7);
}

#[tokio::test]
async fn shell_survives_bad_commands() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "relative.png", 30, 30);
    let mut app = CropperApp::new(test_config(dir.path()));

    let script = "crop\nfrobnicate\nzoom fast\nopen missing.png\nopen relative.png\ncrop\n";
    let mut out = Vec::new();
    app.run_shell(script.as_bytes(), &mut out).await.unwrap();

    assert_eq!(app.model.output.as_ref().unwrap().dimensions(), (30, 30));
    assert!(app.model.error.is_none());
}

#[tokio::test]
async fn one_shot_run_saves_crop() {
    let dir = TempDir::new().unwrap();
    let source = write_png(dir.path(), "input.png", 800, 600);
    let target = dir.path().join("result.jpg");
    let mut app = CropperApp::new(test_config(dir.path()));

    let args = Args::try_parse_from([
        "cropper".to_string(),
        source.display().to_string(),
        "--rect".to_string(),
        "100,100,300,300".to_string(),
        "--output".to_string(),
        target.display().to_string(),
    ])
    .unwrap();

    let mut out = Vec::new();
    let saved = app.run_once(&args, &mut out).await.unwrap();

    assert_eq!(saved, target);
    let written = image::open(&saved).unwrap();
    assert_eq!((written.width(), written.height()), (300, 300));
}

#[tokio::test]
async fn one_shot_run_reports_decode_failure() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.png");
    std::fs::write(&bogus, b"nope").unwrap();
    let mut app = CropperApp::new(test_config(dir.path()));

    let args = Args::try_parse_from(["cropper".to_string(), bogus.display().to_string()]).unwrap();
    let mut out = Vec::new();
    let err = app.run_once(&args, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("cannot decode"));
    assert!(!dir.path().join("out").exists());
}
