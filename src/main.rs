// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: logging, localization, arguments.

use clap::Parser;

use cropper::{Args, i18n};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let args = Args::parse();
    cropper::run(args).await
}
