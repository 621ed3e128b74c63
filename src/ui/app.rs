// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// Application wiring: one-shot runs and the interactive shell loop.

use std::path::PathBuf;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::Args;
use crate::app::view::status;
use crate::app::{AppMessage, AppModel, UpdateResult, update};
use crate::config::AppConfig;
use crate::constant::MIN_ZOOM;
use crate::fl;
use crate::ui::shell::{self, ParseError, ShellCommand};

/// Main application type.
pub struct CropperApp {
    pub model: AppModel,
    pub config: AppConfig,
}

impl CropperApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            model: AppModel::new(),
            config,
        }
    }

    /// Apply one message to the session.
    pub async fn dispatch(&mut self, message: AppMessage) -> UpdateResult {
        update(&mut self.model, &self.config, message).await
    }

    /// Print what `result` did, if anything.
    pub async fn report<W>(&self, result: &UpdateResult, out: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(line) = status::describe(&self.model, result) {
            write_line(out, &line).await?;
        }
        Ok(())
    }

    /// Open, select, crop and save in one go, as described by `args`.
    ///
    /// Returns the path the crop was saved to. The first failing step aborts
    /// the run.
    pub async fn run_once<W>(&mut self, args: &Args, out: &mut W) -> anyhow::Result<PathBuf>
    where
        W: AsyncWrite + Unpin,
    {
        let file = args.file.clone().context("no input file given")?;

        let mut messages = vec![AppMessage::OpenPath(file)];
        match args.rect {
            Some(area) => messages.push(AppMessage::ReportArea(area)),
            None => {
                if (args.zoom - MIN_ZOOM).abs() > f32::EPSILON {
                    messages.push(AppMessage::ZoomTo(args.zoom));
                }
                if args.pan_x != 0.0 || args.pan_y != 0.0 {
                    messages.push(AppMessage::Pan {
                        dx: args.pan_x,
                        dy: args.pan_y,
                    });
                }
            }
        }
        messages.push(AppMessage::ApplyCrop);
        messages.push(AppMessage::Download(args.output.clone()));
        if args.preview {
            messages.push(AppMessage::Preview);
        }

        let mut saved = None;
        for message in messages {
            match self.dispatch(message).await {
                UpdateResult::Failed(e) => return Err(e.into()),
                result => {
                    if let UpdateResult::Saved(path) = &result {
                        saved = Some(path.clone());
                    }
                    self.report(&result, out).await?;
                }
            }
        }

        saved.context("cropped image was not saved")
    }

    /// Read commands line by line until `quit` or end of input.
    ///
    /// Failed commands are reported and leave the session as it was; the
    /// shell keeps going.
    pub async fn run_shell<R, W>(&mut self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_line(out, &fl!("shell-welcome")).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("failed to read command")? {
            let command = match shell::parse(&line, &self.config) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(ParseError::Unknown(command)) => {
                    write_line(out, &fl!("shell-unknown", command = command)).await?;
                    continue;
                }
                Err(ParseError::Usage(usage)) => {
                    write_line(out, &fl!("shell-usage", usage = usage)).await?;
                    continue;
                }
            };

            match command {
                ShellCommand::Quit => break,
                ShellCommand::Help => write_line(out, &fl!("shell-help")).await?,
                ShellCommand::Info => {
                    for line in status::view(&self.model) {
                        write_line(out, &line).await?;
                    }
                }
                ShellCommand::Dispatch(messages) => {
                    let mut last = UpdateResult::None;
                    for message in messages {
                        last = self.dispatch(message).await;
                        if last.is_failure() {
                            break;
                        }
                    }
                    self.report(&last, out).await?;
                }
            }
        }

        out.flush().await?;
        Ok(())
    }
}

async fn write_line<W>(out: &mut W, line: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
