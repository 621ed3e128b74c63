// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/shell.rs
//
// Interactive shell commands and their mapping to application messages.

use std::path::PathBuf;

use crate::app::AppMessage;
use crate::config::AppConfig;
use crate::domain::document::operations::CropArea;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Messages to feed to `update`, in order.
    Dispatch(Vec<AppMessage>),
    Info,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    Usage(&'static str),
}

/// Map one input line to a command. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str, config: &AppConfig) -> Result<Option<ShellCommand>, ParseError> {
    use AppMessage::{
        ApplyCrop, CropDragEnd, CropDragMove, CropDragStart, Download, OpenPath, Pan, Preview,
        ReportArea, ResetSelection, ZoomAt, ZoomIn, ZoomOut, ZoomTo,
    };

    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));
    let args: Vec<&str> = rest.split_whitespace().collect();
    let one = |m: AppMessage| -> Result<Option<ShellCommand>, ParseError> {
        Ok(Some(ShellCommand::Dispatch(vec![m])))
    };

    match command.to_ascii_lowercase().as_str() {
        "open" | "o" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("open <path>"));
            }
            one(OpenPath(PathBuf::from(rest)))
        }

        "zoom" | "z" => {
            let [zoom] = numbers::<1>(&args).ok_or(ParseError::Usage("zoom <1..3>"))?;
            one(ZoomTo(zoom))
        }
        "zoom+" | "+" | "=" => one(ZoomIn),
        "zoom-" | "-" => one(ZoomOut),
        "zoom-at" => {
            let [zoom, x, y] =
                numbers::<3>(&args).ok_or(ParseError::Usage("zoom-at <z> <x> <y>"))?;
            one(ZoomAt { zoom, x, y })
        }

        "pan" | "p" => {
            let step = config.pan_step;
            let (dx, dy) = match args.as_slice() {
                ["left"] => (-step, 0.0),
                ["right"] => (step, 0.0),
                ["up"] => (0.0, -step),
                ["down"] => (0.0, step),
                _ => {
                    let [dx, dy] = numbers::<2>(&args)
                        .ok_or(ParseError::Usage("pan <dx> <dy> | pan left|right|up|down"))?;
                    (dx, dy)
                }
            };
            one(Pan { dx, dy })
        }

        "drag" => {
            let [x0, y0, x1, y1] =
                numbers::<4>(&args).ok_or(ParseError::Usage("drag <x0> <y0> <x1> <y1>"))?;
            Ok(Some(ShellCommand::Dispatch(vec![
                CropDragStart { x: x0, y: y0 },
                CropDragMove { x: x1, y: y1 },
                CropDragEnd,
            ])))
        }

        "rect" => {
            let [x, y, width, height] =
                numbers::<4>(&args).ok_or(ParseError::Usage("rect <x> <y> <w> <h>"))?;
            one(ReportArea(CropArea::new(x, y, width, height)))
        }

        "reset" | "0" => one(ResetSelection),
        "crop" | "c" => one(ApplyCrop),
        "save" | "s" | "download" => {
            let target = (!rest.is_empty()).then(|| PathBuf::from(rest));
            one(Download(target))
        }
        "preview" | "v" => one(Preview),
        "info" | "i" => Ok(Some(ShellCommand::Info)),
        "help" | "h" | "?" => Ok(Some(ShellCommand::Help)),
        "quit" | "q" | "exit" => Ok(Some(ShellCommand::Quit)),

        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn numbers<const N: usize>(args: &[&str]) -> Option<[f32; N]> {
    if args.len() != N {
        return None;
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.parse().ok()?;
    }
    Some(out)
}
