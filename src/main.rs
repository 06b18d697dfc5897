// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Oread CLI entrypoint.
//!
//! Runs the interactive board editor in the terminal. The board image is an
//! opaque reference shown in the title, never opened; steps load from and
//! export to a JSON side file.

use std::error::Error;
use std::path::{Path, PathBuf};

use oread::editor::Editor;
use oread::store::{read_steps_file, WriteDurability, DEFAULT_EXPORT_FILENAME};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <board-image> [--steps <file>] [--export <file>] [--durable-writes]\n  {program} --demo [--export <file>] [--durable-writes]\n\nThe board image is treated as an opaque reference; it is displayed, never\nopened.\n\n--steps names the JSON file to load existing steps from; a missing file\nstarts an empty board. --export overrides where `e` writes; it defaults to\nthe --steps file, or `{DEFAULT_EXPORT_FILENAME}` beside the image.\n\n--demo uses a built-in demo board and cannot be combined with a board\nimage or --steps.\n\n--durable-writes opts into slower, best-effort durable exports (fsync/sync\nwhere supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    image: Option<String>,
    steps_file: Option<String>,
    export_file: Option<String>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--steps" => {
                if options.steps_file.is_some() {
                    return Err(());
                }
                options.steps_file = Some(args.next().ok_or(())?);
            }
            "--export" => {
                if options.export_file.is_some() {
                    return Err(());
                }
                options.export_file = Some(args.next().ok_or(())?);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.image.is_some() {
                    return Err(());
                }
                options.image = Some(arg);
            }
        }
    }

    if options.demo && (options.image.is_some() || options.steps_file.is_some()) {
        return Err(());
    }
    if !options.demo && options.image.is_none() {
        return Err(());
    }

    Ok(options)
}

/// Where `e` writes: `--export` wins, then the `--steps` file, then
/// `board-steps.json` beside the image.
fn export_path(options: &CliOptions) -> PathBuf {
    if let Some(export) = &options.export_file {
        return PathBuf::from(export);
    }
    if let Some(steps) = &options.steps_file {
        return PathBuf::from(steps);
    }
    match &options.image {
        Some(image) => match Path::new(image).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.join(DEFAULT_EXPORT_FILENAME)
            }
            _ => PathBuf::from(DEFAULT_EXPORT_FILENAME),
        },
        None => PathBuf::from(DEFAULT_EXPORT_FILENAME),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "oread".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let export = export_path(&options);
        let durability = if options.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };

        let editor = if options.demo {
            oread::tui::demo_board()
        } else {
            let image = options.image.unwrap_or_default();
            match options.steps_file.as_deref() {
                Some(steps) if Path::new(steps).exists() => {
                    let steps = Path::new(steps);
                    let (board, report) = read_steps_file(steps)?;
                    if !report.is_clean() {
                        eprintln!(
                            "{program}: repaired {report} while loading {}",
                            steps.display()
                        );
                    }
                    Editor::with_board(image, board)
                }
                _ => Editor::new(image),
            }
        };

        oread::tui::run_with_editor(editor, export, durability)
    })();

    if let Err(err) = result {
        eprintln!("oread: {err}");
        std::process::exit(1);
    }
}
