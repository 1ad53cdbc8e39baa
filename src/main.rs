// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shotmark - screenshot annotation tool
//!
//! Open an image, drag red rectangles onto it (optionally numbered),
//! undo/redo freely and save the result.

mod app;
mod io;
mod models;
mod render;
mod ui;
mod util;

use anyhow::Result;
use app::AnnotatorApp;
use clap::Parser;
use models::config::{parse_scale, SessionConfig};
use models::session::Session;
use std::path::PathBuf;

/// Simple screenshot annotation tool.
#[derive(Parser, Debug)]
#[command(name = "shotmark", version, about)]
struct Args {
    /// Image file to open
    file: Option<PathBuf>,

    /// Save changes back to the original file without prompting
    #[arg(long)]
    inplace: bool,

    /// Auto-label rectangles with auto-incrementing numbers
    #[arg(long)]
    numbers: bool,

    /// Manual scaling factor for rectangle & font sizes (overrides automatic scaling)
    #[arg(long, value_parser = parse_scale)]
    scale: Option<f64>,

    /// Initial number for auto-incrementing labels (requires --numbers)
    #[arg(long)]
    initial_number: Option<i64>,

    /// Bold font used for number labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Settings file (.yaml, .yml or .json); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the merged settings to this file and exit
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

impl Args {
    /// Merge the settings file (if any) with the command-line flags.
    fn into_config(self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => io::serialization::import_config(path)?,
            None => SessionConfig::default(),
        };

        config.numbers |= self.numbers;
        config.in_place |= self.inplace;
        if let Some(scale) = self.scale {
            config.scale = Some(scale);
        }
        if let Some(number) = self.initial_number {
            config.initial_number = number;
        }
        if let Some(font) = self.font {
            config.font_path = font;
        }
        if let Some(file) = self.file {
            config.path = Some(file);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let save_config = args.save_config.clone();
    let config = args.into_config()?;
    log::debug!("Session config: {:?}", config);

    if let Some(path) = save_config {
        io::serialization::export_config(&config, &path)?;
        log::info!("Wrote settings to {}", path.display());
        return Ok(());
    }

    // Labels cannot be drawn without the font, so this is fatal
    let font = if config.numbers {
        Some(io::font::load_bold_font(&config.font_path)?)
    } else {
        None
    };

    let session = Session::new(config, font);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Screenshot Annotator"),
        ..Default::default()
    };

    eframe::run_native(
        "Screenshot Annotator",
        options,
        Box::new(|_cc| Ok(Box::new(AnnotatorApp::new(session)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "shotmark",
            "shot.png",
            "--inplace",
            "--numbers",
            "--scale",
            "1.5",
            "--initial-number",
            "10",
        ]);
        let config = args.into_config().unwrap();
        assert!(config.in_place);
        assert!(config.numbers);
        assert_eq!(config.scale, Some(1.5));
        assert_eq!(config.initial_number, 10);
        assert_eq!(config.path, Some(PathBuf::from("shot.png")));
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = Args::parse_from(["shotmark"]).into_config().unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        assert!(Args::try_parse_from(["shotmark", "--scale", "0"]).is_err());
        assert!(Args::try_parse_from(["shotmark", "--scale", "-2"]).is_err());
    }

    #[test]
    fn test_flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "initial_number: 4\nscale: 3.0\n").unwrap();

        let args = Args::parse_from([
            "shotmark",
            "--config",
            path.to_str().unwrap(),
            "--scale",
            "0.5",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.initial_number, 4);
        assert_eq!(config.scale, Some(0.5));
        assert!(!config.numbers);
    }
}
