// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation session state machine.
//!
//! A session owns the loaded image's history, its scaling profile and the
//! transient drag state. Press/drag/release build a rectangle; release is
//! the only operation that commits new state. The label counter lives in
//! the history entries, so undo and redo rewind numbering as well.

use super::config::SessionConfig;
use super::history::{HistoryEntry, HistoryStack};
use super::scaling::{compute_scaling, ScalingProfile};
use crate::io::media;
use crate::render::annotation::{render_annotation, Label};
use crate::util::geometry::{PixelRect, Point};
use ab_glyph::FontArc;
use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Anchor and latest pointer position while a button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub anchor: Point,
    pub current: Point,
}

impl DragState {
    pub fn rect(&self) -> PixelRect {
        PixelRect::from_corners(self.anchor, self.current)
    }
}

/// State belonging to one loaded image. Replaced wholesale on load.
struct LoadedImage {
    history: HistoryStack,
    scaling: ScalingProfile,
}

/// One interactive annotation session.
pub struct Session {
    config: SessionConfig,
    /// Label font; numbers are only rasterized when one is present
    font: Option<FontArc>,
    image: Option<LoadedImage>,
    drag: Option<DragState>,
    /// Bumped whenever the displayed bitmap changes
    generation: u64,
}

impl Session {
    /// Create a session with no image loaded.
    pub fn new(config: SessionConfig, font: Option<FontArc>) -> Self {
        Self {
            config,
            font,
            image: None,
            drag: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether another file may be opened (not in in-place mode).
    pub fn open_allowed(&self) -> bool {
        !(self.config.in_place && self.image.is_some())
    }

    /// Decode `path` and start a fresh history from it.
    ///
    /// On failure the current session is left exactly as it was.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        if !self.open_allowed() {
            bail!("cannot open another file while saving in place");
        }
        let bitmap = media::load_image(path)?;
        self.load_bitmap(bitmap, Some(path.to_path_buf()));
        Ok(())
    }

    /// Replace the session with `bitmap`: new scaling profile, counter
    /// reset to the initial number, single-entry history.
    pub fn load_bitmap(&mut self, bitmap: RgbaImage, path: Option<PathBuf>) {
        let scaling = compute_scaling(bitmap.width(), bitmap.height(), self.config.scale);
        log::info!(
            "Loaded {}x{} image, stroke width {}, font size {}",
            bitmap.width(),
            bitmap.height(),
            scaling.stroke_width,
            scaling.font_size
        );

        self.image = Some(LoadedImage {
            history: HistoryStack::new(HistoryEntry::new(bitmap, self.config.initial_number)),
            scaling,
        });
        self.drag = None;
        if path.is_some() {
            self.config.path = path;
        }
        self.generation += 1;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Start a drag at `point`. Ignored when no image is loaded.
    pub fn press(&mut self, point: Point) {
        if self.image.is_none() {
            return;
        }
        self.drag = Some(DragState {
            anchor: point,
            current: point,
        });
    }

    /// Move the preview corner. Ignored unless a drag is in progress.
    pub fn drag(&mut self, point: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = point;
        }
    }

    /// Finish the drag at `point` and commit the rectangle.
    ///
    /// Returns whether a new history entry was pushed.
    pub fn release(&mut self, point: Point) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let Some(image) = self.image.as_mut() else {
            return false;
        };

        let current = image.history.current();
        let number = current.next_number;

        let (bitmap, next_number) = if self.config.numbers {
            let Some(next_number) = number.checked_add(1) else {
                log::warn!("Label counter exhausted at {}, rectangle not committed", number);
                return false;
            };
            let label = self
                .font
                .as_ref()
                .map(|font| Label::number(number, font, image.scaling.font_size));
            let bitmap = render_annotation(
                &current.bitmap,
                drag.anchor,
                point,
                image.scaling.stroke_width,
                label.as_ref(),
            );
            (bitmap, next_number)
        } else {
            let bitmap = render_annotation(&current.bitmap, drag.anchor, point, image.scaling.stroke_width, None);
            (bitmap, number)
        };

        image.history.push(HistoryEntry::new(bitmap, next_number));
        self.generation += 1;

        let rect = PixelRect::from_corners(drag.anchor, point);
        log::info!(
            "Committed rectangle ({}, {})-({}, {}), history {}/{}",
            rect.x0,
            rect.y0,
            rect.x1,
            rect.y1,
            image.history.position() + 1,
            image.history.len()
        );
        true
    }

    /// Rectangle to show while dragging, normalized.
    pub fn preview(&self) -> Option<PixelRect> {
        self.drag.map(|drag| drag.rect())
    }

    /// Commit the drag at its last known position, for when the pointer
    /// position at release is unknown.
    pub fn release_at_last(&mut self) -> bool {
        match self.drag {
            Some(drag) => self.release(drag.current),
            None => false,
        }
    }

    /// Step back one commit. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let Some(image) = self.image.as_mut() else {
            return false;
        };
        if image.history.undo().is_none() {
            return false;
        }
        self.drag = None;
        self.generation += 1;
        log::info!("Undo, history {}/{}", image.history.position() + 1, image.history.len());
        true
    }

    /// Re-apply the next commit. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        let Some(image) = self.image.as_mut() else {
            return false;
        };
        if image.history.redo().is_none() {
            return false;
        }
        self.drag = None;
        self.generation += 1;
        log::info!("Redo, history {}/{}", image.history.position() + 1, image.history.len());
        true
    }

    pub fn undo_available(&self) -> bool {
        self.image.as_ref().is_some_and(|image| image.history.can_undo())
    }

    pub fn redo_available(&self) -> bool {
        self.image.as_ref().is_some_and(|image| image.history.can_redo())
    }

    /// The bitmap currently shown, i.e. the current history entry's.
    pub fn current_bitmap(&self) -> Option<&RgbaImage> {
        self.image.as_ref().map(|image| &image.history.current().bitmap)
    }

    /// Number the next committed rectangle will be labelled with.
    pub fn current_number(&self) -> Option<i64> {
        self.image.as_ref().map(|image| image.history.current().next_number)
    }

    pub fn scaling(&self) -> Option<ScalingProfile> {
        self.image.as_ref().map(|image| image.scaling)
    }

    pub fn history_len(&self) -> usize {
        self.image.as_ref().map_or(0, |image| image.history.len())
    }

    pub fn history_position(&self) -> Option<usize> {
        self.image.as_ref().map(|image| image.history.position())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Serialize the current bitmap in `format`.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let Some(bitmap) = self.current_bitmap() else {
            bail!("no image loaded");
        };
        media::encode_image(bitmap, format)
    }

    /// Whether `save` would write without asking for a destination.
    pub fn saves_in_place(&self) -> bool {
        self.config.in_place && self.config.path.is_some()
    }

    /// Save back to the loaded file (in-place mode).
    pub fn save(&self) -> Result<PathBuf> {
        let Some(path) = self.config.path.clone().filter(|_| self.config.in_place) else {
            bail!("no in-place target configured");
        };
        self.save_as(&path)?;
        Ok(path)
    }

    /// Save the current bitmap to `path`.
    pub fn save_as(&self, path: &Path) -> Result<()> {
        let bytes = self.encode(media::format_for_path(path)?)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to save image {}", path.display()))?;
        log::info!("Saved {}", path.display());
        Ok(())
    }
}
