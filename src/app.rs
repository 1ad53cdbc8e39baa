// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app owns one annotation session and translates toolbar clicks,
//! keyboard shortcuts and canvas pointer events into session operations.
//! The texture is re-uploaded only when the session's bitmap changes.

use crate::models::session::Session;
use crate::ui::{canvas, toolbar};
use std::path::PathBuf;

/// Last message shown in the status line.
enum Status {
    Info(String),
    Error(String),
}

/// Main application state.
pub struct AnnotatorApp {
    session: Session,

    /// Texture of the session's current bitmap
    image_texture: Option<egui::TextureHandle>,

    /// Session generation the texture was built from
    texture_generation: Option<u64>,

    status: Option<Status>,
}

impl AnnotatorApp {
    /// Create the app, loading the configured file if there is one.
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            image_texture: None,
            texture_generation: None,
            status: None,
        };

        if let Some(path) = app.session.config().path.clone() {
            app.load_image_file(path);
        }
        app
    }

    /// Load an image into the session, keeping the old one on failure.
    fn load_image_file(&mut self, path: PathBuf) {
        match self.session.load_image(&path) {
            Ok(()) => {
                log::info!("Opened {}", path.display());
                self.status = Some(Status::Info(format!("Opened {}", path.display())));
            }
            Err(e) => {
                log::error!("Error loading image: {:#}", e);
                self.status = Some(Status::Error(format!("Error loading image: {:#}", e)));
            }
        }
    }

    fn open_image(&mut self) {
        if !self.session.open_allowed() {
            log::warn!("Cannot open a new file while saving in place");
            self.status = Some(Status::Error("Cannot open a new file while saving in place".to_string()));
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp"])
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    fn save_image(&mut self) {
        if !self.session.has_image() {
            log::warn!("Nothing to save");
            return;
        }

        let result = if self.session.saves_in_place() {
            self.session.save()
        } else {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name("annotated.png")
                .save_file()
            else {
                return;
            };
            self.session.save_as(&path).map(|()| path)
        };

        self.status = Some(match result {
            Ok(path) => Status::Info(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("Failed to save image: {:#}", e);
                Status::Error(format!("Failed to save image: {:#}", e))
            }
        });
    }

    /// Rebuild the texture when the session shows a different bitmap.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        if self.texture_generation == Some(self.session.generation()) {
            return;
        }
        self.texture_generation = Some(self.session.generation());

        let Some(bitmap) = self.session.current_bitmap() else {
            self.image_texture = None;
            return;
        };
        let size = [bitmap.width() as usize, bitmap.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw());

        match self.image_texture.as_mut() {
            Some(texture) => texture.set(color_image, egui::TextureOptions::NEAREST),
            None => {
                self.image_texture =
                    Some(ctx.load_texture("annotated_image", color_image, egui::TextureOptions::NEAREST));
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        // Undo (Ctrl+Z)
        if ctx.input(|i| i.modifiers.command && !i.modifiers.shift && i.key_pressed(egui::Key::Z)) {
            self.session.undo();
        }

        // Redo (Ctrl+Shift+Z or Ctrl+Y)
        if ctx.input(|i| {
            (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        }) {
            self.session.redo();
        }
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(
                    ui,
                    self.session.config(),
                    self.session.undo_available(),
                    self.session.redo_available(),
                )
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::Open => self.open_image(),
            toolbar::ToolbarAction::Save => self.save_image(),
            toolbar::ToolbarAction::Undo => {
                self.session.undo();
            }
            toolbar::ToolbarAction::Redo => {
                self.session.redo();
            }
            toolbar::ToolbarAction::None => {}
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.status {
                    Some(Status::Info(message)) => {
                        ui.label(message);
                    }
                    Some(Status::Error(message)) => {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                    None => {
                        ui.label("No file loaded");
                    }
                }
                if let Some(position) = self.session.history_position() {
                    ui.separator();
                    ui.label(format!("Edit {}/{}", position, self.session.history_len() - 1));
                }
                if let Some(number) = self.session.current_number().filter(|_| self.session.config().numbers) {
                    ui.separator();
                    ui.label(format!("Next number: {}", number));
                }
            });
        });

        self.refresh_texture(ctx);

        let image_size = self.session.current_bitmap().map(|b| b.dimensions());
        let stroke_width = self.session.scaling().map_or(1, |s| s.stroke_width);
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    &self.image_texture,
                    image_size,
                    self.session.preview(),
                    stroke_width,
                )
            })
            .inner;

        for action in actions {
            match action {
                canvas::CanvasAction::Press(point) => self.session.press(point),
                canvas::CanvasAction::Drag(point) => self.session.drag(point),
                canvas::CanvasAction::Release(point) => {
                    self.session.release(point);
                }
                canvas::CanvasAction::ReleaseAtLast => {
                    self.session.release_at_last();
                }
            }
        }

        // The commit changes the bitmap after the canvas was painted
        if self.texture_generation != Some(self.session.generation()) {
            ctx.request_repaint();
        }
    }
}
