// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the image being annotated.
//!
//! The bitmap is shown at its native size inside a scroll area. Pointer
//! input is translated into bitmap pixel coordinates and reported back as
//! press/drag/release actions; the live preview is painted over the
//! texture and never touches the bitmap.

use crate::util::geometry::{to_pixel_coordinates, PixelRect, Point};

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    Press(Point),
    Drag(Point),
    Release(Point),
    /// Button released with no pointer position, e.g. outside the window
    ReleaseAtLast,
}

/// Display the canvas and collect this frame's pointer actions, in order.
pub fn show(
    ui: &mut egui::Ui,
    image_texture: &Option<egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    preview: Option<PixelRect>,
    stroke_width: u32,
) -> Vec<CanvasAction> {
    let mut actions = Vec::new();
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let (Some(texture), Some((img_width, img_height))) = (image_texture, image_size) else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Open an image to begin annotating")
                    .color(egui::Color32::from_gray(180)),
            );
        });
        return actions;
    };

    egui::ScrollArea::both().show(ui, |ui| {
        let (image_rect, response) = ui.allocate_exact_size(
            egui::vec2(img_width as f32, img_height as f32),
            egui::Sense::drag(),
        );

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let to_pixel = |pos: egui::Pos2| {
            to_pixel_coordinates(
                pos.x - image_rect.min.x,
                pos.y - image_rect.min.y,
                image_rect.width(),
                image_rect.height(),
                img_width,
                img_height,
            )
        };
        let pointer = response
            .interact_pointer_pos()
            .or_else(|| ui.ctx().pointer_latest_pos());

        if response.drag_started() {
            // Anchor where the button went down, not where the drag was detected
            let origin = ui.input(|i| i.pointer.press_origin()).or(pointer);
            if let Some(pos) = origin {
                actions.push(CanvasAction::Press(to_pixel(pos)));
            }
        }
        if response.drag_stopped() {
            actions.push(match pointer {
                Some(pos) => CanvasAction::Release(to_pixel(pos)),
                None => CanvasAction::ReleaseAtLast,
            });
        } else if response.dragged() {
            if let Some(pos) = pointer {
                actions.push(CanvasAction::Drag(to_pixel(pos)));
            }
        }

        if let Some(rect) = preview {
            let scale_x = image_rect.width() / img_width as f32;
            let scale_y = image_rect.height() / img_height as f32;
            let screen_rect = egui::Rect::from_min_max(
                image_rect.min + egui::vec2(rect.x0 as f32 * scale_x, rect.y0 as f32 * scale_y),
                image_rect.min
                    + egui::vec2((rect.x1 + 1) as f32 * scale_x, (rect.y1 + 1) as f32 * scale_y),
            );
            let width = (stroke_width.saturating_sub(1).max(1)) as f32 * scale_x;
            ui.painter().with_clip_rect(image_rect).rect_stroke(
                screen_rect,
                0.0,
                egui::Stroke::new(width, egui::Color32::RED),
            );
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });

    actions
}
