// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with file and history buttons.
//!
//! Undo/Redo follow history availability; mode indicators on the right
//! show numbering, in-place target and manual scale.

use crate::models::config::SessionConfig;

/// Button pressed on the toolbar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    Open,
    Save,
    Undo,
    Redo,
}

/// Display the toolbar.
pub fn show(
    ui: &mut egui::Ui,
    config: &SessionConfig,
    can_undo: bool,
    can_redo: bool,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("Open").clicked() {
            action = ToolbarAction::Open;
        }
        if ui.button("Save").clicked() {
            action = ToolbarAction::Save;
        }

        ui.separator();

        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            action = ToolbarAction::Undo;
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            action = ToolbarAction::Redo;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if config.numbers {
                ui.colored_label(egui::Color32::GREEN, "Auto-numbering ON");
            }
            if config.in_place {
                if let Some(path) = &config.path {
                    ui.colored_label(egui::Color32::RED, format!("In-place: {}", path.display()));
                }
            }
            if let Some(scale) = config.scale {
                ui.colored_label(egui::Color32::LIGHT_BLUE, format!("Scale: {}", scale));
            }
        });
    });

    action
}
