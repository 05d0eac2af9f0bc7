// src/gui/components/features_list.rs
//
// The store's features list as it currently stands: augmented when the wiki
// answered, native otherwise. Toggle actions are collected while drawing and
// applied afterwards.

use eframe::egui;

use crate::config::options::{Icon, IconSource};
use crate::data::Parity;
use crate::gui::{app::App, icons};
use crate::page::ListItem;
use crate::render::InfoRow;

use super::{row_frame, toggle_panel};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(host) = app.host.as_ref() else {
        ui.weak("Enter a store page URL and press Load.");
        return;
    };

    ui.heading(host.game_id.as_deref().map_or(s!("Store page"), |id| format!("App {id}")));
    ui.separator();

    let icon_src = &app.state.options.icons;
    let mut events = Vec::new();

    match (&app.augmented, &host.features) {
        (Some(aug), _) => {
            if let Some(panel) = &aug.list.panel {
                toggle_panel::draw(ui, panel, icon_src, &mut events);
            }
            let mut native = 0;
            for item in &aug.list.items {
                match item {
                    ListItem::Native(label) => {
                        native_row(ui, label, Parity::alternating(native));
                        native += 1;
                    }
                    ListItem::Info(row) => info_row(ui, row, icon_src),
                }
            }
        }
        (None, Some(features)) => {
            for (i, label) in features.iter().enumerate() {
                native_row(ui, label, Parity::alternating(i));
            }
        }
        (None, None) => {
            ui.weak("No features list on this page.");
        }
    }

    for event in events {
        app.apply_toggle(event);
    }
}

fn native_row(ui: &mut egui::Ui, label: &str, parity: Parity) {
    row_frame(ui, parity).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(label);
    });
}

fn info_row(ui: &mut egui::Ui, row: &InfoRow, icon_src: &IconSource) {
    if !row.visible {
        return;
    }
    row_frame(ui, row.parity).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if let Some(img) = icons::image(icon_src, Icon::Info) {
                ui.add(img);
            }
            ui.hyperlink_to(&row.label, &row.href);
        });
    });
}
