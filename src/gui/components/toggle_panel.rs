// src/gui/components/toggle_panel.rs
//
// Draws the toggle panel and reports what the user did. The checkbox and
// the label beside it are separate widgets, so a click lands on exactly one.

use eframe::egui;

use crate::config::options::{Icon, IconSource};
use crate::gui::icons;
use crate::toggle::{ToggleEvent, ToggleMenu};

use super::row_frame;

pub fn draw(ui: &mut egui::Ui, panel: &ToggleMenu, icon_src: &IconSource, events: &mut Vec<ToggleEvent>) {
    let header = ui.horizontal(|ui| {
        if let Some(img) = icons::image(icon_src, Icon::Toggle) {
            ui.add(img);
        }
        ui.add(egui::Label::new(egui::RichText::new(panel.title()).strong()).sense(egui::Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand)
    }).inner;

    if header.clicked() {
        events.push(ToggleEvent::Header);
    }

    if panel.is_open() {
        for entry in panel.entries() {
            row_frame(ui, entry.parity()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let mut checked = entry.checked;
                    if ui.checkbox(&mut checked, "").changed() {
                        events.push(ToggleEvent::Checkbox { category: entry.category, checked });
                    }
                    let row = ui.add(egui::Label::new(entry.label()).sense(egui::Sense::click()));
                    if row.clicked() {
                        events.push(ToggleEvent::Row(entry.category));
                    }
                });
            });
        }
    }

    ui.add_space(10.0);
}
