// src/gui/components/mod.rs
use eframe::egui;

use crate::data::Parity;

pub mod features_list;
pub mod status_bar;
pub mod toggle_panel;
pub mod url_bar;

/// Alternating row background, like the store's odd/even rows.
pub(crate) fn row_frame(ui: &egui::Ui, parity: Parity) -> egui::Frame {
    let fill = match parity {
        Parity::Odd => ui.visuals().faint_bg_color,
        Parity::Even => ui.visuals().extreme_bg_color,
    };
    egui::Frame::new().fill(fill).inner_margin(4.0)
}
