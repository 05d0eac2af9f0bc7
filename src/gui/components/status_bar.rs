// src/gui/components/status_bar.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.running {
            ui.spinner();
        }
        ui.label(&app.status);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let copy = ui.add_enabled(app.augmented.is_some(), egui::Button::new("Copy HTML"))
                .on_hover_text("Copy the injected markup");
            if copy.clicked() {
                app.copy_html(ui.ctx());
            }
        });
    });
}
