// src/gui/components/url_bar.rs
//
// Address bar. Loading a page is the trigger for the whole pipeline.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Store page");

        let width = (ui.available_width() - 60.0).max(120.0);
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("https://store.steampowered.com/app/…")
                .desired_width(width),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Load").clicked() || submitted {
            let ctx = ui.ctx().clone();
            app.load(&ctx);
        }
    });
}
