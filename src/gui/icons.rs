// src/gui/icons.rs
use std::sync::OnceLock;

use eframe::egui;

use crate::config::options::{Icon, IconSource};

static INFO_PNG: OnceLock<Option<Vec<u8>>> = OnceLock::new();
static TOGGLE_PNG: OnceLock<Option<Vec<u8>>> = OnceLock::new();

fn inline_png(icon: Icon) -> Option<&'static [u8]> {
    let cell = match icon {
        Icon::Info => &INFO_PNG,
        Icon::Toggle => &TOGGLE_PNG,
    };
    cell.get_or_init(|| match icon.png_bytes() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            loge!("Icons: {:?} failed to decode: {}", icon, e);
            None
        }
    })
    .as_deref()
}

/// Icon sized like the store's category icons.
pub fn image(source: &IconSource, icon: Icon) -> Option<egui::Image<'static>> {
    let img = match source {
        IconSource::Inline => {
            let uri = match icon {
                Icon::Info => "bytes://steam_flags/info.png",
                Icon::Toggle => "bytes://steam_flags/toggle.png",
            };
            egui::Image::from_bytes(uri, inline_png(icon)?)
        }
        IconSource::Hosted { .. } => egui::Image::from_uri(source.src(icon)),
    };
    Some(img.fit_to_exact_size(egui::vec2(26.0, 16.0)))
}
