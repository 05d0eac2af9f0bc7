// src/config/state.rs
use super::options::AppOptions;

pub const DEFAULT_STORE_URL: &str = "https://store.steampowered.com/app/220/";

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the URL bar
    pub url_text: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url_text: s!(DEFAULT_STORE_URL),
            window_w: 640,
            window_h: 720,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn load() -> Self {
        Self { options: AppOptions::load(), gui: GuiState::default() }
    }
}
