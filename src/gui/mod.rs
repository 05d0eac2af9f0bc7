// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod icons;

pub use app::run;
