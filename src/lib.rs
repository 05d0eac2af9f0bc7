// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod data;
pub mod gui;
pub mod page;
pub mod render;
pub mod runner;
pub mod scrape;
pub mod store;
pub mod toggle;

pub use error::FlagsError;
