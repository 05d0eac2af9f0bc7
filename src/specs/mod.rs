// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read one remote page and nothing else.
//!
//! - `wiki`: the PCGamingWiki `appid.php` fragment. Locates the network table
//!   rows and turns them into `MultiplayerRecord`s.
//! - `store_page`: the Steam store app page. Pulls the game id out of the URL
//!   and reads the features list the records get injected into.
//!
//! Specs do no caching, no preference reads and no rendering; `scrape`,
//! `render` and `toggle` own those. Both specs are testable offline against
//! inline HTML fixtures.
pub mod store_page;
pub mod wiki;
