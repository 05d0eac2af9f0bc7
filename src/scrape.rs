// src/scrape.rs
//! Remote fetcher.
//!
//! One GET per page load against the wiki API. `fetch_then` runs it on a
//! worker thread and calls back once with the body; if the request fails the
//! callback never runs (the failure is only logged). A body that cannot be read
//! still yields records: all three "Unknown".

use std::thread::{self, JoinHandle};

use crate::core::{html, net};
use crate::data::{Category, MultiplayerRecord};
use crate::error::FlagsError;
use crate::specs::wiki;

/// Raw wiki fragment for `game_id`.
pub fn fetch(game_id: &str) -> Result<String, FlagsError> {
    let url = wiki::api_url(game_id);
    logd!("Wiki: GET {url}");
    net::http_get(&url)
}

/// Fetch on a worker thread; `on_load` runs at most once, on success only.
pub fn fetch_then<F>(game_id: &str, on_load: F) -> JoinHandle<()>
where
    F: FnOnce(String) + Send + 'static,
{
    fetch_url_then(&wiki::api_url(game_id), on_load)
}

pub(crate) fn fetch_url_then<F>(url: &str, on_load: F) -> JoinHandle<()>
where
    F: FnOnce(String) + Send + 'static,
{
    let url = s!(url);
    thread::spawn(move || {
        logd!("Wiki: GET {url}");
        match net::http_get(&url) {
            Ok(body) => {
                logf!("Wiki: {} bytes from {}", body.len(), url);
                on_load(body);
            }
            Err(e) => loge!("Wiki: request to {} failed: {}", url, e),
        }
    })
}

/// Local, LAN and Online records from a wiki body.
pub fn records_from_body(body: &str, game_id: &str) -> [MultiplayerRecord; 3] {
    let doc = html::parse(body);
    match wiki::extract_all(&doc, game_id) {
        Ok(records) => records,
        Err(e) => {
            loge!("Wiki: extract failed for app {}: {}", game_id, e);
            unknown_records(game_id)
        }
    }
}

pub fn unknown_records(game_id: &str) -> [MultiplayerRecord; 3] {
    let link = wiki::detail_link(game_id);
    Category::ALL.map(|c| MultiplayerRecord::unknown(c, &link))
}
