// src/specs/store_page.rs
//! Scraping spec for the Steam store app page.
//!
//! - `game_id_from_url`: second path segment of `/app/{id}/…`.
//! - `parse_features`: text of each child of `.game_area_features_list_ctn`,
//!   or `None` when the page has no features list at all.

use url::Url;

use crate::config::consts::{FEATURES_LIST_CLASS, STORE_APP_SEGMENT, STORE_HOST};
use crate::core::html::{child_elements, parse, select_first, text_of};
use crate::core::{net, sanitize::normalize_ws};
use crate::error::FlagsError;
use crate::page::HostPage;

// Skip the age gate on mature titles.
const AGE_GATE_COOKIE: &str = "birthtime=0; lastagecheckage=1-0-1900; wants_mature_content=1";

/// `*://store.steampowered.com/app/*`
pub fn is_store_app_url(input: &str) -> bool {
    let Ok(url) = Url::parse(input) else { return false };
    url.host_str() == Some(STORE_HOST)
        && url.path_segments()
            .and_then(|mut segs| segs.next())
            .is_some_and(|first| first == STORE_APP_SEGMENT)
}

/// `pathname.split('/')[2]`, if non-empty.
pub fn game_id_from_path(path: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .nth(2)
        .filter(|seg| !seg.is_empty())
        .map(|seg| s!(seg))
}

/// Accepts a full store URL or a bare path.
pub fn game_id_from_url(input: &str) -> Option<String> {
    match Url::parse(input.trim()) {
        Ok(url) => game_id_from_path(url.path()),
        Err(_) => game_id_from_path(input.trim()),
    }
}

/// Child labels of the features list; `None` when the container is missing.
pub fn parse_features(doc: &str) -> Result<Option<Vec<String>>, FlagsError> {
    let html = parse(doc);
    let Some(list) = select_first(&html, &format!(".{FEATURES_LIST_CLASS}"))? else {
        return Ok(None);
    };
    Ok(Some(child_elements(list).map(|el| normalize_ws(&text_of(el))).collect()))
}

/// Load the store page the way a browser would, before any augmentation runs.
pub fn load(url: &str) -> Result<HostPage, FlagsError> {
    let doc = net::http_get_with(url, &[("Cookie", AGE_GATE_COOKIE)])?;
    let features = parse_features(&doc)?;
    logf!(
        "Store: loaded {} (features list: {})",
        url,
        features.as_ref().map_or(s!("absent"), |f| format!("{} entries", f.len()))
    );
    Ok(HostPage { url: s!(url), game_id: game_id_from_url(url), features })
}
