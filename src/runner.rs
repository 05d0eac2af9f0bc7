// src/runner.rs
//! Page-load pipeline.
//!
//! ```text
//! store page loads → game id from URL → scrape::fetch_then(game id)
//!                                      ↘ on_wiki_body → render → apply
//! ```
//!
//! The GUI drives the asynchronous half itself; `run_offline` strings the
//! whole thing together against captured HTML.

use crate::config::options::IconSource;
use crate::data::MultiplayerRecord;
use crate::error::FlagsError;
use crate::page::{FeaturesList, HostPage};
use crate::render::{render, RenderPlan};
use crate::scrape;
use crate::store::PreferenceStore;

/// Result of augmenting one page.
#[derive(Clone, Debug)]
pub struct Augmented {
    pub records: [MultiplayerRecord; 3],
    pub plan: RenderPlan,
    pub list: FeaturesList,
}

/// Completion step: the wiki body for `game_id` arrived.
pub fn on_wiki_body(
    host: &HostPage,
    game_id: &str,
    body: &str,
    prefs: &dyn PreferenceStore,
    icons: &IconSource,
) -> Option<Augmented> {
    let records = scrape::records_from_body(body, game_id);
    augment(host, records, prefs, icons)
}

/// Render and apply. `None` when the host has no features list.
pub fn augment(
    host: &HostPage,
    records: [MultiplayerRecord; 3],
    prefs: &dyn PreferenceStore,
    icons: &IconSource,
) -> Option<Augmented> {
    let features = host.features.as_deref();
    let Some(plan) = render(features, &records, prefs, icons) else {
        logd!("Render: no features list on {}, skipping", host.url);
        return None;
    };
    let list = plan.apply(features.unwrap_or_default());
    logf!(
        "Render: {} row(s), {} legacy tag(s) removed on {}",
        plan.rows.len(),
        plan.removals.len(),
        host.url
    );
    Some(Augmented { records, plan, list })
}

#[derive(Clone, Debug)]
pub struct PageLoad {
    pub host: HostPage,
    /// `None` when the URL has no game id or the page has no features list.
    pub augmented: Option<Augmented>,
}

/// Whole pipeline against captured store and wiki HTML. No network.
pub fn run_offline(
    url: &str,
    store_html: &str,
    wiki_body: &str,
    prefs: &dyn PreferenceStore,
    icons: &IconSource,
) -> Result<PageLoad, FlagsError> {
    let host = HostPage::from_html(url, store_html)?;
    let augmented = match host.game_id.as_deref() {
        Some(id) => on_wiki_body(&host, id, wiki_body, prefs, icons),
        None => None,
    };
    Ok(PageLoad { host, augmented })
}
