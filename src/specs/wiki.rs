// src/specs/wiki.rs
//! Scraping spec for the PCGamingWiki network table.
//!
//! The API answers `appid.php?appid=N` with the game's article. The part we
//! care about looks like:
//!
//! ```text
//! <tr class="table-network-multiplayer-body-row">
//!   <th>Local play</th>
//!   <td class="table-network-multiplayer-body-rating"><div title="Native support"></div></td>
//!   <td class="table-network-multiplayer-body-players">4</td>
//! </tr>
//! ```
//!
//! Rows are addressed with `:nth-of-type`, so the index counts every `<tr>`
//! sibling including the table's header row. That is where the `+ 2` comes from.

use scraper::Html;

use crate::config::consts::*;
use crate::core::html::{select_first, selector, text_of};
use crate::data::{Category, MultiplayerRecord, SupportStatus};
use crate::error::FlagsError;

pub fn api_url(game_id: &str) -> String {
    format!("{WIKI_API}?appid={game_id}")
}

/// Where the injected row links to.
pub fn detail_link(game_id: &str) -> String {
    join!(api_url(game_id), NETWORK_FRAGMENT)
}

/// One row of the network table, read by label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowInfo {
    pub heading: String,
    pub display_value: String,
    pub detail_link: String,
}

/// Read the row whose header contains `label`, falling back to row
/// `fallback_row` when no header matches.
pub fn extract_row(
    doc: &Html,
    label: &str,
    fallback_row: usize,
    game_id: &str,
) -> Result<RowInfo, FlagsError> {
    let row_index = resolve_row_index(doc, label, fallback_row)?;
    let row_css = format!(".{ROW_CLASS}:nth-of-type({row_index})");

    // A cell literally reading "Unknown" counts as no data.
    let players = select_first(doc, &format!("{row_css} .{PLAYERS_CLASS}"))?
        .map(|el| text_of(el).trim().to_string())
        .filter(|p| p != UNKNOWN);

    let mut status = SupportStatus::Unknown;
    if let Some(el) = select_first(doc, &format!("{row_css} .{RATING_CLASS} div"))? {
        if let Some(s) = el.value().attr("title").and_then(SupportStatus::from_title) {
            status = s;
        }
    }

    // Article exists but has no network data: call it unsupported.
    if players.is_none() && status == SupportStatus::Unknown
        && select_first(doc, &format!(".{INFOBOX_TITLE_CLASS}"))?.is_some()
    {
        status = SupportStatus::Unsupported;
    }

    let display_value = match players {
        Some(p) if status == SupportStatus::Mods => join!(p, status.as_str()),
        Some(p) => p,
        None => s!(status.as_str()),
    };

    Ok(RowInfo {
        heading: label.replacen("play", "Multiplayer", 1),
        display_value,
        detail_link: detail_link(game_id),
    })
}

/// Last row whose `<th>` contains `label`, as an `nth-of-type` index.
fn resolve_row_index(doc: &Html, label: &str, fallback_row: usize) -> Result<usize, FlagsError> {
    let rows = selector(&format!(".{ROW_CLASS}"))?;
    let th = selector("th")?;

    let mut row_index = fallback_row;
    for (i, row) in doc.select(&rows).enumerate() {
        if let Some(header) = row.select(&th).next() {
            if text_of(header).contains(label) {
                row_index = i + 2;
            }
        }
    }
    Ok(row_index)
}

pub fn extract(doc: &Html, category: Category, game_id: &str) -> Result<MultiplayerRecord, FlagsError> {
    let row = extract_row(doc, category.play_label(), category.fallback_row(), game_id)?;
    Ok(MultiplayerRecord {
        category,
        heading: row.heading,
        display_value: row.display_value,
        detail_link: row.detail_link,
    })
}

/// Local, LAN and Online, in render order.
pub fn extract_all(doc: &Html, game_id: &str) -> Result<[MultiplayerRecord; 3], FlagsError> {
    Ok([
        extract(doc, Category::Local, game_id)?,
        extract(doc, Category::Lan, game_id)?,
        extract(doc, Category::Online, game_id)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse;

    const TABLE: &str = r#"
        <table class="table-network-multiplayer">
          <tr class="table-network-multiplayer-header-row"><th>Type</th><th>Rating</th><th>Players</th></tr>
          <tr class="table-network-multiplayer-body-row">
            <th class="table-network-multiplayer-body-parameter">Local play</th>
            <td class="table-network-multiplayer-body-rating"><div class="svg-icon" title="No native support"></div></td>
            <td class="table-network-multiplayer-body-players"></td>
          </tr>
          <tr class="table-network-multiplayer-body-row">
            <th class="table-network-multiplayer-body-parameter">LAN play</th>
            <td class="table-network-multiplayer-body-rating"><div class="svg-icon" title="Hackable"></div></td>
            <td class="table-network-multiplayer-body-players">1-4</td>
          </tr>
          <tr class="table-network-multiplayer-body-row">
            <th class="table-network-multiplayer-body-parameter">Online play</th>
            <td class="table-network-multiplayer-body-rating"><div class="svg-icon" title="Native support"></div></td>
            <td class="table-network-multiplayer-body-players"> 32 </td>
          </tr>
        </table>"#;

    #[test]
    fn urls() {
        assert_eq!(api_url("220"), "https://www.pcgamingwiki.com/api/appid.php?appid=220");
        assert_eq!(detail_link("220"), "https://www.pcgamingwiki.com/api/appid.php?appid=220#Network");
    }

    #[test]
    fn label_lookup_offsets_by_two() {
        let doc = parse(TABLE);
        assert_eq!(resolve_row_index(&doc, "Online play", 9).unwrap(), 4);
        assert_eq!(resolve_row_index(&doc, "Splitscreen", 9).unwrap(), 9);
    }

    #[test]
    fn reads_all_three_rows() {
        let doc = parse(TABLE);
        let [local, lan, online] = extract_all(&doc, "42").unwrap();

        // Empty players cell is known-but-empty, so the status is not used.
        assert_eq!(local.display_value, "");
        assert_eq!(local.heading, "Local Multiplayer");
        assert_eq!(lan.display_value, "1-4 (Mods)");
        assert_eq!(online.display_value, "32");
        assert_eq!(online.category, Category::Online);
    }

    #[test]
    fn unknown_players_text_falls_back_to_status() {
        let doc = parse(&TABLE.replace("1-4", "Unknown"));
        let lan = extract(&doc, Category::Lan, "1").unwrap();
        assert_eq!(lan.display_value, " (Mods)");
    }

    #[test]
    fn unrecognized_title_keeps_unknown() {
        let doc = parse(r#"
            <table>
              <tr><th>Type</th></tr>
              <tr class="table-network-multiplayer-body-row"><th>Local play</th>
                <td class="table-network-multiplayer-body-rating"><div title="Limited"></div></td></tr>
            </table>"#);
        let local = extract(&doc, Category::Local, "1").unwrap();
        assert_eq!(local.display_value, "Unknown");
    }
}
