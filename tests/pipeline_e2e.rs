// tests/pipeline_e2e.rs
//
// Whole page load against captured store and wiki HTML.
//
use steam_flags::config::options::IconSource;
use steam_flags::page::ListItem;
use steam_flags::runner::run_offline;
use steam_flags::store::{MemoryPrefs, PreferenceStore};

const STORE_URL: &str = "https://store.steampowered.com/app/220/HalfLife_2/";

const STORE_HTML: &str = r#"
<html><body>
  <div class="game_area_features_list_ctn">
    <a class="game_area_details_specs_ctn"><div class="icon"></div><div class="label">Single-player</div></a>
    <a class="game_area_details_specs_ctn"><div class="icon"></div><div class="label">Online PvP</div></a>
    <a class="game_area_details_specs_ctn"><div class="icon"></div><div class="label">Steam Achievements</div></a>
  </div>
</body></html>"#;

const WIKI_BODY: &str = r#"
<div class="template-infobox"><div class="template-infobox-title">Half-Life 2</div></div>
<table class="table-network-multiplayer">
  <tr class="table-network-multiplayer-header-row"><th>Type</th><th>Rating</th><th>Players</th></tr>
  <tr class="table-network-multiplayer-body-row">
    <th>Local play</th>
    <td class="table-network-multiplayer-body-rating"><div title="No native support"></div></td>
    <td class="table-network-multiplayer-body-players">Unknown</td>
  </tr>
  <tr class="table-network-multiplayer-body-row">
    <th>LAN play</th>
    <td class="table-network-multiplayer-body-rating"><div title="Native support"></div></td>
    <td class="table-network-multiplayer-body-players">2-16</td>
  </tr>
  <tr class="table-network-multiplayer-body-row">
    <th>Online play</th>
    <td class="table-network-multiplayer-body-rating"><div title="Native support"></div></td>
    <td class="table-network-multiplayer-body-players">2-16</td>
  </tr>
</table>"#;

#[test]
fn half_life_2_online_row() {
    let load = run_offline(STORE_URL, STORE_HTML, WIKI_BODY, &MemoryPrefs::new(), &IconSource::Inline).unwrap();
    assert_eq!(load.host.game_id.as_deref(), Some("220"));

    let aug = load.augmented.unwrap();
    let online = &aug.records[2];
    assert_eq!(online.heading, "Online Multiplayer");
    assert_eq!(online.display_value, "2-16");
    assert_eq!(online.detail_link, "https://www.pcgamingwiki.com/api/appid.php?appid=220#Network");

    let row = aug.list.row("onlineMultiplayer").unwrap();
    assert!(row.visible);
    assert_eq!(row.label, "Online Multiplayer: 2-16");
    assert_eq!(row.href, online.detail_link);
}

#[test]
fn legacy_tag_replaced_by_wiki_rows() {
    let load = run_offline(STORE_URL, STORE_HTML, WIKI_BODY, &MemoryPrefs::new(), &IconSource::Inline).unwrap();
    let list = load.augmented.unwrap().list;

    assert_eq!(
        list.native_labels().collect::<Vec<_>>(),
        vec!["Single-player", "Steam Achievements"]
    );
    let local = list.row("localMultiplayer").unwrap();
    assert_eq!(local.label, "Local Multiplayer: Unsupported");
    assert_eq!(list.items.iter().filter(|i| matches!(i, ListItem::Info(_))).count(), 3);
}

#[test]
fn stored_preference_hides_row() {
    let mut prefs = MemoryPrefs::new();
    prefs.set("lanMultiplayer", false);
    let load = run_offline(STORE_URL, STORE_HTML, WIKI_BODY, &prefs, &IconSource::Inline).unwrap();
    let html = load.augmented.unwrap().plan.to_html();
    assert!(html.contains(r#"id="lanMultiplayer" style="display: none;"#));
    assert!(html.contains(r#"id="onlineMultiplayer" style="display: flex;"#));
}

#[test]
fn page_without_features_list_is_left_alone() {
    let load = run_offline(STORE_URL, "<html><body></body></html>", WIKI_BODY, &MemoryPrefs::new(), &IconSource::Inline).unwrap();
    assert!(load.augmented.is_none());
    assert!(!load.host.has_features_list());
}

#[test]
fn url_without_game_id_skips_fetch() {
    let load = run_offline("https://store.steampowered.com/app/", STORE_HTML, WIKI_BODY, &MemoryPrefs::new(), &IconSource::Inline).unwrap();
    assert!(load.host.game_id.is_none());
    assert!(load.augmented.is_none());
}
