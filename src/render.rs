// src/render.rs
//! Page mutator.
//!
//! `render` decides what to change and returns a `RenderPlan`; it touches no
//! page. `RenderPlan::apply` performs the change on an in-memory features
//! list, `RenderPlan::to_html` emits the markup a browser would get.
//!
//! Decisions:
//! - No features list on the page → no plan.
//! - LAN or Online known → drop the first native entry matching each legacy
//!   store tag, in `LEGACY_TAGS` order.
//! - Rows always come out Local, LAN, Online; visibility comes from prefs
//!   (default shown). The toggle panel is always added.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::consts::LEGACY_TAGS;
use crate::config::options::{Icon, IconSource};
use crate::data::{Category, MultiplayerRecord, Parity};
use crate::page::{FeaturesList, ListItem};
use crate::store::PreferenceStore;
use crate::toggle::ToggleMenu;

/// One injected multiplayer row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRow {
    pub category: Category,
    pub id: &'static str,
    pub href: String,
    pub icon: String,
    pub label: String,
    pub parity: Parity,
    pub visible: bool,
}

impl InfoRow {
    /// CSS `display` value.
    pub fn display(&self) -> &'static str {
        if self.visible { "flex" } else { "none" }
    }
}

/// A native entry dropped in favour of the wiki rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removal {
    /// Position in the list as loaded.
    pub index: usize,
    pub tag: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    pub removals: Vec<Removal>,
    pub rows: Vec<InfoRow>,
    pub panel: ToggleMenu,
}

pub fn render(
    features: Option<&[String]>,
    records: &[MultiplayerRecord; 3],
    prefs: &dyn PreferenceStore,
    icons: &IconSource,
) -> Option<RenderPlan> {
    let features = features?;
    let [_, lan, online] = records;

    let removals = if !online.is_unknown() || !lan.is_unknown() {
        legacy_removals(features)
    } else {
        Vec::new()
    };

    let icon = icons.src(Icon::Info);
    let rows = records
        .iter()
        .map(|r| InfoRow {
            category: r.category,
            id: r.category.key(),
            href: r.detail_link.clone(),
            icon: icon.clone(),
            label: r.label(),
            parity: r.category.parity(),
            visible: prefs.get(r.category.key(), true),
        })
        .collect();

    Some(RenderPlan {
        removals,
        rows,
        panel: ToggleMenu::build(prefs, icons.src(Icon::Toggle)),
    })
}

/// For each legacy tag, the first remaining entry whose text contains it.
pub fn legacy_removals(features: &[String]) -> Vec<Removal> {
    let mut remaining: Vec<(usize, &str)> = features.iter().map(String::as_str).enumerate().collect();
    let mut out = Vec::new();
    for tag in LEGACY_TAGS {
        if let Some(pos) = remaining.iter().position(|(_, label)| label.contains(tag)) {
            let (index, _) = remaining.remove(pos);
            out.push(Removal { index, tag });
        }
    }
    out
}

impl RenderPlan {
    /// Resulting list for a page whose features list held `features`.
    pub fn apply(&self, features: &[String]) -> FeaturesList {
        let mut items: Vec<ListItem> = features
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.removals.iter().any(|r| r.index == *i))
            .map(|(_, label)| ListItem::Native(label.clone()))
            .collect();
        items.extend(self.rows.iter().cloned().map(ListItem::Info));
        FeaturesList { panel: Some(self.panel.clone()), items }
    }

    /// Markup for the toggle panel followed by the rows, in page order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let p = &self.panel;

        let _ = write!(
            out,
            r#"<div style="margin-bottom: 10px;"><a class="game_area_details_specs_ctn" style="cursor: pointer; display: flex; align-items: center;"><div class="icon"><img class="category_icon" src="{}"></div><div class="label">{}</div></a><div style="display: {};">"#,
            attr(p.icon()),
            text(p.title()),
            p.display(),
        );
        for entry in p.entries() {
            let _ = write!(
                out,
                r#"<div class="game_area_dlc_row {} ds_collapse_flag ds_collapse_flag_tiny es_highlight_checked" style="padding: 4px 0;"><label class="es_dlc_label"><input type="checkbox"{}></label>{}</div>"#,
                entry.category.parity().class(),
                if entry.checked { " checked" } else { "" },
                text(entry.category.title()),
            );
        }
        out.push_str("</div></div>");

        for row in &self.rows {
            let _ = write!(
                out,
                r#"<a class="game_area_details_specs_ctn multiplayer-info {} ds_collapse_flag ds_collapse_flag_tiny es_highlight_checked" href="{}" target="_blank" id="{}" style="display: {}; align-items: center;"><div class="icon"><img class="category_icon" src="{}"></div><div class="label">{}</div></a>"#,
                row.parity.class(),
                attr(&row.href),
                row.id,
                row.display(),
                attr(&row.icon),
                text(&row.label),
            );
        }
        out
    }
}
