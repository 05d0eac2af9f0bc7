// src/page.rs
//
// In-memory model of the host store page.
//
// - HostPage: what the store page looked like when it loaded.
// - FeaturesList: the features list after augmentation. Native entries that
//   survived, injected rows, and the toggle panel on top.

use crate::error::FlagsError;
use crate::render::InfoRow;
use crate::specs::store_page;
use crate::toggle::ToggleMenu;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostPage {
    pub url: String,
    pub game_id: Option<String>,
    /// Child labels of `.game_area_features_list_ctn`; `None` if the page has none.
    pub features: Option<Vec<String>>,
}

impl HostPage {
    /// Build from already-fetched store HTML.
    pub fn from_html(url: &str, doc: &str) -> Result<Self, FlagsError> {
        Ok(Self {
            url: s!(url),
            game_id: store_page::game_id_from_url(url),
            features: store_page::parse_features(doc)?,
        })
    }

    pub fn has_features_list(&self) -> bool {
        self.features.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    Native(String),
    Info(InfoRow),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeaturesList {
    /// Prepended toggle panel.
    pub panel: Option<ToggleMenu>,
    pub items: Vec<ListItem>,
}

impl FeaturesList {
    /// The list as the store shipped it.
    pub fn native(features: &[String]) -> Self {
        Self {
            panel: None,
            items: features.iter().cloned().map(ListItem::Native).collect(),
        }
    }

    /// `document.getElementById(id)` restricted to injected rows.
    pub fn row(&self, id: &str) -> Option<&InfoRow> {
        self.items.iter().find_map(|item| match item {
            ListItem::Info(row) if row.id == id => Some(row),
            _ => None,
        })
    }

    pub fn row_mut(&mut self, id: &str) -> Option<&mut InfoRow> {
        self.items.iter_mut().find_map(|item| match item {
            ListItem::Info(row) if row.id == id => Some(row),
            _ => None,
        })
    }

    pub fn native_labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            ListItem::Native(label) => Some(label.as_str()),
            ListItem::Info(_) => None,
        })
    }
}
