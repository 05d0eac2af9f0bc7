// src/toggle.rs
//! Toggle controller.
//!
//! The panel has a header that opens/closes it (not persisted) and one
//! checkbox row per category. Two triggers change a category:
//! - `Checkbox`: the checkbox itself changed; carries the new state.
//! - `Row`: the row around the checkbox was clicked; flips the state.
//!
//! A user action hits exactly one of the two targets, so one action never
//! toggles twice. Either way the checkbox, the injected row's visibility and
//! the stored preference end up equal.

use crate::config::consts::TOGGLE_MENU_TITLE;
use crate::data::{Category, Parity};
use crate::page::FeaturesList;
use crate::store::PreferenceStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleEntry {
    pub category: Category,
    pub checked: bool,
}

impl ToggleEntry {
    pub fn label(&self) -> &'static str { self.category.title() }
    pub fn parity(&self) -> Parity { self.category.parity() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleMenu {
    open: bool,
    icon: String,
    entries: Vec<ToggleEntry>,
}

impl ToggleMenu {
    /// Closed menu with each checkbox read from prefs (default checked).
    pub fn build(prefs: &dyn PreferenceStore, icon: String) -> Self {
        let entries = Category::ALL
            .into_iter()
            .map(|category| ToggleEntry { category, checked: prefs.get(category.key(), true) })
            .collect();
        Self { open: false, icon, entries }
    }

    pub fn title(&self) -> &'static str { TOGGLE_MENU_TITLE }
    pub fn icon(&self) -> &str { &self.icon }
    pub fn is_open(&self) -> bool { self.open }
    pub fn entries(&self) -> &[ToggleEntry] { &self.entries }

    /// CSS `display` of the submenu.
    pub fn display(&self) -> &'static str {
        if self.open { "block" } else { "none" }
    }

    pub fn entry(&self, category: Category) -> Option<&ToggleEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    fn entry_mut(&mut self, category: Category) -> Option<&mut ToggleEntry> {
        self.entries.iter_mut().find(|e| e.category == category)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Header button clicked.
    Header,
    /// Checkbox changed to `checked`.
    Checkbox { category: Category, checked: bool },
    /// Row clicked outside the checkbox.
    Row(Category),
}

/// Apply one user action to the augmented list. Without a panel this is a no-op.
pub fn handle(list: &mut FeaturesList, event: ToggleEvent, prefs: &mut dyn PreferenceStore) {
    let Some(panel) = list.panel.as_mut() else { return };

    let (category, checked) = match event {
        ToggleEvent::Header => {
            panel.open = !panel.open;
            return;
        }
        ToggleEvent::Checkbox { category, checked } => {
            let Some(entry) = panel.entry_mut(category) else { return };
            entry.checked = checked;
            (category, checked)
        }
        ToggleEvent::Row(category) => {
            let Some(entry) = panel.entry_mut(category) else { return };
            entry.checked = !entry.checked;
            (category, entry.checked)
        }
    };

    // Checkbox still flips when the row is gone; nothing else changes then.
    if let Some(row) = list.row_mut(category.key()) {
        row.visible = checked;
        prefs.set(category.key(), checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::IconSource;
    use crate::data::MultiplayerRecord;
    use crate::render::render;
    use crate::store::MemoryPrefs;

    fn list(prefs: &MemoryPrefs) -> FeaturesList {
        let records = Category::ALL.map(|c| MultiplayerRecord::unknown(c, "link"));
        let features: Vec<String> = Vec::new();
        render(Some(features.as_slice()), &records, prefs, &IconSource::Inline)
            .unwrap()
            .apply(&features)
    }

    #[test]
    fn header_flips_open_only() {
        let mut prefs = MemoryPrefs::new();
        let mut l = list(&prefs);
        assert_eq!(l.panel.as_ref().unwrap().display(), "none");
        handle(&mut l, ToggleEvent::Header, &mut prefs);
        assert!(l.panel.as_ref().unwrap().is_open());
        handle(&mut l, ToggleEvent::Header, &mut prefs);
        assert!(!l.panel.as_ref().unwrap().is_open());
    }

    #[test]
    fn checkbox_and_row_converge() {
        let mut prefs = MemoryPrefs::new();
        let mut l = list(&prefs);

        handle(&mut l, ToggleEvent::Checkbox { category: Category::Lan, checked: false }, &mut prefs);
        assert_eq!(l.row("lanMultiplayer").unwrap().display(), "none");
        assert!(!prefs.get("lanMultiplayer", true));

        handle(&mut l, ToggleEvent::Row(Category::Lan), &mut prefs);
        assert_eq!(l.row("lanMultiplayer").unwrap().display(), "flex");
        assert!(prefs.get("lanMultiplayer", false));
        assert!(l.panel.as_ref().unwrap().entry(Category::Lan).unwrap().checked);
    }

    #[test]
    fn missing_row_only_flips_checkbox() {
        let mut prefs = MemoryPrefs::new();
        let mut l = list(&prefs);
        l.items.clear();

        handle(&mut l, ToggleEvent::Row(Category::Online), &mut prefs);
        assert!(!l.panel.as_ref().unwrap().entry(Category::Online).unwrap().checked);
        assert!(prefs.get("onlineMultiplayer", true));
    }

    #[test]
    fn no_panel_no_change() {
        let mut prefs = MemoryPrefs::new();
        let mut l = FeaturesList::native(&[s!("Single-player")]);
        handle(&mut l, ToggleEvent::Row(Category::Local), &mut prefs);
        assert!(prefs.get("localMultiplayer", true));
    }
}
