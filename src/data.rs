// src/data.rs
//
// Records produced by the wiki extractor and consumed by the renderer.
// One record per category per page load; never persisted.

use crate::config::consts::UNKNOWN;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Local,
    Lan,
    Online,
}

impl Category {
    /// Render order.
    pub const ALL: [Category; 3] = [Category::Local, Category::Lan, Category::Online];

    /// Row header text on the wiki network table.
    pub fn play_label(self) -> &'static str {
        match self {
            Category::Local => "Local play",
            Category::Lan => "LAN play",
            Category::Online => "Online play",
        }
    }

    /// Row used when no header matches. Assumes the wiki's usual
    /// header-then-Local/LAN/Online layout.
    pub fn fallback_row(self) -> usize {
        match self {
            Category::Local => 2,
            Category::Lan => 3,
            Category::Online => 4,
        }
    }

    /// Element id of the injected row, and its preference key.
    pub fn key(self) -> &'static str {
        match self {
            Category::Local => "localMultiplayer",
            Category::Lan => "lanMultiplayer",
            Category::Online => "onlineMultiplayer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Local => "Local Multiplayer",
            Category::Lan => "LAN Multiplayer",
            Category::Online => "Online Multiplayer",
        }
    }

    /// Store rows alternate odd/even; LAN sits in the middle.
    pub fn parity(self) -> Parity {
        match self {
            Category::Lan => Parity::Even,
            Category::Local | Category::Online => Parity::Odd,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Parity of the `index`-th row in a list, counting from zero.
    pub fn alternating(index: usize) -> Parity {
        if index % 2 == 0 { Parity::Odd } else { Parity::Even }
    }

    pub fn class(self) -> &'static str {
        match self {
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }
}

/// Normalized reading of the wiki's rating icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportStatus {
    Supported,
    /// Playable with mods. Rendered as a suffix on the player count.
    Mods,
    Unsupported,
    Unknown,
}

impl SupportStatus {
    /// Maps the rating element's `title`. Anything unrecognized is `None`.
    pub fn from_title(title: &str) -> Option<SupportStatus> {
        match title {
            "Native support" => Some(SupportStatus::Supported),
            "Hackable" => Some(SupportStatus::Mods),
            "No native support" => Some(SupportStatus::Unsupported),
            "Unknown" => Some(SupportStatus::Unknown),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SupportStatus::Supported => "Supported",
            SupportStatus::Mods => " (Mods)",
            SupportStatus::Unsupported => "Unsupported",
            SupportStatus::Unknown => UNKNOWN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplayerRecord {
    pub category: Category,
    /// "Local Multiplayer", derived from the wiki row label.
    pub heading: String,
    pub display_value: String,
    pub detail_link: String,
}

impl MultiplayerRecord {
    /// Stand-in used when the wiki response could not be read.
    pub fn unknown(category: Category, detail_link: &str) -> Self {
        Self {
            category,
            heading: s!(category.title()),
            display_value: s!(UNKNOWN),
            detail_link: s!(detail_link),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.display_value == UNKNOWN
    }

    /// Text shown on the injected row.
    pub fn label(&self) -> String {
        let value = if self.display_value.is_empty() { "Supported" } else { self.display_value.as_str() };
        format!("{}: {}", self.heading, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_rows_alternate_from_odd() {
        let classes: Vec<&str> = (0..4).map(|i| Parity::alternating(i).class()).collect();
        assert_eq!(classes, vec!["odd", "even", "odd", "even"]);
    }

    #[test]
    fn support_titles_map_exactly() {
        assert_eq!(SupportStatus::from_title("Hackable"), Some(SupportStatus::Mods));
        assert_eq!(SupportStatus::from_title("native support"), None);
        assert_eq!(SupportStatus::from_title(""), None);
    }

    #[test]
    fn empty_display_reads_as_supported() {
        let mut r = MultiplayerRecord::unknown(Category::Lan, "x");
        assert_eq!(r.label(), "LAN Multiplayer: Unknown");
        r.display_value = s!();
        assert_eq!(r.label(), "LAN Multiplayer: Supported");
    }
}
