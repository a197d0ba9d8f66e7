//! Section navigation.
//!
//! The storefront is a single page with five named sections. Navigation state
//! is just "which section is active"; the smooth-scroll itself is a visual
//! effect owned by the presentation layer.

use serde::{Deserialize, Serialize};

/// A page section. Closed set; anchors are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Catalog,
    About,
    Delivery,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Catalog,
        Section::About,
        Section::Delivery,
        Section::Contacts,
    ];

    /// The anchor id this section is addressed by.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Contacts => "contacts",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Active-section tracker.
///
/// Invariant: `active()` equals the last successfully requested section
/// (initially Home). Requests for unknown anchors are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNav {
    active: Section,
}

impl SectionNav {
    pub fn new() -> Self {
        Self {
            active: Section::Home,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Request navigation by anchor id.
    ///
    /// Returns the parsed section so the caller can perform the scroll effect;
    /// `None` means the anchor was unknown and nothing changed.
    pub fn request(&mut self, anchor: &str) -> Option<Section> {
        let section = Section::from_anchor(anchor)?;
        self.active = section;
        Some(section)
    }
}

impl Default for SectionNav {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(SectionNav::new().active(), Section::Home);
    }

    #[test]
    fn request_updates_the_active_indicator() {
        let mut nav = SectionNav::new();
        assert_eq!(nav.request("catalog"), Some(Section::Catalog));
        assert_eq!(nav.active(), Section::Catalog);
    }

    #[test]
    fn unknown_anchor_is_a_silent_no_op() {
        let mut nav = SectionNav::new();
        nav.request("catalog");

        assert_eq!(nav.request("basement"), None);
        assert_eq!(nav.active(), Section::Catalog);
    }
}
