//! Entry: one displayable row for an open tab.

use super::{HostTab, TabId};

/// Asset shown when the host has no usable icon for a tab.
pub const BLANK_ICON: &str = "images/blank.png";

/// Icon values the host reports for pages without a real favicon.
const PLACEHOLDER_ICONS: [&str; 2] = [
    "chrome://theme/IDR_EXTENSIONS_FAVICON",
    "chrome://theme/IDR_EXTENSIONS_FAVICON@2x",
];

/// Reference to the icon displayed next to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    /// Fallback blank asset.
    Blank,
    /// Icon URL provided by the host.
    Url(String),
}

impl IconRef {
    /// Resolve the host's raw icon value, falling back to [`IconRef::Blank`]
    /// for missing, empty or placeholder values.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(url) if !url.is_empty() && !PLACEHOLDER_ICONS.contains(&url) => {
                Self::Url(url.to_string())
            }
            _ => Self::Blank,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Blank => BLANK_ICON,
            Self::Url(url) => url,
        }
    }
}

/// Snapshot of one tab taken when the popup opened.
///
/// Identity and display data never change after construction. Only the
/// `visible` flag is mutable, and only the filter engine writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: TabId,
    title: String,
    url: String,
    icon: IconRef,
    active: bool,
    visible: bool,
}

impl Entry {
    pub fn new(
        id: TabId,
        title: impl Into<String>,
        url: impl Into<String>,
        icon: IconRef,
        active: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            icon,
            active,
            visible: true,
        }
    }

    pub fn from_host(tab: HostTab) -> Self {
        let icon = IconRef::resolve(tab.fav_icon_url.as_deref());
        Self::new(tab.id, tab.title, tab.url, icon, tab.active)
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    /// Whether the host reported this tab as focused at snapshot time.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icon_resolves_to_blank() {
        assert_eq!(IconRef::resolve(None), IconRef::Blank);
    }

    #[test]
    fn empty_icon_resolves_to_blank() {
        assert_eq!(IconRef::resolve(Some("")), IconRef::Blank);
    }

    #[test]
    fn placeholder_icons_resolve_to_blank() {
        for placeholder in PLACEHOLDER_ICONS {
            assert_eq!(
                IconRef::resolve(Some(placeholder)),
                IconRef::Blank,
                "{placeholder} should fall back to the blank icon"
            );
        }
    }

    #[test]
    fn real_icon_is_kept() {
        let icon = IconRef::resolve(Some("https://example.com/favicon.ico"));
        assert_eq!(icon.as_str(), "https://example.com/favicon.ico");
        assert!(!icon.is_blank());
    }

    #[test]
    fn blank_icon_points_at_blank_asset() {
        assert_eq!(IconRef::Blank.as_str(), BLANK_ICON);
    }

    #[test]
    fn entry_from_host_is_visible_by_default() {
        let entry = Entry::from_host(HostTab::new(3, "Docs", "https://docs.rs").with_active(true));

        assert_eq!(entry.id(), TabId::new(3));
        assert_eq!(entry.title(), "Docs");
        assert_eq!(entry.url(), "https://docs.rs");
        assert!(entry.icon().is_blank());
        assert!(entry.is_active());
        assert!(entry.is_visible());
    }
}
