use serde::{Deserialize, Serialize};

/// Logical regions of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    /// Out-of-range indices clamp to the last section.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::COUNT - 1)]
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Element id of the section's scroll anchor.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('#').trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|s| s.slug().eq_ignore_ascii_case(value) || s.title().eq_ignore_ascii_case(value))
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(Self::from_index)
    }

    pub fn next(self) -> Option<Self> {
        let i = self.index() + 1;
        (i < Self::COUNT).then(|| Self::from_index(i))
    }

    /// Panel shown in the glass card; the hero has its own layer so the card
    /// keeps showing the first panel while the hero is active.
    pub fn card_panel(self) -> Self {
        match self {
            Section::Hero => Section::About,
            s => s,
        }
    }

    /// Indicator dot lit for this section. None while the hero is up, so a
    /// lit dot always means that clicking it changes nothing.
    pub fn lit_dot(self) -> Option<Self> {
        match self {
            Section::Hero => None,
            s => Some(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_and_clamp() {
        for s in Section::ALL {
            assert_eq!(Section::from_index(s.index()), s);
        }
        assert_eq!(Section::from_index(99), Section::Contact);
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(Section::from_slug("skills"), Some(Section::Skills));
        assert_eq!(Section::from_slug("#Projects"), Some(Section::Projects));
        assert_eq!(Section::from_slug("home"), Some(Section::Hero));
        assert_eq!(Section::from_slug("about/"), Some(Section::About));
        assert_eq!(Section::from_slug("blog"), None);
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Section::Hero.prev(), None);
        assert_eq!(Section::About.prev(), Some(Section::Hero));
        assert_eq!(Section::Projects.next(), Some(Section::Contact));
        assert_eq!(Section::Contact.next(), None);
        assert_eq!(Section::Hero.card_panel(), Section::About);
        assert_eq!(Section::Skills.card_panel(), Section::Skills);
    }

    #[test]
    fn test_lit_dot_matches_active_section() {
        assert_eq!(Section::Hero.lit_dot(), None);
        // the hero shows the About panel, but About is not active yet
        assert_ne!(Section::Hero.lit_dot(), Some(Section::Hero.card_panel()));
        for s in Section::ALL.into_iter().skip(1) {
            assert_eq!(s.lit_dot(), Some(s));
        }
    }
}
