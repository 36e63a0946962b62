// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.
//!
//! This is the routing table of the portfolio: one entry per page, no
//! parameters. The noise page is reachable only while the global toggle
//! is on.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Projects,
    Experience,
    Sources,
    Contact,
    Noise,
}

impl Screen {
    /// The always-available pages, in navigation order. `Noise` is listed
    /// separately by the navbar when the toggle allows it.
    pub const PAGES: [Screen; 5] = [
        Screen::Home,
        Screen::Projects,
        Screen::Experience,
        Screen::Sources,
        Screen::Contact,
    ];

    /// Translation key for this screen's navigation label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Home => "navbar-home",
            Screen::Projects => "navbar-projects",
            Screen::Experience => "navbar-experience",
            Screen::Sources => "navbar-sources",
            Screen::Contact => "navbar-contact",
            Screen::Noise => "navbar-noise",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_exclude_noise() {
        assert!(!Screen::PAGES.contains(&Screen::Noise));
        assert_eq!(Screen::PAGES.len(), 5);
    }

    #[test]
    fn every_screen_has_a_label_key() {
        for screen in Screen::PAGES.into_iter().chain([Screen::Noise]) {
            assert!(screen.i18n_key().starts_with("navbar-"));
        }
    }
}
