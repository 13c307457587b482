//! Pages
//!
//! Reachable views and how the session gates them.

use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Login,
    Home,
    Roster,
    Settings,
}

impl Page {
    pub fn requires_session(self) -> bool {
        !matches!(self, Page::Login)
    }
}

/// Page actually shown for a navigation request.
///
/// Logged out, everything falls back to Login; logged in, Login redirects
/// to Home.
pub fn resolve(requested: Page, session: Option<&Session>) -> Page {
    match (requested, session) {
        (Page::Login, Some(_)) => Page::Home,
        (page, None) if page.requires_session() => Page::Login,
        (page, _) => page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gating_table() {
        let session = Session { username: "leanne".to_string() };
        let s = Some(&session);

        assert_eq!(resolve(Page::Login, None), Page::Login);
        assert_eq!(resolve(Page::Login, s), Page::Home);
        for page in [Page::Home, Page::Roster, Page::Settings] {
            assert_eq!(resolve(page, s), page);
            assert_eq!(resolve(page, None), Page::Login);
        }
    }
}
