//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Session and
//! roster live here and are handed down through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FetchError;
use crate::form::EditForm;
use crate::models::User;
use crate::notice::{Notice, Outcome};
use crate::roster::{LoadState, Roster};
use crate::session::{self, Session};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, `None` when logged out
    pub session: Option<Session>,
    /// Users of the current session
    pub roster: Roster,
    pub load_state: LoadState,
    /// Live search query of the roster view
    pub search: String,
    /// Add/Edit dialog buffer
    pub form: EditForm,
    pub notice: Option<Notice>,
    notice_seq: u32,
    /// Bumped on logout; a fetch started under an older epoch is dropped
    epoch: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Clear the session and everything loaded under it
    pub fn logout(&mut self) {
        session::logout(&mut self.session);
        self.roster.clear();
        self.load_state = LoadState::Idle;
        self.search.clear();
        self.form = EditForm::default();
        self.notice = None;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Mark the roster as loading. Returns the epoch to hand back to
    /// `finish_load`, or `None` if a load already ran this session.
    pub fn begin_load(&mut self) -> Option<u32> {
        if self.session.is_none() || self.load_state != LoadState::Idle {
            return None;
        }
        self.load_state = LoadState::Loading;
        Some(self.epoch)
    }

    /// Apply a fetch result. Stale results (session ended meanwhile) are dropped.
    /// Users added while the fetch was running stay in the roster.
    pub fn finish_load(&mut self, epoch: u32, result: Result<Vec<User>, FetchError>) {
        if epoch != self.epoch || self.load_state != LoadState::Loading {
            log::debug!("[STORE] dropping stale roster load (epoch {})", epoch);
            return;
        }
        match result {
            Ok(users) => {
                self.roster.load(users);
                log::info!("[STORE] loaded {} users", self.roster.len());
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                log::warn!("[STORE] error fetching users: {}", e);
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Save the dialog into the roster
    pub fn submit_form(&mut self) -> Option<Notice> {
        let outcome = self.form.submit(&mut self.roster)?;
        Some(self.push_notice(outcome))
    }

    pub fn delete_user(&mut self, id: u32) -> Option<Notice> {
        match self.roster.delete(id) {
            Ok(user) => Some(self.push_notice(Outcome::Deleted(user.id))),
            Err(e) => {
                log::debug!("[STORE] delete skipped: {}", e);
                None
            }
        }
    }

    fn push_notice(&mut self, outcome: Outcome) -> Notice {
        log::info!("[STORE] {} (id {})", outcome.message(), outcome.user_id());
        self.notice_seq = self.notice_seq.wrapping_add(1);
        let notice = Notice { seq: self.notice_seq, message: outcome.message() };
        self.notice = Some(notice.clone());
        notice
    }

    /// Remove the notice if it is still the one identified by `seq`
    pub fn dismiss_notice(&mut self, seq: u32) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_login(store: &AppStore, session: Session) {
    store.update(|state| state.login(session));
}

pub fn store_logout(store: &AppStore) {
    store.update(|state| state.logout());
}

pub fn store_submit_form(store: &AppStore) -> Option<Notice> {
    store.try_update(|state| state.submit_form()).flatten()
}

pub fn store_delete_user(store: &AppStore, user_id: u32) -> Option<Notice> {
    store.try_update(|state| state.delete_user(user_id)).flatten()
}

pub fn store_dismiss_notice(store: &AppStore, seq: u32) {
    store.update(|state| state.dismiss_notice(seq));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn make_user(id: u32, first: &str) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: "Graham".to_string(),
            email: format!("{}@april.biz", first.to_lowercase()),
            phone: String::new(),
            company_name: String::new(),
            website: String::new(),
        }
    }

    fn logged_in() -> AppState {
        let mut state = AppState::new();
        state.login(Session { username: "leanne".to_string() });
        state
    }

    #[test]
    fn test_load_once_per_session() {
        let mut state = logged_in();
        let epoch = state.begin_load().unwrap();
        assert_eq!(state.load_state, LoadState::Loading);
        assert_eq!(state.begin_load(), None);

        state.finish_load(epoch, Ok(vec![make_user(1, "Leanne")]));
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.roster.len(), 1);
        assert_eq!(state.begin_load(), None);
    }

    #[test]
    fn test_no_load_without_session() {
        let mut state = AppState::new();
        assert_eq!(state.begin_load(), None);
        assert_eq!(state.load_state, LoadState::Idle);
    }

    #[test]
    fn test_failed_load_leaves_roster_empty() {
        let mut state = logged_in();
        let epoch = state.begin_load().unwrap();
        state.finish_load(epoch, Err(FetchError::Status(500)));

        assert_eq!(state.load_state, LoadState::Failed);
        assert!(state.roster.is_empty());
        assert_eq!(state.notice, None);
        // no retry
        assert_eq!(state.begin_load(), None);
    }

    #[test]
    fn test_load_finishing_after_logout_is_dropped() {
        let mut state = logged_in();
        let epoch = state.begin_load().unwrap();
        state.logout();
        state.login(Session { username: "ervin".to_string() });

        state.finish_load(epoch, Ok(vec![make_user(1, "Leanne")]));
        assert!(state.roster.is_empty());
        assert_eq!(state.load_state, LoadState::Idle);
        assert!(state.begin_load().is_some());
    }

    #[test]
    fn test_logout_discards_session_state() {
        let mut state = logged_in();
        let epoch = state.begin_load().unwrap();
        state.finish_load(epoch, Ok(vec![make_user(1, "Leanne")]));
        state.search = "lea".to_string();
        state.form.open_for_create();

        state.logout();
        assert_eq!(state.session, None);
        assert!(state.roster.is_empty());
        assert_eq!(state.search, "");
        assert!(!state.form.open);
        assert_eq!(state.load_state, LoadState::Idle);
    }

    #[test]
    fn test_submit_and_delete_push_notices() {
        let mut state = logged_in();
        let epoch = state.begin_load().unwrap();
        state.finish_load(epoch, Ok(vec![make_user(1, "Leanne")]));

        state.form.open_for_create();
        state.form.set(FormField::FirstName, "Jane".to_string());
        let added = state.submit_form().unwrap();
        assert_eq!(added.message, "User added successfully!");
        assert_eq!(state.roster.len(), 2);

        let deleted = state.delete_user(1).unwrap();
        assert_eq!(deleted.message, "User deleted successfully!");
        assert!(deleted.seq > added.seq);
        assert_eq!(state.roster.len(), 1);

        assert_eq!(state.delete_user(1), None);
        assert_eq!(state.notice, Some(deleted));
    }

    #[test]
    fn test_dismiss_only_matching_notice() {
        let mut state = logged_in();
        state.form.open_for_create();
        let first = state.submit_form().unwrap();
        state.form.open_for_create();
        let second = state.submit_form().unwrap();

        state.dismiss_notice(first.seq);
        assert_eq!(state.notice, Some(second.clone()));
        state.dismiss_notice(second.seq);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_user_added_while_loading_survives_load() {
        let mut state = logged_in();
        let epoch = state.begin_load().unwrap();

        state.form.open_for_create();
        state.form.set(FormField::FirstName, "Jane".to_string());
        let notice = state.submit_form().unwrap();
        assert_eq!(notice.message, "User added successfully!");
        assert_eq!(state.roster.len(), 1);

        state.finish_load(epoch, Ok(vec![make_user(1, "Leanne"), make_user(2, "Ervin")]));
        assert_eq!(state.load_state, LoadState::Ready);
        assert_eq!(state.roster.len(), 3);
        let jane = state.roster.filter("jane");
        assert_eq!(jane.len(), 1);
        assert_eq!(jane[0].id, 3);
    }
}
