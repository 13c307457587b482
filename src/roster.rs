//! Roster
//!
//! In-memory user list: local create/update/delete and the search filter.

use crate::error::RosterError;
use crate::models::{User, UserFields, UserPatch};

/// Loading progress of the remote user list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Ordered user records with id allocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    users: Vec<User>,
    /// Next id handed out by `add`. Only grows, so ids freed by `delete` are
    /// never handed out again.
    next_id: u32,
    /// `next_id` ran past `u32::MAX`; `add` falls back to the lowest free id
    ids_exhausted: bool,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install freshly fetched records.
    ///
    /// Records with an id seen earlier in the batch are dropped. Records added
    /// locally while the fetch was in flight are kept after the fetched ones,
    /// under a fresh id if theirs is taken.
    pub fn load(&mut self, fetched: Vec<User>) {
        let local = std::mem::take(&mut self.users);
        for user in fetched {
            if self.contains(user.id) {
                log::warn!("[ROSTER] dropping duplicate user id {}", user.id);
                continue;
            }
            self.reserve_id(user.id);
            self.users.push(user);
        }
        for user in local {
            if self.contains(user.id) {
                if let Err(e) = self.add(user.fields()) {
                    log::warn!("[ROSTER] dropping local user {}: {}", user.id, e);
                }
            } else {
                self.reserve_id(user.id);
                self.users.push(user);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn contains(&self, id: u32) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    /// Keep the counter above an id that is now in use
    fn reserve_id(&mut self, id: u32) {
        match id.checked_add(1) {
            Some(next) => self.next_id = self.next_id.max(next),
            None => self.ids_exhausted = true,
        }
    }

    fn allocate_id(&mut self) -> Result<u32, RosterError> {
        if !self.ids_exhausted {
            let id = self.next_id.max(1);
            self.reserve_id(id);
            return Ok(id);
        }
        (1..=u32::MAX)
            .find(|&id| !self.contains(id))
            .ok_or(RosterError::IdsExhausted)
    }

    /// Append a new record under a fresh id
    pub fn add(&mut self, fields: UserFields) -> Result<User, RosterError> {
        let id = self.allocate_id()?;
        let user = User::from_fields(id, fields);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Merge `patch` into the record with `id`, keeping its position
    pub fn update(&mut self, id: u32, patch: UserPatch) -> Result<User, RosterError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RosterError::NotFound(id))?;
        user.apply(patch);
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: u32) -> Result<User, RosterError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RosterError::NotFound(id))?;
        Ok(self.users.remove(index))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn filter(&self, query: &str) -> Vec<User> {
        filter_users(&self.users, query)
    }
}

#[cfg(test)]
impl Roster {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Case-insensitive substring match on first name, last name or email
pub fn matches(user: &User, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&user.first_name, &user.last_name, &user.email]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Users matching `query`, in roster order. An empty query keeps everything.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    if query.is_empty() {
        return users.to_vec();
    }
    users.iter().filter(|u| matches(u, query)).cloned().collect()
}
