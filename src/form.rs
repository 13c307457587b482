//! Edit/Create Form
//!
//! Transient buffer behind the Add/Edit user dialog.

use crate::models::{User, UserFields};
use crate::notice::Outcome;
use crate::roster::Roster;

/// Editable field of the user dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    CompanyName,
    Website,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::CompanyName,
        FormField::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::CompanyName => "Company Name",
            FormField::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub fields: UserFields,
    /// Record being edited; `None` creates a new one
    pub target: Option<u32>,
    pub open: bool,
}

impl EditForm {
    pub fn open_for_create(&mut self) {
        self.fields = UserFields::default();
        self.target = None;
        self.open = true;
    }

    pub fn open_for_edit(&mut self, user: &User) {
        self.fields = user.fields();
        self.target = Some(user.id);
        self.open = true;
    }

    /// Close without saving
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn title(&self) -> &'static str {
        if self.target.is_some() { "Edit User" } else { "Add User" }
    }

    pub fn value(&self, field: FormField) -> &str {
        let f = &self.fields;
        match field {
            FormField::FirstName => &f.first_name,
            FormField::LastName => &f.last_name,
            FormField::Email => &f.email,
            FormField::Phone => &f.phone,
            FormField::CompanyName => &f.company_name,
            FormField::Website => &f.website,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let f = &mut self.fields;
        match field {
            FormField::FirstName => f.first_name = value,
            FormField::LastName => f.last_name = value,
            FormField::Email => f.email = value,
            FormField::Phone => f.phone = value,
            FormField::CompanyName => f.company_name = value,
            FormField::Website => f.website = value,
        }
    }

    /// Add or update depending on the target, then reset and close.
    ///
    /// Returns `None` when the edit target vanished from the roster meanwhile,
    /// or no id is left for a new record.
    pub fn submit(&mut self, roster: &mut Roster) -> Option<Outcome> {
        let fields = std::mem::take(&mut self.fields);
        let outcome = match self.target.take() {
            Some(id) => match roster.update(id, fields.into()) {
                Ok(user) => Some(Outcome::Updated(user.id)),
                Err(e) => {
                    log::debug!("[FORM] update skipped: {}", e);
                    None
                }
            },
            None => match roster.add(fields) {
                Ok(user) => Some(Outcome::Added(user.id)),
                Err(e) => {
                    log::warn!("[FORM] add failed: {}", e);
                    None
                }
            },
        };
        self.open = false;
        outcome
    }
}
