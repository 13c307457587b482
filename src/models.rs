//! Frontend Models
//!
//! User records as held in the roster, and the shape the remote API sends.

use serde::Deserialize;

/// User record (flat company name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RemoteUser")]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub website: String,
}

impl User {
    pub fn from_fields(id: u32, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            company_name: fields.company_name,
            website: fields.website,
        }
    }

    /// Copy of the editable fields
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company_name: self.company_name.clone(),
            website: self.website.clone(),
        }
    }

    /// Overwrite the fields present in the patch, keep the rest
    pub fn apply(&mut self, patch: UserPatch) {
        let UserPatch { first_name, last_name, email, phone, company_name, website } = patch;
        if let Some(v) = first_name { self.first_name = v; }
        if let Some(v) = last_name { self.last_name = v; }
        if let Some(v) = email { self.email = v; }
        if let Some(v) = phone { self.phone = v; }
        if let Some(v) = company_name { self.company_name = v; }
        if let Some(v) = website { self.website = v; }
    }
}

/// Company as nested in API payloads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

/// User as returned by the users endpoint.
///
/// The API nests the company (`company: { name }`); a flat `companyName` is
/// accepted too.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: u32,
    #[serde(default, alias = "firstName", alias = "first_name")]
    pub firstname: String,
    #[serde(default, alias = "lastName", alias = "last_name")]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default, rename = "companyName", alias = "company_name")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub website: String,
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        let company_name = remote
            .company
            .map(|c| c.name)
            .or(remote.company_name)
            .unwrap_or_default();
        Self {
            id: remote.id,
            first_name: remote.firstname,
            last_name: remote.lastname,
            email: remote.email,
            phone: remote.phone,
            company_name,
            website: remote.website,
        }
    }
}

/// The six editable fields (create payload / form buffer)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub website: String,
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
}

impl From<UserFields> for UserPatch {
    fn from(fields: UserFields) -> Self {
        Self {
            first_name: Some(fields.first_name),
            last_name: Some(fields.last_name),
            email: Some(fields.email),
            phone: Some(fields.phone),
            company_name: Some(fields.company_name),
            website: Some(fields.website),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_company_shape() {
        let json = r#"{
            "id": 1,
            "firstname": "Leanne",
            "lastname": "Graham",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031",
            "birthDate": "1973-01-22",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "x" },
            "website": "hildegard.org"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "Leanne");
        assert_eq!(user.last_name, "Graham");
        assert_eq!(user.company_name, "Romaguera-Crona");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn test_flat_company_shape() {
        let json = r#"{"id": 7, "firstname": "Jane", "lastname": "Doe", "companyName": "Acme"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.company_name, "Acme");
        assert_eq!(user.email, "");
        assert_eq!(user.phone, "");
    }

    #[test]
    fn test_missing_company() {
        let json = r#"{"id": 3, "firstname": "Ervin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.company_name, "");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_apply_patch_keeps_other_fields() {
        let mut user = User {
            id: 2,
            first_name: "Ervin".to_string(),
            last_name: "Howell".to_string(),
            email: "Shanna@melissa.tv".to_string(),
            phone: "010-692-6593".to_string(),
            company_name: "Deckow-Crist".to_string(),
            website: "anastasia.net".to_string(),
        };
        let before = user.clone();
        user.apply(UserPatch { first_name: Some("X".to_string()), ..Default::default() });

        assert_eq!(user.first_name, "X");
        assert_eq!(user.last_name, before.last_name);
        assert_eq!(user.email, before.email);
        assert_eq!(user.company_name, before.company_name);
    }
}
