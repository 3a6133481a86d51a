//! User entity - the single record type managed by the registry

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity as stored, including the soft-delete flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl User {
    /// Materialize a freshly inserted row with the creation defaults
    pub fn from_new(id: UserId, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            created_at,
            is_active: true,
            is_deleted: false,
        }
    }

    /// Check if the row is visible to list and fetch-by-id
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.is_deleted
    }

    /// Flip the active flag and return the new value
    pub fn toggle_active(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.is_active
    }

    /// Mark the row as soft deleted. There is no way back.
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}

/// Canonical stored form of an email address: the domain is lowercased,
/// the local part is kept as typed.
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Insertion payload; storage assigns id, created_at and the flag defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Build an insertion payload with a normalized email
    pub fn new(name: impl Into<String>, email: &str) -> Self {
        Self {
            name: name.into(),
            email: normalize_email(email),
        }
    }
}

/// Partial update where `Some` means "field present, overwrite"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Build a patch; a present email is normalized like on insert
    pub fn new(name: Option<String>, email: Option<&str>) -> Self {
        Self {
            name,
            email: email.map(normalize_email),
        }
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Merge present fields into `user`, returning whether any value changed
    pub fn apply(self, user: &mut User) -> bool {
        let mut changed = false;

        if let Some(name) = self.name {
            if name != user.name {
                user.name = name;
                changed = true;
            }
        }

        if let Some(email) = self.email {
            if email != user.email {
                user.email = email;
                changed = true;
            }
        }

        changed
    }
}
