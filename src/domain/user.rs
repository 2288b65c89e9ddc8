use std::fmt;
use chrono::{DateTime, NaiveDate, Utc};

/// Identifier of a user record. Seeded records keep the remote id, local ones
/// get a timestamp-derived id from the store.
pub type UserId = u64;

/// Gender codes as the dashboard displays them: `P` (pria) and `W` (wanita).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "P",
            Gender::Female => "W",
        }
    }

    /// Label shown next to the radio option in the form.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Pria",
            Gender::Female => "Wanita",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "P" => Some(Gender::Male),
            "W" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Represents a user record held by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub address: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    /// Set once when the record is created, never mutated afterwards.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new user. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCreate {
    pub name: String,
    pub address: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

/// Payload for editing a user. Every editable field is replaced wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub name: String,
    pub address: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
}

impl User {
    /// Creates a fully specified User, used for records that arrive with their own id.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        address: impl Into<String>,
        gender: Gender,
        birth_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            gender,
            birth_date,
            created_at,
        }
    }
}

impl From<UserCreate> for UserUpdate {
    fn from(create: UserCreate) -> Self {
        Self {
            name: create.name,
            address: create.address,
            gender: create.gender,
            birth_date: create.birth_date,
        }
    }
}
