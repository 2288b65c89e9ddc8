//! Create/edit form: a draft of the editable fields, per-field validation and
//! touched tracking, and submission into the user store.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, instrument};
use crate::clients::UserClient;
use crate::domain::{Gender, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;

pub const NAME_REQUIRED: &str = "Nama wajib diisi";
pub const ADDRESS_REQUIRED: &str = "Alamat wajib diisi";
pub const GENDER_REQUIRED: &str = "Jenis kelamin wajib diisi";
pub const BIRTH_DATE_REQUIRED: &str = "Tanggal lahir wajib diisi";

/// Date format accepted from the birth date input.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Address,
    Gender,
    BirthDate,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Address, Field::Gender, Field::BirthDate];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nama",
            Field::Address => "Alamat",
            Field::Gender => "Jenis Kelamin",
            Field::BirthDate => "Tanggal Lahir",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            Field::Name => NAME_REQUIRED,
            Field::Address => ADDRESS_REQUIRED,
            Field::Gender => GENDER_REQUIRED,
            Field::BirthDate => BIRTH_DATE_REQUIRED,
        }
    }
}

/// The form's unsaved copy of a record's editable fields, kept as raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub address: String,
    pub gender: Option<Gender>,
    pub birth_date: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            gender: Some(Gender::Male),
            birth_date: String::new(),
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            address: user.address.clone(),
            gender: Some(user.gender),
            birth_date: user.birth_date.format(DATE_INPUT_FORMAT).to_string(),
        }
    }
}

/// Validation messages keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.values().copied().collect();
        f.write_str(&messages.join(", "))
    }
}

impl UserDraft {
    /// Check every field and produce the store payload when all pass.
    pub fn validate(&self) -> Result<UserCreate, FieldErrors> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, Field::Name.required_message());
        }
        if self.address.trim().is_empty() {
            errors.insert(Field::Address, Field::Address.required_message());
        }
        if self.gender.is_none() {
            errors.insert(Field::Gender, Field::Gender.required_message());
        }
        let birth_date = NaiveDate::parse_from_str(self.birth_date.trim(), DATE_INPUT_FORMAT).ok();
        if birth_date.is_none() {
            errors.insert(Field::BirthDate, Field::BirthDate.required_message());
        }

        match (self.gender, birth_date) {
            (Some(gender), Some(birth_date)) if errors.is_empty() => Ok(UserCreate {
                name: self.name.clone(),
                address: self.address.clone(),
                gender,
                birth_date,
            }),
            _ => Err(FieldErrors(errors)),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Form has invalid fields: {0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Store(#[from] UserError),
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Added(UserId),
    Updated(User),
}

/// Holds the draft, which fields the user has interacted with, and which
/// record (if any) is being edited.
#[derive(Debug, Default)]
pub struct FormController {
    draft: UserDraft,
    touched: BTreeSet<Field>,
    selection: Option<UserId>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Id of the record being edited, `None` when creating.
    pub fn selection(&self) -> Option<UserId> {
        self.selection
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_some()
    }

    /// Empty draft, no selection, nothing touched.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pre-fill the draft from `user` and select it for editing.
    pub fn load(&mut self, user: &User) {
        self.draft = UserDraft::from(user);
        self.touched.clear();
        self.selection = Some(user.id);
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
        self.touch(Field::Name);
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.draft.address = value.into();
        self.touch(Field::Address);
    }

    pub fn set_gender(&mut self, value: Option<Gender>) {
        self.draft.gender = value;
        self.touch(Field::Gender);
    }

    pub fn set_birth_date(&mut self, value: impl Into<String>) {
        self.draft.birth_date = value.into();
        self.touch(Field::BirthDate);
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The field's error message, shown only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        self.draft.validate().err().and_then(|errors| errors.get(field))
    }

    /// Validate and write the draft to the store.
    ///
    /// A rejected draft leaves the store, draft and selection untouched and
    /// marks every field touched. An accepted one resets the form.
    #[instrument(skip(self, users), fields(editing = ?self.selection))]
    pub async fn submit(&mut self, users: &UserClient) -> Result<SubmitOutcome, FormError> {
        Field::ALL.iter().for_each(|field| self.touch(*field));

        let payload = match self.draft.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                debug!(errors = %errors, "Draft rejected");
                return Err(FormError::Invalid(errors));
            }
        };

        let outcome = match self.selection {
            Some(id) => {
                let user = users.update_user(id, UserUpdate::from(payload)).await?;
                info!(user_id = %user.id, "User updated");
                SubmitOutcome::Updated(user)
            }
            None => {
                let id = users.create_user(payload).await?;
                info!(user_id = %id, "User added");
                SubmitOutcome::Added(id)
            }
        };

        self.reset();
        Ok(outcome)
    }
}
