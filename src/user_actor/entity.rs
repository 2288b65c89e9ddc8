use chrono::Utc;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{User, UserCreate, UserId, UserUpdate};

impl Entity for User {
    type Id = UserId;
    type CreatePayload = UserCreate;
    type Patch = UserUpdate;

    fn id(&self) -> &UserId { &self.id }

    /// Creates a new User from the submitted form values.
    ///
    /// `created_at` is stamped here and never touched again by the store.
    fn from_create(id: UserId, payload: UserCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: payload.name,
            address: payload.address,
            gender: payload.gender,
            birth_date: payload.birth_date,
            created_at: Utc::now(),
        })
    }

    fn on_create(&mut self) -> Result<(), FrameworkError> {
        ensure_filled(&self.name, &self.address)
    }

    /// Replaces every editable field. `id` and `created_at` are preserved.
    fn on_update(&mut self, update: UserUpdate) -> Result<(), FrameworkError> {
        ensure_filled(&update.name, &update.address)?;
        self.name = update.name;
        self.address = update.address;
        self.gender = update.gender;
        self.birth_date = update.birth_date;
        Ok(())
    }
}

fn ensure_filled(name: &str, address: &str) -> Result<(), FrameworkError> {
    if name.trim().is_empty() {
        return Err(FrameworkError::Rejected("name is empty".into()));
    }
    if address.trim().is_empty() {
        return Err(FrameworkError::Rejected("address is empty".into()));
    }
    Ok(())
}
