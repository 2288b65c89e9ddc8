//! The single dashboard screen: dispatches user intents to the form and the
//! store, surfaces results through the banner and renders the page.

use async_trait::async_trait;
use chrono::{Datelike, Local, Utc};
use tracing::{error, info, instrument, warn};
use crate::clients::{NotifierClient, UserClient};
use crate::domain::{User, UserId};
use crate::form::{FormController, FormError, SubmitOutcome};
use crate::seeder::{SeedSource, Seeder};
use crate::user_actor::UserError;
use crate::view;

pub const ADDED_MESSAGE: &str = "Data berhasil ditambahkan!";
pub const UPDATED_MESSAGE: &str = "Data berhasil diperbarui!";
pub const DELETED_MESSAGE: &str = "Data berhasil dihapus!";
pub const DELETE_PROMPT: &str = "Apakah Anda yakin ingin menghapus user ini?";

/// Blocking yes/no question asked before a destructive action.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, prompt: &str) -> bool;
}

/// Which modal is open on top of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Closed,
    Form,
    Detail(User),
}

pub struct Dashboard {
    users: UserClient,
    notifier: NotifierClient,
    form: FormController,
    modal: Modal,
    loading: bool,
    footer_owner: String,
}

impl Dashboard {
    pub fn new(users: UserClient, notifier: NotifierClient, footer_owner: impl Into<String>) -> Self {
        Self {
            users,
            notifier,
            form: FormController::new(),
            modal: Modal::Closed,
            loading: false,
            footer_owner: footer_owner.into(),
        }
    }

    /// Show the loading screen until the next `load` finishes.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    #[allow(dead_code)]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Seed the store once. Failures are logged and leave the store empty.
    #[instrument(skip(self, seeder))]
    pub async fn load<S: SeedSource>(&mut self, seeder: &mut Seeder<S>) -> usize {
        self.loading = true;
        let now = Utc::now();
        let today = now.with_timezone(&Local).date_naive();

        let loaded = match seeder.fetch_users(today, now).await {
            Ok(users) => match self.users.replace_users(users).await {
                Ok(count) => {
                    info!(count, "Seed users loaded");
                    count
                }
                Err(e) => {
                    error!(error = %e, "Error storing seed users");
                    0
                }
            },
            Err(e) => {
                error!(error = %e, "Error fetching users");
                0
            }
        };

        self.loading = false;
        loaded
    }

    pub async fn users(&self) -> Result<Vec<User>, UserError> {
        self.users.list_users().await
    }

    /// User shown on the given 1-based table row.
    pub async fn user_at(&self, row: usize) -> Result<Option<User>, UserError> {
        let users = self.users().await?;
        Ok(row.checked_sub(1).and_then(|index| users.into_iter().nth(index)))
    }

    /// Open the form with an empty draft and nothing selected.
    pub fn open_create(&mut self) {
        self.form.reset();
        self.modal = Modal::Form;
    }

    /// Open the form pre-filled with the user's values, selected for editing.
    pub async fn open_edit(&mut self, id: UserId) -> Result<(), UserError> {
        let user = self.users.get_user(id).await?.ok_or(UserError::NotFound(id))?;
        self.form.load(&user);
        self.modal = Modal::Form;
        Ok(())
    }

    pub async fn open_view(&mut self, id: UserId) -> Result<(), UserError> {
        let user = self.users.get_user(id).await?.ok_or(UserError::NotFound(id))?;
        self.modal = Modal::Detail(user);
        Ok(())
    }

    /// Dismiss whichever modal is open. The form keeps its draft until the
    /// next open.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Submit the form. On success the modal closes and a banner is shown;
    /// on failure the modal stays open.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let outcome = self.form.submit(&self.users).await?;
        let message = match outcome {
            SubmitOutcome::Added(_) => ADDED_MESSAGE,
            SubmitOutcome::Updated(_) => UPDATED_MESSAGE,
        };
        self.modal = Modal::Closed;
        self.notify(message).await;
        Ok(outcome)
    }

    /// Ask for confirmation, then remove the user. Returns whether it was removed.
    #[instrument(skip(self, confirm))]
    pub async fn delete<C>(&mut self, id: UserId, confirm: &mut C) -> Result<bool, UserError>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT).await {
            info!("Delete cancelled");
            return Ok(false);
        }

        self.users.delete_user(id).await?;
        if matches!(&self.modal, Modal::Detail(user) if user.id == id) {
            self.modal = Modal::Closed;
        }
        self.notify(DELETED_MESSAGE).await;
        Ok(true)
    }

    pub async fn banner(&self) -> Option<String> {
        match self.notifier.current().await {
            Ok(banner) => banner,
            Err(e) => {
                warn!(error = %e, "Banner unavailable");
                None
            }
        }
    }

    async fn notify(&self, message: &str) {
        if let Err(e) = self.notifier.show(message.to_string()).await {
            warn!(error = %e, "Failed to show notification");
        }
    }

    /// Render the whole page: banner, table (or loading screen), footer and
    /// the open modal.
    pub async fn render(&self) -> Result<String, UserError> {
        let mut sections = Vec::new();
        if let Some(banner) = view::render_banner(self.banner().await.as_deref()) {
            sections.push(banner);
        }

        if self.loading {
            sections.push(view::LOADING_TEXT.to_string());
            return Ok(sections.join("\n\n"));
        }

        let users = self.users().await?;
        sections.push(view::PAGE_TITLE.to_string());
        sections.push(view::render_table(&users, &Local));
        sections.push(view::render_footer(Local::now().year(), &self.footer_owner));

        match &self.modal {
            Modal::Closed => {}
            Modal::Form => sections.push(view::render_form(&self.form)),
            Modal::Detail(user) => sections.push(view::render_detail(user, &Local)),
        }
        Ok(sections.join("\n\n"))
    }
}
