//! Line-oriented front end: reads commands, drives the dashboard and redraws
//! the page after every action.

use std::io;
use std::str::FromStr;
use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::debug;
use crate::dashboard::{Confirm, Dashboard};
use crate::domain::{Gender, User};
use crate::form::FormError;
use crate::view;

pub const HELP: &str = "\
Perintah:
  add | tambah           tambah user baru
  view <no> | lihat <no> lihat detail user pada baris <no>
  edit <no> | ubah <no>  ubah user pada baris <no>
  delete <no> | hapus <no>
  refresh                tampilkan ulang tabel
  help                   tampilkan bantuan ini
  quit                   keluar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    View(usize),
    Edit(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Perintah tidak dikenal: {0} (ketik help)")]
    Unknown(String),
    #[error("Nomor baris wajib diisi untuk {0}")]
    MissingRow(String),
    #[error("Nomor baris tidak valid: {0}")]
    InvalidRow(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Command::Refresh);
        };
        let verb = verb.to_lowercase();

        let row = |words: &mut std::str::SplitWhitespace<'_>| -> Result<usize, CommandError> {
            let raw = words.next().ok_or_else(|| CommandError::MissingRow(verb.clone()))?;
            match raw.trim_start_matches('#').parse::<usize>() {
                Ok(row) if row > 0 => Ok(row),
                _ => Err(CommandError::InvalidRow(raw.to_string())),
            }
        };

        match verb.as_str() {
            "add" | "tambah" => Ok(Command::Add),
            "view" | "lihat" => Ok(Command::View(row(&mut words)?)),
            "edit" | "ubah" => Ok(Command::Edit(row(&mut words)?)),
            "delete" | "hapus" => Ok(Command::Delete(row(&mut words)?)),
            "refresh" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.clone())),
        }
    }
}

pub struct Terminal<R, W> {
    lines: Lines<BufReader<R>>,
    out: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: BufReader::new(input).lines(),
            out,
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out
    }

    pub async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.out.write_all(label.as_bytes()).await?;
        self.out.flush().await?;
        self.lines.next_line().await
    }

    /// Prompt for a field, keeping `current` when the answer is blank.
    async fn prompt_field(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let answer = self.prompt(&format!("{} [{}]: ", label, current)).await?;
        Ok(answer.map(|answer| {
            if answer.trim().is_empty() { current.to_string() } else { answer }
        }))
    }

    pub async fn redraw(&mut self, dashboard: &Dashboard) -> io::Result<()> {
        match dashboard.render().await {
            Ok(page) => self.write(&page).await,
            Err(e) => self.write(&format!("Gagal memuat data: {}", e)).await,
        }
    }

    /// Command loop. Returns on `quit` or end of input.
    pub async fn run(&mut self, dashboard: &mut Dashboard) -> io::Result<()> {
        self.redraw(dashboard).await?;
        loop {
            let Some(line) = self.prompt("> ").await? else {
                break;
            };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    self.write(&e.to_string()).await?;
                    continue;
                }
            };
            debug!(?command, "Dispatching command");

            match command {
                Command::Quit => break,
                Command::Help => {
                    self.write(HELP).await?;
                    continue;
                }
                Command::Refresh => {}
                Command::Add => {
                    dashboard.open_create();
                    self.fill_form(dashboard).await?;
                }
                Command::Edit(row) => {
                    if let Some(user) = self.row(dashboard, row).await? {
                        match dashboard.open_edit(user.id).await {
                            Ok(()) => self.fill_form(dashboard).await?,
                            Err(e) => self.write(&e.to_string()).await?,
                        }
                    }
                }
                Command::View(row) => {
                    if let Some(user) = self.row(dashboard, row).await? {
                        match dashboard.open_view(user.id).await {
                            Ok(()) => {
                                self.redraw(dashboard).await?;
                                self.prompt("Tekan Enter untuk menutup ").await?;
                                dashboard.close_modal();
                            }
                            Err(e) => self.write(&e.to_string()).await?,
                        }
                    }
                }
                Command::Delete(row) => {
                    if let Some(user) = self.row(dashboard, row).await? {
                        if let Err(e) = dashboard.delete(user.id, self).await {
                            self.write(&format!("Gagal menghapus: {}", e)).await?;
                        }
                    }
                }
            }
            self.redraw(dashboard).await?;
        }
        Ok(())
    }

    async fn row(&mut self, dashboard: &Dashboard, row: usize) -> io::Result<Option<User>> {
        match dashboard.user_at(row).await {
            Ok(Some(user)) => Ok(Some(user)),
            Ok(None) => {
                self.write(&format!("Baris {} tidak ada", row)).await?;
                Ok(None)
            }
            Err(e) => {
                self.write(&format!("Gagal memuat data: {}", e)).await?;
                Ok(None)
            }
        }
    }

    /// Prompt every field, then submit. A rejected draft is shown with its
    /// errors and may be corrected or abandoned.
    async fn fill_form(&mut self, dashboard: &mut Dashboard) -> io::Result<()> {
        loop {
            self.write(&view::render_form(dashboard.form())).await?;
            let draft = dashboard.form().draft().clone();

            let Some(name) = self.prompt_field("Nama", &draft.name).await? else {
                dashboard.close_modal();
                return Ok(());
            };
            dashboard.form_mut().set_name(name);

            let Some(address) = self.prompt_field("Alamat", &draft.address).await? else {
                dashboard.close_modal();
                return Ok(());
            };
            dashboard.form_mut().set_address(address);

            let current_gender = draft.gender.map(|g| g.code()).unwrap_or_default();
            let Some(gender) = self.prompt_field("Jenis Kelamin (P/W)", current_gender).await? else {
                dashboard.close_modal();
                return Ok(());
            };
            dashboard.form_mut().set_gender(Gender::from_code(&gender));

            let Some(birth_date) = self.prompt_field("Tanggal Lahir (YYYY-MM-DD)", &draft.birth_date).await? else {
                dashboard.close_modal();
                return Ok(());
            };
            dashboard.form_mut().set_birth_date(birth_date);

            match dashboard.submit().await {
                Ok(_) => return Ok(()),
                Err(FormError::Invalid(errors)) => {
                    for (_, message) in errors.iter() {
                        self.write(&format!("  ! {}", message)).await?;
                    }
                    if !self.confirm("Perbaiki isian?").await {
                        dashboard.close_modal();
                        return Ok(());
                    }
                }
                Err(FormError::Store(e)) => {
                    self.write(&format!("Gagal menyimpan: {}", e)).await?;
                    dashboard.close_modal();
                    return Ok(());
                }
            }
        }
    }
}

#[async_trait]
impl<R, W> Confirm for Terminal<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&mut self, prompt: &str) -> bool {
        match self.prompt(&format!("{} (y/n) ", prompt)).await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "ya" | "yes"),
            _ => false,
        }
    }
}
