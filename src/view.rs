//! Text rendering of the dashboard: table, modals, banner and footer.

use chrono::{DateTime, NaiveDate, TimeZone};
use unicode_width::UnicodeWidthStr;
use crate::domain::{Gender, User};
use crate::form::{Field, FormController};

pub const PAGE_TITLE: &str = "Tabel Daftar User";
pub const LOADING_TEXT: &str = "Loading....";
pub const EMPTY_TEXT: &str = "Tidak ada data";
pub const TABLE_HEADERS: [&str; 6] = [
    "Nama",
    "Alamat",
    "Jenis Kelamin",
    "Tanggal Lahir",
    "Tanggal Input",
    "Aksi",
];

pub const BIRTH_DATE_FORMAT: &str = "%d %m %Y";
pub const CREATED_AT_FORMAT: &str = "%d %m %y %H %M %S";

pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(BIRTH_DATE_FORMAT).to_string()
}

pub fn format_created_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format(CREATED_AT_FORMAT).to_string()
}

/// Cells of one table row. The action cell carries the row number the
/// terminal commands refer to.
pub fn row_cells<Tz: TimeZone>(row: usize, user: &User, tz: &Tz) -> [String; 6]
where
    Tz::Offset: std::fmt::Display,
{
    [
        user.name.clone(),
        user.address.clone(),
        user.gender.code().to_string(),
        format_birth_date(user.birth_date),
        format_created_at(&user.created_at.with_timezone(tz)),
        format!("#{}", row),
    ]
}

/// Users in store order; a single spanning placeholder row when empty.
pub fn render_table<Tz: TimeZone>(users: &[User], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let rows: Vec<[String; 6]> = users
        .iter()
        .enumerate()
        .map(|(index, user)| row_cells(index + 1, user, tz))
        .collect();

    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let separator = format!(
        "+{}+",
        widths.iter().map(|w| "-".repeat(w + 2)).collect::<Vec<_>>().join("+")
    );
    let mut lines = vec![separator.clone(), format_row(&TABLE_HEADERS[..], &widths), separator.clone()];

    if rows.is_empty() {
        let inner = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
        lines.push(format!("| {} |", center(EMPTY_TEXT, inner)));
    } else {
        lines.extend(rows.iter().map(|row| format_row(&row[..], &widths)));
    }
    lines.push(separator);
    lines.join("\n")
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell.as_ref(), *width))
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn center(text: &str, width: usize) -> String {
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(free - left))
}

pub fn render_banner(message: Option<&str>) -> Option<String> {
    message.map(|message| format!(">> {} <<", message))
}

pub fn render_footer(year: i32, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", year, owner)
}

/// The create/edit modal. Field errors appear only for touched fields.
pub fn render_form(form: &FormController) -> String {
    let title = if form.is_editing() { "Edit User" } else { "Tambah User" };
    let draft = form.draft();
    let mut lines = vec![format!("== {} ==", title)];

    let mut field_line = |field: Field, value: String| {
        lines.push(format!("{}: {}", field.label(), value));
        if let Some(message) = form.visible_error(field) {
            lines.push(format!("  ! {}", message));
        }
    };

    field_line(Field::Name, draft.name.clone());
    field_line(Field::Address, draft.address.clone());
    let radios: Vec<String> = Gender::ALL
        .iter()
        .map(|gender| {
            let mark = if draft.gender == Some(*gender) { "x" } else { " " };
            format!("({}) {} [{}]", mark, gender.label(), gender.code())
        })
        .collect();
    field_line(Field::Gender, radios.join("  "));
    field_line(Field::BirthDate, draft.birth_date.clone());

    lines.push("[Simpan]".to_string());
    lines.join("\n")
}

/// The read-only detail modal.
pub fn render_detail<Tz: TimeZone>(user: &User, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    [
        "== Detail User ==".to_string(),
        format!("Nama: {}", user.name),
        format!("Alamat: {}", user.address),
        format!("Jenis Kelamin: {}", user.gender.code()),
        format!("Tanggal Lahir: {}", format_birth_date(user.birth_date)),
        format!("Tanggal Input: {}", format_created_at(&user.created_at.with_timezone(tz))),
        "[Tutup]".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ani() -> User {
        User::new(
            1, "Ani", "Jl. Melati", Gender::Female,
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
        )
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_birth_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()), "01 01 2000");
        // Hour, minute and second are real values, not the month repeated.
        assert_eq!(format_created_at(&ani().created_at), "09 03 24 14 05 07");
    }

    #[test]
    fn test_row_shows_record_fields() {
        let cells = row_cells(1, &ani(), &Utc);
        assert_eq!(&cells[..4], &["Ani", "Jl. Melati", "W", "01 01 2000"]);
        assert_eq!(cells[5], "#1");
    }

    #[test]
    fn test_empty_table_has_placeholder_row() {
        let table = render_table(&[], &Utc);
        assert!(table.contains(EMPTY_TEXT));
        for header in TABLE_HEADERS {
            assert!(table.contains(header));
        }
        // Borders, header, placeholder.
        assert_eq!(table.lines().count(), 5);
        let widths: Vec<usize> = table.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_table_rows_in_store_order() {
        let mut second = ani();
        second.id = 2;
        second.name = "Budi".into();
        let table = render_table(&[ani(), second], &Utc);

        let ani_at = table.find("Ani").unwrap();
        let budi_at = table.find("Budi").unwrap();
        assert!(ani_at < budi_at);
        assert!(!table.contains(EMPTY_TEXT));
    }

    #[test]
    fn test_form_titles_and_errors() {
        let mut form = FormController::new();
        let rendered = render_form(&form);
        assert!(rendered.starts_with("== Tambah User =="));
        assert!(rendered.contains("(x) Pria [P]"));
        assert!(!rendered.contains("wajib diisi"));

        form.set_address("");
        assert!(render_form(&form).contains("  ! Alamat wajib diisi"));

        form.load(&ani());
        let rendered = render_form(&form);
        assert!(rendered.starts_with("== Edit User =="));
        assert!(rendered.contains("(x) Wanita [W]"));
        assert!(rendered.contains("Tanggal Lahir: 2000-01-01"));
    }

    #[test]
    fn test_detail_and_chrome() {
        let detail = render_detail(&ani(), &Utc);
        assert!(detail.contains("Nama: Ani"));
        assert!(detail.contains("Tanggal Lahir: 01 01 2000"));
        assert_eq!(render_banner(None), None);
        assert_eq!(render_banner(Some("ok")).as_deref(), Some(">> ok <<"));
        assert_eq!(render_footer(2026, "Acme"), "© 2026 Acme. All rights reserved.");
    }
}
