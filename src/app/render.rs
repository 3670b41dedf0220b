//! Text rendering of the directory page.
//!
//! Loading, error and table output are mutually exclusive: while the fetch is
//! pending only the loading line is shown, and a failed fetch replaces the
//! table with a single `Error: ...` alert line.

use crate::core::controller::{LoadState, PageController};
use crate::core::OutputFormat;
use crate::domain::model::{AdvocateRow, TextOrList};
use crate::utils::error::{DirectoryError, Result};

pub const TITLE: &str = "Solace Advocates";
pub const LOADING: &str = "Loading…";
pub const EMPTY_CELL: &str = "—";

pub const COLUMNS: [&str; 7] = [
    "First Name",
    "Last Name",
    "City",
    "Degree",
    "Specialties",
    "Years of Experience",
    "Phone Number",
];

pub fn alert_line(message: &str) -> String {
    format!("Error: {}", message)
}

/// 渲染整個頁面；表格格式包含標題與搜尋列，csv/json 只輸出可見的資料列
pub fn render_page(controller: &PageController, format: OutputFormat) -> Result<String> {
    let body = match controller.state() {
        LoadState::Loading => LOADING.to_string(),
        LoadState::Error(e) => alert_line(&e.user_message()),
        LoadState::Ready(_) => {
            let visible = controller.visible();
            match format {
                OutputFormat::Table => {
                    let mut out = render_table(&visible);
                    out.push_str(&format!(
                        "\nShowing {} of {} advocates",
                        visible.len(),
                        controller.filtered().len()
                    ));
                    if controller.can_load_more() {
                        out.push_str("\nType :more to load more");
                    }
                    out
                }
                OutputFormat::Csv => return render_csv(&visible),
                OutputFormat::Json => return render_json(&visible),
            }
        }
    };

    if format != OutputFormat::Table {
        return Ok(body);
    }

    Ok(format!(
        "{}\n\nSearching for: {}\n\n{}\n",
        TITLE,
        controller.query(),
        body
    ))
}

fn specialties_cell(value: Option<&TextOrList>, separator: &str) -> String {
    match value {
        Some(TextOrList::List(items)) => items.join(separator),
        Some(TextOrList::Text(s)) => s.clone(),
        None => EMPTY_CELL.to_string(),
    }
}

fn row_cells(row: &AdvocateRow, separator: &str) -> [String; 7] {
    [
        row.first_name.clone(),
        row.last_name.clone(),
        row.city.clone().unwrap_or_default(),
        row.degree.clone().unwrap_or_default(),
        specialties_cell(row.specialties.as_ref(), separator),
        row.years_of_experience
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        row.phone_number.clone().unwrap_or_default(),
    ]
}

pub fn render_table(rows: &[&AdvocateRow]) -> String {
    let cells: Vec<[String; 7]> = rows.iter().map(|row| row_cells(row, ", ")).collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: &mut dyn Iterator<Item = &str>| -> String {
        values
            .zip(widths.iter())
            .map(|(value, width)| {
                let pad = width.saturating_sub(value.chars().count());
                format!("{}{}", value, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(&mut COLUMNS.iter().copied()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        lines.push(format_line(&mut row.iter().map(String::as_str)));
    }

    lines.join("\n")
}

pub fn render_csv(rows: &[&AdvocateRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row_cells(row, "; "))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_json(rows: &[&AdvocateRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Experience;
    use crate::utils::error::LoadError;

    fn jane() -> AdvocateRow {
        AdvocateRow {
            id: "1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            city: Some("Boston".into()),
            degree: None,
            specialties: Some(TextOrList::List(vec!["CBT".into(), "EMDR".into()])),
            languages: None,
            years_of_experience: Some(Experience::Number(8.into())),
            phone_number: None,
        }
    }

    #[test]
    fn test_loading_page() {
        let controller = PageController::default();
        let page = render_page(&controller, OutputFormat::Table).unwrap();
        assert!(page.contains(LOADING));
        assert!(!page.contains("First Name"));
    }

    #[test]
    fn test_error_page_has_alert_and_no_table() {
        let mut controller = PageController::default();
        controller.apply(Err(LoadError::Network("connection refused".into())));
        let page = render_page(&controller, OutputFormat::Table).unwrap();
        assert!(page.contains("Error: connection refused"));
        assert!(!page.contains("First Name"));
        assert!(!page.contains(LOADING));
    }

    #[test]
    fn test_table_page() {
        let mut controller = PageController::default();
        controller.apply(Ok(vec![jane()]));
        controller.set_query("bos");
        let page = render_page(&controller, OutputFormat::Table).unwrap();

        assert!(page.starts_with(TITLE));
        assert!(page.contains("Searching for: bos"));
        assert!(page.contains("First Name"));
        assert!(page.contains("Jane"));
        assert!(page.contains("CBT, EMDR"));
        assert!(page.contains("Showing 1 of 1 advocates"));
        assert!(!page.contains(":more"));
    }

    #[test]
    fn test_missing_specialties_render_dash() {
        let mut row = jane();
        row.specialties = None;
        let table = render_table(&[&row]);
        assert!(table.contains(EMPTY_CELL));
    }

    #[test]
    fn test_csv_output() {
        let row = jane();
        let csv = render_csv(&[&row]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("First Name,Last Name,City,Degree,Specialties,Years of Experience,Phone Number")
        );
        assert_eq!(lines.next(), Some("Jane,Doe,Boston,,CBT; EMDR,8,"));
    }

    #[test]
    fn test_json_output() {
        let row = jane();
        let json = render_json(&[&row]).unwrap();
        let parsed: Vec<AdvocateRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![jane()]);
    }
}
