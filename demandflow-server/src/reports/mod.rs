//! Completed-demand reporting
//!
//! Elapsed time rendering, export rows and the xlsx workbook.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};
use shared::models::{CompletedDemand, DemandView};

use crate::utils::time::format_minute;

pub const SHEET_NAME: &str = "Completed Tasks";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const HEADERS: [&str; 9] = [
    "ID",
    "Type",
    "Description",
    "Location",
    "Created At",
    "Completed At",
    "Time Taken",
    "Created By",
    "Fulfilled By",
];

const HEADER_FILL: u32 = 0x2C3E50;
const MAX_COLUMN_WIDTH: usize = 50;

/// Render a duration in millis as `H:MM:SS`, prefixed with `N day(s), `
/// once it reaches a day. Sub-second precision is dropped.
pub fn format_elapsed(millis: i64) -> String {
    let total = millis.max(0) / 1000;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let clock = format!("{hours}:{minutes:02}:{seconds:02}");
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

/// Elapsed time of a completed demand, empty while it is still open
pub fn time_taken(demand: &DemandView) -> String {
    demand
        .completed_at
        .map(|done| format_elapsed(done - demand.created_at))
        .unwrap_or_default()
}

pub fn completed_entry(demand: DemandView) -> CompletedDemand {
    let time_taken = time_taken(&demand);
    CompletedDemand { demand, time_taken }
}

/// One spreadsheet row, already rendered as text (ID stays numeric)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub id: i64,
    pub demand_type: String,
    pub description: String,
    pub location: String,
    pub created_at: String,
    pub completed_at: String,
    pub time_taken: String,
    pub created_by: String,
    pub fulfilled_by: String,
}

impl ExportRow {
    fn text_cells(&self) -> [&str; 8] {
        [
            self.demand_type.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.created_at.as_str(),
            self.completed_at.as_str(),
            self.time_taken.as_str(),
            self.created_by.as_str(),
            self.fulfilled_by.as_str(),
        ]
    }
}

impl From<&DemandView> for ExportRow {
    fn from(demand: &DemandView) -> Self {
        Self {
            id: demand.id,
            demand_type: demand.demand_type.to_string(),
            description: demand.description.clone(),
            location: demand
                .room_or_table
                .clone()
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "-".into()),
            created_at: format_minute(demand.created_at),
            completed_at: demand
                .completed_at
                .map(format_minute)
                .unwrap_or_else(|| "-".into()),
            time_taken: time_taken(demand),
            created_by: demand.created_by_username.clone(),
            fulfilled_by: demand
                .fulfilled_by_username
                .clone()
                .unwrap_or_else(|| "-".into()),
        }
    }
}

/// Column widths: longest cell (header included) plus 2, capped at 50
pub fn column_widths(rows: &[ExportRow]) -> [usize; 9] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        widths[0] = widths[0].max(row.id.to_string().len());
        for (i, cell) in row.text_cells().iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(cell.chars().count());
        }
    }
    widths.map(|w| (w + 2).min(MAX_COLUMN_WIDTH))
}

/// Build the workbook and return the xlsx bytes
pub fn build_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_number(r, 0, row.id as f64)?;
        for (col, cell) in row.text_cells().iter().enumerate() {
            worksheet.write_string(r, col as u16 + 1, *cell)?;
        }
    }

    for (col, width) in column_widths(rows).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64)?;
    }

    workbook.save_to_buffer()
}

/// `completed_tasks_YYYYmmdd_HHMMSS.xlsx`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("completed_tasks_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}
