use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Deserialize;
use crate::errors::AppError;
use crate::models::employee::Employee;

pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Department",
    "Role",
    "Date of Joining",
];

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "employees.csv",
            ExportFormat::Json => "employees.json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn render(self, employees: &[Employee]) -> Result<String, AppError> {
        match self {
            ExportFormat::Csv => to_csv(employees),
            ExportFormat::Json => to_json(employees),
        }
    }
}

fn csv_error(err: impl std::fmt::Display) -> AppError {
    log::error!("CSV export failed: {}", err);
    AppError::InternalServerError("Export failed".to_string())
}

/// Bare header line, then one line per employee with every field quoted.
/// Embedded quotes are doubled. Lines are joined by `\n` with no trailing newline.
pub fn to_csv(employees: &[Employee]) -> Result<String, AppError> {
    let mut header = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header.write_record(CSV_HEADERS).map_err(csv_error)?;
    let buf = header.into_inner().map_err(csv_error)?;

    let mut rows = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buf);
    for emp in employees {
        rows.write_record([
            emp.id.to_string(),
            emp.first_name.clone(),
            emp.last_name.clone(),
            emp.email.clone(),
            emp.department.clone(),
            emp.role.clone(),
            emp.date_of_joining.format("%Y-%m-%d").to_string(),
        ])
        .map_err(csv_error)?;
    }
    let buf = rows.into_inner().map_err(csv_error)?;

    let mut out = String::from_utf8(buf).map_err(csv_error)?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Pretty-printed with two-space indentation.
pub fn to_json(employees: &[Employee]) -> Result<String, AppError> {
    serde_json::to_string_pretty(employees).map_err(|err| {
        log::error!("JSON export failed: {}", err);
        AppError::InternalServerError("Export failed".to_string())
    })
}
