//! Cell normalization
//!
//! Every field of every extractor goes through these primitives. Absent and
//! blank cells are indistinguishable once normalized.

use calamine::{Data, ExcelDateTime};
use traceatlas_domain::LIST_DELIMITER;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical text of a cell: absent, blank and error cells become `""`,
/// everything else is stringified and trimmed
pub fn cell_text(cell: Option<&Data>) -> String {
    let Some(cell) = cell else {
        return String::new();
    };

    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => format_datetime(dt),
    }
}

/// Render a date-typed cell as `YYYY-MM-DD HH:MM:SS`
///
/// Durations and serials outside the calendar range keep their numeric form.
fn format_datetime(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(datetime) if dt.is_datetime() => datetime.format(DATETIME_FORMAT).to_string(),
        _ => format_number(dt.as_f64()),
    }
}

/// Split normalized text on the list delimiter, dropping empty segments
pub fn split_list(text: &str) -> Vec<String> {
    text.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a cell and split it into a list
pub fn cell_list(cell: Option<&Data>) -> Vec<String> {
    split_list(&cell_text(cell))
}

/// Integer value of a score cell; anything unusable is 0
///
/// Numbers truncate toward zero. Text is parsed as a number after trimming.
pub fn cell_score(cell: Option<&Data>) -> i64 {
    let value = match cell {
        Some(Data::Int(i)) => return *i,
        Some(Data::Float(f)) => *f,
        Some(Data::Bool(b)) => return i64::from(*b),
        Some(Data::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return 0,
        },
        _ => return 0,
    };

    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

/// Render a number without a trailing `.0` when it is integral
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
