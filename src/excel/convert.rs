use calamine::{Data, ExcelDateTime};
use chrono::NaiveTime;

use crate::excel::CellValue;

const SECONDS_PER_DAY: f64 = 86_400.0;

// 9999-12-31 in the 1900 date system
const MAX_DATE_SERIAL: f64 = 2_958_465.0;

// Decode one calamine cell into a resolved value
pub fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => excel_datetime_to_value(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn excel_datetime_to_value(dt: &ExcelDateTime) -> CellValue {
    let rendered = if dt.is_duration() {
        excel_duration_to_string(dt.as_f64())
    } else {
        excel_date_to_iso_string(dt)
    };

    match rendered {
        Some(text) => CellValue::Text(text),
        None => CellValue::Number(dt.as_f64()),
    }
}

/// Render an Excel date as ISO 8601, honouring the workbook's 1900/1904 date system.
///
/// Whole days render as `YYYY-MM-DD`, anything with a time part as `YYYY-MM-DDTHH:MM:SS`.
/// Serials outside Excel's date range (before the epoch, after 9999-12-31) give `None`.
pub fn excel_date_to_iso_string(dt: &ExcelDateTime) -> Option<String> {
    if !(0.0..=MAX_DATE_SERIAL).contains(&dt.as_f64()) {
        return None;
    }

    let datetime = dt.as_datetime()?;

    if datetime.time() == NaiveTime::MIN {
        Some(datetime.date().format("%Y-%m-%d").to_string())
    } else {
        Some(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

// Durations keep counting hours past 24, e.g. 1.5 days -> 36:00:00
fn excel_duration_to_string(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }

    let total = (serial.abs() * SECONDS_PER_DAY).round() as u64;
    let sign = if serial < 0.0 && total > 0 { "-" } else { "" };

    Some(format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    ))
}
