// src/loader/table.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Header row plus data rows, independent of the file format they came from.
#[derive(Debug, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    // two-digit years first, %Y would read "25" as year 25
    "%m/%d/%y %I:%M:%S %p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Parses the timestamp spellings seen in form exports. Date-only values mean
/// midnight. Values carrying a UTC offset keep their wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| {
            TIMESTAMP_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl Cell {
    /// Trimmed text; blank text becomes `Empty`.
    pub fn text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Whole hours. `None` when the cell holds no reading; negatives clamp to 0.
    pub fn as_hours(&self) -> Option<u32> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.replace(',', "").parse::<f64>().ok()?,
            _ => return None,
        };
        if !value.is_finite() {
            return None;
        }
        Some(value.max(0.0).floor().min(u32::MAX as f64) as u32)
    }

    pub fn as_cost(&self) -> f64 {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s
                .trim_start_matches('$')
                .replace(',', "")
                .parse::<f64>()
                .unwrap_or(0.0),
            _ => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            Cell::Bool(b) => *b,
            Cell::Number(n) => *n != 0.0,
            Cell::Text(s) => matches!(
                s.to_ascii_lowercase().as_str(),
                "true" | "yes" | "y" | "1" | "x" | "checked"
            ),
            _ => false,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(dt) => Some(*dt),
            Cell::Text(s) => parse_timestamp(s),
            _ => None,
        }
    }
}
