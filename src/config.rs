// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use crate::domain::equipment::AllowList;
use crate::errors::{ReportError, ReportResult};
use crate::loader::SourceFormat;

const DEFAULT_SHEET: &str = "Sheet1";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum SourceLocation {
    Http(Url),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceLocation,
    pub format: SourceFormat,
    pub sheet_name: String,
    pub fetch_timeout: Duration,
    pub output_dir: PathBuf,
    pub equipment: AllowList,
    /// Pins "today" for picking the current pay period.
    pub report_date: Option<NaiveDate>,
    /// Where the data-entry form posts. No form page without it.
    pub form_action: Option<String>,
}

impl Config {
    pub fn from_env() -> ReportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ReportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (raw_source, format) = match (get("CSV_URL"), get("EXCEL_URL")) {
            (Some(csv), _) => (csv, SourceFormat::Csv),
            (None, Some(excel)) => (excel, SourceFormat::Excel),
            (None, None) => {
                return Err(ReportError::Config(
                    "set CSV_URL or EXCEL_URL to the maintenance log export".into(),
                ))
            }
        };

        let fetch_timeout = match get("FETCH_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.parse().map_err(|_| {
                ReportError::Config(format!("FETCH_TIMEOUT_SECS is not a number: {v}"))
            })?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let report_date = get("REPORT_DATE")
            .map(|v| {
                NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| {
                    ReportError::Config(format!("REPORT_DATE must be YYYY-MM-DD: {v}"))
                })
            })
            .transpose()?;

        let equipment = match get("EQUIPMENT_IDS") {
            Some(list) => AllowList::new(list.split(',')),
            None => AllowList::default(),
        };

        Ok(Self {
            source: parse_location(&raw_source)?,
            format,
            sheet_name: get("SHEET_NAME").unwrap_or_else(|| DEFAULT_SHEET.to_string()),
            fetch_timeout,
            output_dir: get("OUTPUT_DIR").map(PathBuf::from).unwrap_or_else(|| ".".into()),
            equipment,
            report_date,
            form_action: get("FORM_ACTION_URL"),
        })
    }
}

/// `http(s)://` is fetched, `file://` and bare paths are read from disk.
fn parse_location(raw: &str) -> ReportResult<SourceLocation> {
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        let url = Url::parse(raw)
            .map_err(|e| ReportError::Config(format!("invalid source URL '{raw}': {e}")))?;
        return Ok(SourceLocation::Http(url));
    }

    if lower.starts_with("file://") {
        let url = Url::parse(raw)
            .map_err(|e| ReportError::Config(format!("invalid source URL '{raw}': {e}")))?;
        let path = url
            .to_file_path()
            .map_err(|_| ReportError::Config(format!("not a local file URL: {raw}")))?;
        return Ok(SourceLocation::File(path));
    }

    Ok(SourceLocation::File(PathBuf::from(raw)))
}
