// src/loader/fetch.rs

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::SourceLocation;
use crate::errors::{ReportError, ReportResult};
use crate::loader::SourceFormat;

const USER_AGENT: &str = concat!("boomlift_report/", env!("CARGO_PKG_VERSION"));

/// ZIP local file header; every .xlsx starts with it.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new(timeout: Duration) -> ReportResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// One GET, no retries. Any failure aborts the run.
    pub fn fetch(&self, url: &Url) -> ReportResult<Vec<u8>> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ReportError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ReportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp
            .bytes()
            .map_err(|e| ReportError::Network(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// Reads the raw export from wherever it lives. Format checks happen in `loader::parse`.
pub fn read_source(
    location: &SourceLocation,
    format: SourceFormat,
    timeout: Duration,
) -> ReportResult<Vec<u8>> {
    let bytes = match location {
        SourceLocation::Http(url) => {
            tracing::info!(%url, "fetching source");
            SourceClient::new(timeout)?.fetch(url)?
        }
        SourceLocation::File(path) => read_file(path)?,
    };

    tracing::info!(bytes = bytes.len(), ?format, "source loaded");
    Ok(bytes)
}

fn read_file(path: &Path) -> ReportResult<Vec<u8>> {
    tracing::info!(path = %path.display(), "reading source file");
    Ok(std::fs::read(path)?)
}

pub fn check_signature(bytes: &[u8], format: SourceFormat) -> ReportResult<()> {
    match format {
        SourceFormat::Excel if !bytes.starts_with(ZIP_MAGIC) => Err(ReportError::Signature(
            "expected an Excel workbook but the content has no ZIP header".into(),
        )),
        SourceFormat::Csv if bytes.starts_with(ZIP_MAGIC) => Err(ReportError::Signature(
            "expected CSV but received a ZIP/Excel file".into(),
        )),
        _ => Ok(()),
    }
}
