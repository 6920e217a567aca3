// src/pipeline.rs

use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::pay_period::PayPeriod;
use crate::domain::record::LogRecord;
use crate::errors::ReportResult;
use crate::loader;
use crate::reports::Views;
use crate::templates::{pages, SiteNav};
use crate::writer::{self, OutputFile};

pub const CURRENT_PERIOD_PAGE: &str = "two-week-summary.html";

const STYLE_CSS: &str = include_str!("../static/style.css");
const SCRIPT_JS: &str = include_str!("../static/script.js");

/// What a run produced, for the final log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub dropped: usize,
    pub files_written: usize,
}

/// Load -> aggregate -> render -> write, once. Nothing is written until every
/// page has rendered, so a failure leaves the previous output in place.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> ReportResult<RunSummary> {
        let bytes = loader::read_source(
            &self.config.source,
            self.config.format,
            self.config.fetch_timeout,
        )?;
        self.run_with_bytes(&bytes)
    }

    pub fn run_with_bytes(&self, bytes: &[u8]) -> ReportResult<RunSummary> {
        let records = loader::parse(bytes, self.config.format, &self.config.sheet_name)?;
        let loaded = records.len();

        let (records, dropped) = self.config.equipment.retain_known(records);
        tracing::info!(loaded, dropped, "records loaded");

        let files = self.render(&records, self.today());
        let files_written = writer::write_all(&self.config.output_dir, &files)?;
        tracing::info!(
            files_written,
            dir = %self.config.output_dir.display(),
            "report written"
        );

        Ok(RunSummary {
            records: records.len(),
            dropped,
            files_written,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.config
            .report_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Renders every output file in memory.
    pub fn render(&self, records: &[LogRecord], today: NaiveDate) -> Vec<OutputFile> {
        let views = Views::build(records, &self.config.equipment, today);
        let nav = SiteNav {
            show_form: self.config.form_action.is_some(),
        };

        let mut files = vec![
            OutputFile::new("index.html", pages::home_page(&nav, &views.equipment).into_string()),
            OutputFile::new(
                "full-data.html",
                pages::full_data_page(&nav, &views.full_log).into_string(),
            ),
            OutputFile::new(
                "user-summary.html",
                pages::user_summary_page(&nav, &views.users).into_string(),
            ),
        ];

        let periods: Vec<PayPeriod> = views.periods.iter().map(|r| r.period).collect();
        if let Some(current) = views.periods.first() {
            tracing::info!(period = %current.period.label(), "current pay period");
            files.push(OutputFile::new(
                CURRENT_PERIOD_PAGE,
                pages::two_week_page(&nav, current, &periods).into_string(),
            ));
        }
        for report in &views.periods {
            files.push(OutputFile::new(
                report.period.filename(),
                pages::two_week_page(&nav, report, &periods).into_string(),
            ));
        }

        if let Some(action) = &self.config.form_action {
            files.push(OutputFile::new(
                "submit.html",
                pages::submit_page(&nav, action, &self.config.equipment).into_string(),
            ));
        }

        files.push(OutputFile::new("style.css", STYLE_CSS));
        files.push(OutputFile::new("script.js", SCRIPT_JS));
        files
    }
}
