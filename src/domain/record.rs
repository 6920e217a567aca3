// src/domain/record.rs

use chrono::NaiveDateTime;

/// One daily equipment check submitted by an operator.
///
/// Text fields and maintenance are filled with empty/zero defaults by the
/// loader when the source cell is blank. `hours` stays `None` so a missing
/// meter reading is never mistaken for a reading of 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub name: String,
    pub equipment_id: String,
    pub completed_at: NaiveDateTime,
    pub builder: String,
    pub site: String,
    pub hours: Option<u32>,
    pub oil_level: String,
    pub gas_level: String,
    pub general_issues: String,
    /// "Continue to Maintenance or Complete"
    pub next_step: String,
    pub maintenance: Maintenance,
}

impl LogRecord {
    /// Hours as displayed, with a missing reading shown as 0.
    pub fn hours_or_zero(&self) -> u32 {
        self.hours.unwrap_or(0)
    }

    pub fn has_issues(&self) -> bool {
        !self.general_issues.trim().is_empty()
    }
}

/// Maintenance performed during a submission, collapsed into one description
/// and one total cost regardless of which source layout it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Maintenance {
    pub work: String,
    pub cost: f64,
}

impl Maintenance {
    pub fn has_work(&self) -> bool {
        !self.work.trim().is_empty()
    }

    /// Case-insensitive substring match against the work description.
    pub fn mentions(&self, needle: &str) -> bool {
        self.work.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Checkbox services of the structured maintenance layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    OilChange,
    AnnualInspection,
    Ndt,
    RadiatorRepair,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::OilChange,
        ServiceKind::AnnualInspection,
        ServiceKind::Ndt,
        ServiceKind::RadiatorRepair,
    ];

    /// Column header of the flag, also the label written into the work description.
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::OilChange => "Oil Change",
            ServiceKind::AnnualInspection => "Annual Inspection",
            ServiceKind::Ndt => "NDT",
            ServiceKind::RadiatorRepair => "Radiator Repair",
        }
    }

    pub fn cost_column(self) -> &'static str {
        match self {
            ServiceKind::OilChange => "Oil Change Cost",
            ServiceKind::AnnualInspection => "Annual Inspection Cost",
            ServiceKind::Ndt => "NDT Cost",
            ServiceKind::RadiatorRepair => "Radiator Repair Cost",
        }
    }

    /// Form field name for the submission page.
    pub fn field_name(self) -> &'static str {
        match self {
            ServiceKind::OilChange => "oil_change",
            ServiceKind::AnnualInspection => "annual_inspection",
            ServiceKind::Ndt => "ndt",
            ServiceKind::RadiatorRepair => "radiator_repair",
        }
    }
}
