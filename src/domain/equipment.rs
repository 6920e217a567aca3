// src/domain/equipment.rs

use crate::domain::record::LogRecord;

/// Boom lifts tracked when no `EQUIPMENT_IDS` override is configured.
pub const DEFAULT_EQUIPMENT_IDS: &[&str] = &[
    "Boom Lift 1",
    "Boom Lift 2",
    "Boom Lift 3",
    "Boom Lift 4",
    "Boom Lift 5",
    "Boom Lift 6",
    "Boom Lift 7",
    "Boom Lift 8",
];

/// The fixed set of equipment identifiers reported on, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowList {
    ids: Vec<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_EQUIPMENT_IDS.iter().map(|s| s.to_string()))
    }
}

impl AllowList {
    /// Blank entries and repeats are ignored; first occurrence keeps its position.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into().trim().to_string();
            if !id.is_empty() && !out.contains(&id) {
                out.push(id);
            }
        }
        Self { ids: out }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Exact membership. No prefix, case or fuzzy matching.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Splits records into the ones on the list and a count of those dropped.
    pub fn retain_known(&self, records: Vec<LogRecord>) -> (Vec<LogRecord>, usize) {
        let total = records.len();
        let kept: Vec<LogRecord> = records
            .into_iter()
            .filter(|r| {
                let known = self.contains(&r.equipment_id);
                if !known {
                    tracing::debug!(equipment_id = %r.equipment_id, "dropping unknown equipment");
                }
                known
            })
            .collect();
        let dropped = total - kept.len();
        (kept, dropped)
    }
}
