use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Flight,
    Train,
    Bus,
    Car,
}

/// Last submitted search form, kept for the lifetime of a session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: Option<u32>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub transport_mode: TransportMode,
}

fn default_travelers() -> u32 {
    1
}

impl SearchParams {
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok()
    }

    /// Inclusive number of days covered by the date range, never below 1.
    pub fn duration_days(&self) -> u32 {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => ((end - start).num_days() + 1).max(1) as u32,
            _ => 1,
        }
    }
}
