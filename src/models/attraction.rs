use serde::{Deserialize, Serialize};

pub const DEFAULT_ATTRACTION_TIME: &str = "10:00 AM";

/// Which of an attraction's two ticket prices applies to the traveller.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingMode {
    #[default]
    Resident,
    Visitor,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub opening_hours: String,
    pub resident_price: u32,
    pub visitor_price: u32,
    pub cultural_notes: Option<String>,
    pub suggested_time: Option<String>,
    #[serde(default)]
    pub category: String,
}

impl Attraction {
    pub fn price_for(&self, mode: PricingMode) -> u32 {
        match mode {
            PricingMode::Resident => self.resident_price,
            PricingMode::Visitor => self.visitor_price,
        }
    }

    pub fn time(&self) -> &str {
        self.suggested_time
            .as_deref()
            .unwrap_or(DEFAULT_ATTRACTION_TIME)
    }
}
