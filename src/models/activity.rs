use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Transport,
    Accommodation,
    Attraction,
    Food,
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Transport and accommodation hold their slot when a day is shuffled.
    pub fn is_fixed(&self) -> bool {
        matches!(self, ActivityType::Transport | ActivityType::Accommodation)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub time: String,
    #[serde(rename = "type", default)]
    pub activity_type: ActivityType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub cost: u32,
}
