use serde::{Deserialize, Serialize};

use super::activity::Activity;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    /// 1-based, contiguous across the itinerary
    pub day: u32,
    pub date: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn new(days: Vec<ItineraryDay>) -> Self {
        Self { days }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.days.iter().flat_map(|day| day.activities.iter())
    }

    /// Index of the day holding an activity with this id, if any.
    pub fn find_day_of(&self, activity_id: &str) -> Option<usize> {
        self.days
            .iter()
            .position(|day| day.activities.iter().any(|a| a.id == activity_id))
    }
}
