use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::itinerary::Itinerary;

/// Per-category spend in whole rupees.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetBreakdown {
    pub accommodation: u32,
    pub activities: u32,
    pub transportation: u32,
    pub food: u32,
    pub other: u32,
}

impl BudgetBreakdown {
    /// Saturates at `u32::MAX` rather than wrapping.
    pub fn total(&self) -> u32 {
        [self.activities, self.transportation, self.food, self.other]
            .into_iter()
            .fold(self.accommodation, u32::saturating_add)
    }
}

/// Trip fields supplied by the caller when saving; the store assigns id and timestamp.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: u32,
    pub total_budget: u32,
    pub budget_breakdown: BudgetBreakdown,
    pub itinerary: Itinerary,
    pub notes: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrip {
    pub id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: u32,
    pub total_budget: u32,
    pub budget_breakdown: BudgetBreakdown,
    pub itinerary: Itinerary,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub cover_image: Option<String>,
}

impl SavedTrip {
    pub fn from_new(id: String, created_at: DateTime<Utc>, trip: NewTrip) -> Self {
        Self {
            id,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            duration: trip.duration,
            total_budget: trip.total_budget,
            budget_breakdown: trip.budget_breakdown,
            itinerary: trip.itinerary,
            notes: trip.notes,
            created_at,
            cover_image: trip.cover_image,
        }
    }

    /// Merges every supplied field of the update; id and creation time never change.
    pub fn apply_update(&mut self, update: TripUpdate) {
        if let Some(destination) = update.destination {
            self.destination = destination;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(total_budget) = update.total_budget {
            self.total_budget = total_budget;
        }
        if let Some(budget_breakdown) = update.budget_breakdown {
            self.budget_breakdown = budget_breakdown;
        }
        if let Some(itinerary) = update.itinerary {
            self.itinerary = itinerary;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        if let Some(cover_image) = update.cover_image {
            self.cover_image = Some(cover_image);
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<u32>,
    pub total_budget: Option<u32>,
    pub budget_breakdown: Option<BudgetBreakdown>,
    pub itinerary: Option<Itinerary>,
    pub notes: Option<String>,
    pub cover_image: Option<String>,
}
