use crate::models::{activity::ActivityType, itinerary::Itinerary, trip::BudgetBreakdown};

// Save-time floors, per day of the trip
const MIN_TOTAL_PER_DAY: u32 = 1000;
const MIN_ACCOMMODATION_PER_DAY: u32 = 500;
const MIN_FOOD_PER_DAY: u32 = 300;
const MIN_TRANSPORTATION_PER_DAY: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total: u32,
    pub breakdown: BudgetBreakdown,
}

pub struct BudgetService;

impl BudgetService {
    /// Sum of every activity cost across every day
    pub fn calculate_total(itinerary: &Itinerary) -> u32 {
        itinerary
            .activities()
            .fold(0, |total: u32, activity| total.saturating_add(activity.cost))
    }

    /// Bucket activity costs by category
    pub fn calculate_breakdown(itinerary: &Itinerary) -> BudgetBreakdown {
        itinerary
            .activities()
            .fold(BudgetBreakdown::default(), |mut breakdown, activity| {
                let bucket = match activity.activity_type {
                    ActivityType::Accommodation => &mut breakdown.accommodation,
                    ActivityType::Attraction => &mut breakdown.activities,
                    ActivityType::Transport => &mut breakdown.transportation,
                    ActivityType::Food => &mut breakdown.food,
                    ActivityType::Other => &mut breakdown.other,
                };
                *bucket = bucket.saturating_add(activity.cost);
                breakdown
            })
    }

    /// Live totals shown while planning; no floors applied.
    pub fn summarize(itinerary: &Itinerary) -> BudgetSummary {
        BudgetSummary {
            total: Self::calculate_total(itinerary),
            breakdown: Self::calculate_breakdown(itinerary),
        }
    }

    /// Raise the summary to a realistic minimum for a trip of `duration_days`.
    ///
    /// Only applied when a trip is saved.
    pub fn apply_floor(summary: BudgetSummary, duration_days: u32) -> BudgetSummary {
        let days = duration_days.max(1);
        let mut breakdown = summary.breakdown;

        breakdown.accommodation = breakdown
            .accommodation
            .max(MIN_ACCOMMODATION_PER_DAY.saturating_mul(days));
        breakdown.food = breakdown.food.max(MIN_FOOD_PER_DAY.saturating_mul(days));
        breakdown.transportation = breakdown
            .transportation
            .max(MIN_TRANSPORTATION_PER_DAY.saturating_mul(days));

        // total is recomputed from the raised categories
        let total = breakdown
            .total()
            .max(MIN_TOTAL_PER_DAY.saturating_mul(days));

        BudgetSummary { total, breakdown }
    }

    pub fn summarize_for_save(itinerary: &Itinerary, duration_days: u32) -> BudgetSummary {
        Self::apply_floor(Self::summarize(itinerary), duration_days)
    }
}
