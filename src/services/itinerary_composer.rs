//! Splices selected flights, hotels and attractions into a day-by-day itinerary.
//!
//! Every function here takes the caller's itinerary by reference and returns a
//! new one; the input is never mutated. The number of days never changes.

use log::warn;

use crate::models::{
    activity::Activity,
    attraction::{Attraction, PricingMode},
    flight::Flight,
    hotel::Hotel,
    itinerary::{Itinerary, ItineraryDay},
    selection::SelectionState,
};
use crate::services::{activity_factory, time_key};

const FLIGHT_PREFIX: &str = "flight-";
const HOTEL_PREFIX: &str = "hotel-";

/// Place `activity` exactly once in day `day_index`, then re-sort that day by time.
///
/// An existing activity with the same id is replaced in place. New transport and
/// accommodation entries go to the head of the list, everything else is appended.
pub fn merge_activity(itinerary: &Itinerary, activity: Activity, day_index: usize) -> Itinerary {
    let mut updated = itinerary.clone();

    if day_index >= updated.day_count() {
        warn!(
            "Cannot place activity {} on day index {}: itinerary has {} day(s)",
            activity.id,
            day_index,
            updated.day_count()
        );
        return updated;
    }
    let day = &mut updated.days[day_index];

    if !time_key::is_display_time(&activity.time) {
        warn!(
            "Activity {} has unexpected time {:?}; its position in day {} is not guaranteed",
            activity.id, activity.time, day.day
        );
    }

    let existing = day.activities.iter().position(|a| a.id == activity.id);
    match existing {
        Some(existing) => day.activities[existing] = activity,
        None if activity.activity_type.is_fixed() => day.activities.insert(0, activity),
        None => day.activities.push(activity),
    }

    sort_day(day);
    updated
}

/// Drop the activity with this id from whichever day holds it. Order is left untouched.
pub fn remove_activity(itinerary: &Itinerary, activity_id: &str) -> Itinerary {
    remove_where(itinerary, |a| a.id == activity_id)
}

/// Make `flight` the only flight in the itinerary, on the first day.
pub fn apply_flight(itinerary: &Itinerary, flight: &Flight) -> Itinerary {
    let cleared = remove_where(itinerary, |a| a.id.starts_with(FLIGHT_PREFIX));
    merge_activity(&cleared, activity_factory::from_flight(flight), 0)
}

/// Make `hotel` the only hotel in the itinerary, on the first day.
pub fn apply_hotel(itinerary: &Itinerary, hotel: &Hotel) -> Itinerary {
    let cleared = remove_where(itinerary, |a| a.id.starts_with(HOTEL_PREFIX));
    merge_activity(&cleared, activity_factory::from_hotel(hotel), 0)
}

/// Spread attractions round-robin: the i-th selection goes to day `i mod day_count`.
pub fn apply_attractions(
    itinerary: &Itinerary,
    attractions: &[Attraction],
    mode: PricingMode,
) -> Itinerary {
    let day_count = itinerary.day_count();
    if day_count == 0 {
        return itinerary.clone();
    }

    attractions
        .iter()
        .enumerate()
        .fold(itinerary.clone(), |current, (index, attraction)| {
            let activity = activity_factory::from_attraction(attraction, mode);
            let target = index % day_count;

            // an attraction moved to another day must not stay behind on the old one
            let current = match current.find_day_of(&activity.id) {
                Some(day) if day != target => remove_activity(&current, &activity.id),
                _ => current,
            };
            merge_activity(&current, activity, target)
        })
}

/// Compose every current selection over `base`.
pub fn apply_selections(
    base: &Itinerary,
    selection: &SelectionState,
    mode: PricingMode,
) -> Itinerary {
    let mut itinerary = base.clone();

    if let Some(flight) = &selection.selected_flight {
        itinerary = apply_flight(&itinerary, flight);
    }
    if let Some(hotel) = &selection.selected_hotel {
        itinerary = apply_hotel(&itinerary, hotel);
    }

    apply_attractions(&itinerary, &selection.selected_attractions, mode)
}

/// Stable ascending sort of one day's activities by time key.
pub fn sort_day(day: &mut ItineraryDay) {
    day.activities
        .sort_by_key(|activity| time_key::sort_key(&activity.time));
}

fn remove_where<F>(itinerary: &Itinerary, predicate: F) -> Itinerary
where
    F: Fn(&Activity) -> bool,
{
    Itinerary::new(
        itinerary
            .days
            .iter()
            .map(|day| ItineraryDay {
                day: day.day,
                date: day.date.clone(),
                activities: day
                    .activities
                    .iter()
                    .filter(|a| !predicate(a))
                    .cloned()
                    .collect(),
            })
            .collect(),
    )
}
