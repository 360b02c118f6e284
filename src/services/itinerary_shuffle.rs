use rand::Rng;

use crate::models::{activity::Activity, itinerary::Itinerary};
use crate::services::itinerary_composer::sort_day;

/// Shake up the flexible activities of one day.
///
/// Transport and accommodation stay pinned; everything else is permuted with
/// Fisher-Yates, then the day is re-sorted by time. Because of the final sort
/// only activities sharing a time key can visibly change places.
pub fn shuffle_day<R: Rng + ?Sized>(itinerary: &Itinerary, day_index: usize, rng: &mut R) -> Itinerary {
    let mut updated = itinerary.clone();
    let Some(day) = updated.days.get_mut(day_index) else {
        return itinerary.clone();
    };

    let (fixed, mut flexible): (Vec<Activity>, Vec<Activity>) = day
        .activities
        .drain(..)
        .partition(|a| a.activity_type.is_fixed());

    for i in (1..flexible.len()).rev() {
        let j = rng.gen_range(0..=i);
        flexible.swap(i, j);
    }

    day.activities = fixed;
    day.activities.extend(flexible);
    sort_day(day);

    updated
}
