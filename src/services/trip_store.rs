use std::sync::Arc;

use log::{error, warn};
use rand::{distributions::Alphanumeric, Rng};

use crate::models::trip::{NewTrip, SavedTrip, TripUpdate};
use crate::services::{
    cache::Clock,
    storage::{KeyValueStorage, StorageError},
};

pub const SAVED_TRIPS_KEY: &str = "savedTrips";
const ID_SUFFIX_LEN: usize = 9;

/// Saved trip snapshots, kept as one JSON array under a single storage key.
pub struct TripStore<S: KeyValueStorage, C: Clock> {
    storage: Arc<S>,
    clock: Arc<C>,
}

impl<S: KeyValueStorage, C: Clock> TripStore<S, C> {
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self { storage, clock }
    }

    /// Every saved trip, in stored order. Unreadable storage reads as empty.
    pub fn list(&self) -> Vec<SavedTrip> {
        match self.load() {
            Ok(trips) => trips,
            Err(e) => {
                warn!("Saved trips unavailable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<SavedTrip> {
        self.list().into_iter().find(|trip| trip.id == id)
    }

    pub fn add(&self, trip: NewTrip) -> Result<SavedTrip, StorageError> {
        let now = self.clock.now();
        let saved = SavedTrip::from_new(generate_trip_id(now.timestamp_millis()), now, trip);

        let mut trips = match self.load() {
            Ok(trips) => trips,
            Err(e) => {
                error!("Saved trips unreadable, replacing them with the new trip: {}", e);
                Vec::new()
            }
        };
        trips.push(saved.clone());
        self.store(&trips)?;

        Ok(saved)
    }

    /// Returns false when no trip has this id or the change could not be written.
    pub fn delete(&self, id: &str) -> bool {
        let mut trips = self.list();
        let before = trips.len();
        trips.retain(|trip| trip.id != id);

        if trips.len() == before {
            return false;
        }

        match self.store(&trips) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to delete trip {}: {}", id, e);
                false
            }
        }
    }

    /// Merge the supplied fields into the trip with this id.
    pub fn update(&self, id: &str, update: TripUpdate) -> Option<SavedTrip> {
        let mut trips = self.list();
        let trip = trips.iter_mut().find(|trip| trip.id == id)?;
        trip.apply_update(update);
        let updated = trip.clone();

        match self.store(&trips) {
            Ok(()) => Some(updated),
            Err(e) => {
                error!("Failed to update trip {}: {}", id, e);
                None
            }
        }
    }

    fn load(&self) -> Result<Vec<SavedTrip>, StorageError> {
        match self.storage.get(SAVED_TRIPS_KEY)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, trips: &[SavedTrip]) -> Result<(), StorageError> {
        let text = serde_json::to_string(trips)?;
        self.storage.set(SAVED_TRIPS_KEY, text)
    }
}

fn generate_trip_id(timestamp_millis: i64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("trip-{}-{}", timestamp_millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{itinerary::Itinerary, trip::BudgetBreakdown};
    use crate::services::{cache::ManualClock, storage::MemoryStorage};
    use chrono::{TimeZone, Utc};

    fn store() -> (TripStore<MemoryStorage, ManualClock>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 11, 2, 10, 30, 0).unwrap(),
        ));
        (TripStore::new(storage.clone(), clock), storage)
    }

    fn new_trip(destination: &str) -> NewTrip {
        NewTrip {
            destination: destination.to_string(),
            start_date: "2024-12-20".to_string(),
            end_date: "2024-12-22".to_string(),
            duration: 3,
            total_budget: 3000,
            budget_breakdown: BudgetBreakdown {
                accommodation: 1500,
                activities: 0,
                transportation: 600,
                food: 900,
                other: 0,
            },
            itinerary: Itinerary::default(),
            notes: None,
            cover_image: None,
        }
    }

    #[test]
    fn test_add_assigns_id_and_timestamp() {
        let (store, _) = store();
        let saved = store.add(new_trip("Jaipur")).unwrap();

        assert!(saved.id.starts_with("trip-1730543400000-"));
        let suffix = saved.id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(saved.created_at.timestamp_millis(), 1730543400000);
        assert_eq!(store.get(&saved.id), Some(saved));
    }

    #[test]
    fn test_list_and_delete() {
        let (store, _) = store();
        let first = store.add(new_trip("Jaipur")).unwrap();
        let second = store.add(new_trip("Kochi")).unwrap();
        assert_eq!(store.list().len(), 2);

        assert!(store.delete(&first.id));
        assert!(!store.delete(&first.id));
        assert_eq!(store.list(), vec![second]);
    }

    #[test]
    fn test_update_merges_supplied_fields() {
        let (store, _) = store();
        let saved = store.add(new_trip("Jaipur")).unwrap();

        let updated = store
            .update(
                &saved.id,
                TripUpdate {
                    notes: Some("Book the fort light show".to_string()),
                    total_budget: Some(4500),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.notes.as_deref(), Some("Book the fort light show"));
        assert_eq!(updated.total_budget, 4500);
        assert_eq!(updated.destination, "Jaipur");
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(store.get(&saved.id), Some(updated));
        assert!(store.update("trip-missing", TripUpdate::default()).is_none());
    }

    #[test]
    fn test_malformed_storage_reads_as_empty() {
        let (store, storage) = store();
        storage.set(SAVED_TRIPS_KEY, "{oops".to_string()).unwrap();
        assert!(store.list().is_empty());
        assert!(store.get("trip-1").is_none());
    }

    #[test]
    fn test_add_over_malformed_storage_starts_fresh() {
        let (store, storage) = store();
        storage.set(SAVED_TRIPS_KEY, "{oops".to_string()).unwrap();

        let saved = store.add(new_trip("Kochi")).unwrap();
        assert_eq!(store.list(), vec![saved]);
    }
}
