use std::sync::Arc;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::models::{flight::Flight, hotel::Hotel, search::SearchParams};
use crate::services::storage::{KeyValueStorage, StorageError};

pub const SEARCH_PARAMS_KEY: &str = "searchParams";
pub const SELECTED_FLIGHT_KEY: &str = "selectedFlight";
pub const SELECTED_HOTEL_KEY: &str = "selectedHotel";

/// Session-scoped state: the last search and the chosen flight and hotel.
pub struct SessionStore<S: KeyValueStorage> {
    storage: Arc<S>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn save_search(&self, params: &SearchParams) -> Result<(), StorageError> {
        self.write(SEARCH_PARAMS_KEY, params)
    }

    pub fn load_search(&self) -> Option<SearchParams> {
        self.read(SEARCH_PARAMS_KEY)
    }

    pub fn set_selected_flight(&self, flight: Option<&Flight>) -> Result<(), StorageError> {
        match flight {
            Some(flight) => self.write(SELECTED_FLIGHT_KEY, flight),
            None => self.storage.remove(SELECTED_FLIGHT_KEY),
        }
    }

    pub fn selected_flight(&self) -> Option<Flight> {
        self.read(SELECTED_FLIGHT_KEY)
    }

    pub fn set_selected_hotel(&self, hotel: Option<&Hotel>) -> Result<(), StorageError> {
        match hotel {
            Some(hotel) => self.write(SELECTED_HOTEL_KEY, hotel),
            None => self.storage.remove(SELECTED_HOTEL_KEY),
        }
    }

    pub fn selected_hotel(&self) -> Option<Hotel> {
        self.read(SELECTED_HOTEL_KEY)
    }

    /// Forget the selected flight and hotel; the last search is kept.
    pub fn clear_selection(&self) -> Result<(), StorageError> {
        self.storage.remove(SELECTED_FLIGHT_KEY)?;
        self.storage.remove(SELECTED_HOTEL_KEY)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(SEARCH_PARAMS_KEY)?;
        self.clear_selection()
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.storage.set(key, text)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.storage.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!("Session storage unavailable for {}: {}", key, e);
                return None;
            }
        };

        serde_json::from_str(&text)
            .map_err(|e| warn!("Ignoring malformed session value for {}: {}", key, e))
            .ok()
    }
}
