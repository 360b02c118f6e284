use serde::{Deserialize, Serialize};

use super::{attraction::Attraction, flight::Flight, hotel::Hotel};

/// Flight, hotel and attractions the user has picked but not yet saved.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected_flight: Option<Flight>,
    pub selected_hotel: Option<Hotel>,
    #[serde(default)]
    pub selected_attractions: Vec<Attraction>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_flight(&mut self, flight: Flight) {
        self.selected_flight = Some(flight);
    }

    pub fn select_hotel(&mut self, hotel: Hotel) {
        self.selected_hotel = Some(hotel);
    }

    pub fn clear_flight(&mut self) -> Option<Flight> {
        self.selected_flight.take()
    }

    pub fn clear_hotel(&mut self) -> Option<Hotel> {
        self.selected_hotel.take()
    }

    /// Returns false if an attraction with the same id was already selected.
    pub fn add_attraction(&mut self, attraction: Attraction) -> bool {
        if self.has_attraction(&attraction.id) {
            return false;
        }
        self.selected_attractions.push(attraction);
        true
    }

    pub fn remove_attraction(&mut self, attraction_id: &str) -> Option<Attraction> {
        let index = self
            .selected_attractions
            .iter()
            .position(|a| a.id == attraction_id)?;
        Some(self.selected_attractions.remove(index))
    }

    /// Adds the attraction, or removes it when already selected. Returns whether it is now selected.
    pub fn toggle_attraction(&mut self, attraction: Attraction) -> bool {
        if self.remove_attraction(&attraction.id).is_some() {
            false
        } else {
            self.selected_attractions.push(attraction);
            true
        }
    }

    pub fn has_attraction(&self, attraction_id: &str) -> bool {
        self.selected_attractions.iter().any(|a| a.id == attraction_id)
    }

    pub fn clear_all(&mut self) {
        self.selected_flight = None;
        self.selected_hotel = None;
        self.selected_attractions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected_flight.is_none()
            && self.selected_hotel.is_none()
            && self.selected_attractions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attraction(id: &str) -> Attraction {
        Attraction {
            id: id.to_string(),
            name: format!("Attraction {}", id),
            description: String::new(),
            location: String::new(),
            opening_hours: String::new(),
            resident_price: 50,
            visitor_price: 600,
            cultural_notes: None,
            suggested_time: None,
            category: "heritage".to_string(),
        }
    }

    #[test]
    fn test_attractions_unique_by_id_in_insertion_order() {
        let mut selection = SelectionState::new();
        assert!(selection.add_attraction(attraction("7")));
        assert!(selection.add_attraction(attraction("5")));
        assert!(!selection.add_attraction(attraction("7")));

        let ids: Vec<&str> = selection
            .selected_attractions
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["7", "5"]);
    }

    #[test]
    fn test_toggle_attraction() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle_attraction(attraction("1")));
        assert!(selection.has_attraction("1"));
        assert!(!selection.toggle_attraction(attraction("1")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_missing_attraction_is_none() {
        let mut selection = SelectionState::new();
        selection.add_attraction(attraction("1"));
        assert!(selection.remove_attraction("2").is_none());
        assert_eq!(selection.selected_attractions.len(), 1);
    }
}
