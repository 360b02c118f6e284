use crate::models::{
    activity::{Activity, ActivityType},
    attraction::{Attraction, PricingMode},
    flight::Flight,
    hotel::Hotel,
};

/// Hotels are not time-sliced; they sit at midday.
pub const HOTEL_CHECK_IN_TIME: &str = "12:00 PM";
const HOTEL_DESCRIPTION_LIMIT: usize = 100;

pub fn flight_activity_id(flight_id: &str) -> String {
    format!("flight-{}", flight_id)
}

pub fn hotel_activity_id(hotel_id: &str) -> String {
    format!("hotel-{}", hotel_id)
}

pub fn attraction_activity_id(attraction_id: &str) -> String {
    format!("attraction-{}", attraction_id)
}

pub fn from_flight(flight: &Flight) -> Activity {
    Activity {
        id: flight_activity_id(&flight.id),
        time: flight.departure_time.clone(),
        activity_type: ActivityType::Transport,
        title: format!("Flight to {}", flight.arrival_airport),
        description: format!("{} flight {}", flight.airline, flight.flight_number),
        notes: format!(
            "Departs {} at {}, arrives {} at {}. Duration: {}",
            flight.departure_airport,
            flight.departure_time,
            flight.arrival_airport,
            flight.arrival_time,
            flight.duration
        ),
        icon: "plane".to_string(),
        cost: flight.price,
    }
}

pub fn from_hotel(hotel: &Hotel) -> Activity {
    Activity {
        id: hotel_activity_id(&hotel.id),
        time: HOTEL_CHECK_IN_TIME.to_string(),
        activity_type: ActivityType::Accommodation,
        title: format!("Check in at {}", hotel.name),
        description: truncate(&hotel.description, HOTEL_DESCRIPTION_LIMIT),
        notes: format!("Rating: {:.1}/5. Address: {}", hotel.rating, hotel.address),
        icon: "hotel".to_string(),
        cost: hotel.price,
    }
}

pub fn from_attraction(attraction: &Attraction, mode: PricingMode) -> Activity {
    let mut notes = format!(
        "Location: {}. Hours: {}",
        attraction.location, attraction.opening_hours
    );
    if let Some(guidance) = attraction.cultural_notes.as_deref().filter(|g| !g.is_empty()) {
        notes.push_str(". ");
        notes.push_str(guidance);
    }

    Activity {
        id: attraction_activity_id(&attraction.id),
        time: attraction.time().to_string(),
        activity_type: ActivityType::Attraction,
        title: format!("Visit {}", attraction.name),
        description: attraction.description.clone(),
        notes,
        icon: "landmark".to_string(),
        cost: attraction.price_for(mode),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> Flight {
        Flight {
            id: "AI101".to_string(),
            airline: "Air India".to_string(),
            flight_number: "AI 101".to_string(),
            departure_airport: "DEL".to_string(),
            arrival_airport: "BOM".to_string(),
            departure_time: "6:15 AM".to_string(),
            arrival_time: "8:25 AM".to_string(),
            duration: "2h 10m".to_string(),
            price: 5400,
            stops: 0,
        }
    }

    fn hotel(description: &str) -> Hotel {
        Hotel {
            id: "h1".to_string(),
            name: "Sea View Residency".to_string(),
            description: description.to_string(),
            address: "Marine Drive, Mumbai".to_string(),
            rating: 4.3,
            price: 7200,
            amenities: vec!["wifi".to_string()],
            image: None,
        }
    }

    fn attraction() -> Attraction {
        Attraction {
            id: "5".to_string(),
            name: "Gateway of India".to_string(),
            description: "Arch monument on the waterfront".to_string(),
            location: "Apollo Bandar, Colaba".to_string(),
            opening_hours: "Open 24 hours".to_string(),
            resident_price: 40,
            visitor_price: 500,
            cultural_notes: Some("Dress modestly near the harbour shrines".to_string()),
            suggested_time: Some("4:00 PM".to_string()),
            category: "heritage".to_string(),
        }
    }

    #[test]
    fn test_flight_activity() {
        let activity = from_flight(&flight());
        assert_eq!(activity.id, "flight-AI101");
        assert_eq!(activity.time, "6:15 AM");
        assert_eq!(activity.activity_type, ActivityType::Transport);
        assert_eq!(activity.cost, 5400);
        assert!(activity.description.contains("Air India"));
        assert!(activity.description.contains("AI 101"));
        assert!(activity.notes.contains("DEL"));
        assert!(activity.notes.contains("BOM"));
        assert!(activity.notes.contains("2h 10m"));
    }

    #[test]
    fn test_hotel_activity_sits_at_midday() {
        let activity = from_hotel(&hotel("Quiet rooms"));
        assert_eq!(activity.id, "hotel-h1");
        assert_eq!(activity.time, HOTEL_CHECK_IN_TIME);
        assert_eq!(activity.activity_type, ActivityType::Accommodation);
        assert_eq!(activity.cost, 7200);
        assert_eq!(activity.description, "Quiet rooms");
        assert!(activity.notes.contains("4.3"));
        assert!(activity.notes.contains("Marine Drive"));
    }

    #[test]
    fn test_hotel_description_truncated() {
        let long = "é".repeat(150);
        let activity = from_hotel(&hotel(&long));
        assert_eq!(activity.description.chars().count(), 103);
        assert!(activity.description.ends_with("..."));
    }

    #[test]
    fn test_attraction_uses_active_pricing_mode() {
        let resident = from_attraction(&attraction(), PricingMode::Resident);
        let visitor = from_attraction(&attraction(), PricingMode::Visitor);
        assert_eq!(resident.cost, 40);
        assert_eq!(visitor.cost, 500);
        assert_eq!(resident.id, "attraction-5");
        assert_eq!(resident.time, "4:00 PM");
        assert_eq!(resident.activity_type, ActivityType::Attraction);
        assert!(resident.notes.contains("Colaba"));
        assert!(resident.notes.contains("Open 24 hours"));
        assert!(resident.notes.contains("Dress modestly"));
    }

    #[test]
    fn test_attraction_without_time_gets_default() {
        let mut attraction = attraction();
        attraction.suggested_time = None;
        assert_eq!(from_attraction(&attraction, PricingMode::Resident).time, "10:00 AM");
    }
}
