//! Stand-in results used when a live source is unavailable.
//!
//! Everything is drawn from the caller's random source so a seeded generator
//! produces the same sample trip every time.

use chrono::{Duration, NaiveDate};
use rand::{seq::SliceRandom, Rng};

use crate::models::{
    activity::{Activity, ActivityType},
    attraction::Attraction,
    flight::Flight,
    hotel::Hotel,
    itinerary::{Itinerary, ItineraryDay},
};

pub const SAMPLE_FLIGHT_COUNT: usize = 5;
const DISPLAY_DATE_FORMAT: &str = "%a, %b %-d";

const AIRLINES: [(&str, &str); 5] = [
    ("IndiGo", "6E"),
    ("Air India", "AI"),
    ("Vistara", "UK"),
    ("SpiceJet", "SG"),
    ("Akasa Air", "QP"),
];

const DEPARTURE_MINUTES: [u32; 4] = [0, 15, 30, 45];

/// Format a 24-hour clock reading as `"H:MM AM"`.
pub fn format_display_time(hour: u32, minute: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

fn airport_code(city: &str) -> String {
    let code: String = city
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase();
    if code.is_empty() {
        "XXX".to_string()
    } else {
        code
    }
}

fn round_to(value: u32, step: u32) -> u32 {
    (value / step) * step
}

pub fn sample_flights<R: Rng + ?Sized>(rng: &mut R, origin: &str, destination: &str) -> Vec<Flight> {
    let from = airport_code(origin);
    let to = airport_code(destination);

    let mut flights: Vec<Flight> = (0..SAMPLE_FLIGHT_COUNT)
        .map(|i| {
            let (airline, code) = AIRLINES[i % AIRLINES.len()];
            let hour = rng.gen_range(5..22);
            let minute = *DEPARTURE_MINUTES.choose(rng).unwrap_or(&0);
            let duration_minutes = rng.gen_range(60..=240);
            let arrival_total = hour * 60 + minute + duration_minutes;

            Flight {
                id: format!("sample-flight-{}", i + 1),
                airline: airline.to_string(),
                flight_number: format!("{} {}", code, rng.gen_range(100..1000)),
                departure_airport: from.clone(),
                arrival_airport: to.clone(),
                departure_time: format_display_time(hour, minute),
                arrival_time: format_display_time((arrival_total / 60) % 24, arrival_total % 60),
                duration: format!("{}h {}m", duration_minutes / 60, duration_minutes % 60),
                price: round_to(rng.gen_range(2500..12000), 50),
                stops: if duration_minutes > 180 { 1 } else { 0 },
            }
        })
        .collect();

    flights.sort_by_key(|f| f.price);
    flights
}

pub fn sample_hotels<R: Rng + ?Sized>(rng: &mut R, destination: &str, nights: u32) -> Vec<Hotel> {
    let templates = [
        ("{} Grand Palace", "Five-star stay with rooftop pool and spa, a short drive from the old city."),
        ("Heritage Haveli {}", "Restored courtyard mansion with hand-painted rooms and traditional cuisine."),
        ("{} Backpackers Inn", "Friendly hostel with dorms and private rooms close to the main market."),
        ("Lakeside Retreat {}", "Quiet cottages overlooking the water, with breakfast included."),
    ];
    let nights = nights.max(1);

    templates
        .iter()
        .enumerate()
        .map(|(i, (name, description))| Hotel {
            id: format!("sample-hotel-{}", i + 1),
            name: name.replace("{}", destination),
            description: description.to_string(),
            address: format!("{} Road, {}", ["Station", "Palace", "Market", "Lake"][i], destination),
            rating: (rng.gen_range(35..=49) as f32) / 10.0,
            price: round_to(rng.gen_range(1500..12000), 100) * nights,
            amenities: vec!["Free Wi-Fi".to_string(), "Air conditioning".to_string()],
            image: None,
        })
        .collect()
}

pub fn sample_attractions<R: Rng + ?Sized>(rng: &mut R, destination: &str) -> Vec<Attraction> {
    let templates: [(&str, &str, &str, Option<&str>); 6] = [
        ("{} Fort", "heritage", "9:30 AM", None),
        ("{} City Museum", "museum", "11:00 AM", None),
        ("Old Market Bazaar", "shopping", "4:00 PM", Some("Bargaining is expected; carry small change.")),
        ("{} Botanical Garden", "nature", "8:30 AM", None),
        ("Sunset Point", "nature", "5:30 PM", None),
        ("Temple of {}", "spiritual", "7:00 AM", Some("Remove footwear before entering; shoulders and knees should be covered.")),
    ];

    templates
        .iter()
        .enumerate()
        .map(|(i, (name, category, time, guidance))| {
            let name = name.replace("{}", destination);
            Attraction {
                id: format!("sample-attraction-{}", i + 1),
                description: format!("A popular {} stop in {}.", category, destination),
                location: destination.to_string(),
                opening_hours: "9:00 AM - 6:00 PM".to_string(),
                resident_price: round_to(rng.gen_range(0..=200), 10),
                visitor_price: round_to(rng.gen_range(300..=1000), 50),
                cultural_notes: guidance.map(str::to_string),
                suggested_time: Some(time.to_string()),
                category: category.to_string(),
                name,
            }
        })
        .collect()
}

fn activity(
    id: String,
    time: &str,
    activity_type: ActivityType,
    title: String,
    icon: &str,
    cost: u32,
) -> Activity {
    Activity {
        id,
        time: time.to_string(),
        activity_type,
        title,
        description: String::new(),
        notes: String::new(),
        icon: icon.to_string(),
        cost,
    }
}

/// One day per date in `start..=end`, each with meals and two open slots.
pub fn sample_itinerary<R: Rng + ?Sized>(
    rng: &mut R,
    destination: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Itinerary {
    let day_count = ((end - start).num_days() + 1).max(1);

    let days = (0..day_count)
        .map(|offset| {
            let day = offset as u32 + 1;
            let date = start + Duration::days(offset);
            let prefix = format!("day{}", day);

            let mut activities = vec![
                activity(format!("{}-breakfast", prefix), "8:00 AM", ActivityType::Food, "Breakfast".to_string(), "coffee", round_to(rng.gen_range(150..400), 10)),
                activity(format!("{}-sightseeing", prefix), "10:00 AM", ActivityType::Attraction, format!("Explore {}", destination), "map", 0),
                activity(format!("{}-lunch", prefix), "1:00 PM", ActivityType::Food, "Lunch".to_string(), "utensils", round_to(rng.gen_range(250..700), 10)),
                activity(format!("{}-evening", prefix), "5:00 PM", ActivityType::Attraction, "Evening walk".to_string(), "sunset", 0),
                activity(format!("{}-dinner", prefix), "7:30 PM", ActivityType::Food, "Dinner".to_string(), "utensils", round_to(rng.gen_range(400..1200), 10)),
            ];

            if offset == 0 {
                activities[0].notes = format!("Arrival day in {}", destination);
            }
            if offset == day_count - 1 {
                if let Some(last) = activities.last_mut() {
                    last.notes = "Departure day; keep the evening light".to_string();
                }
            }

            ItineraryDay {
                day,
                date: date.format(DISPLAY_DATE_FORMAT).to_string(),
                activities,
            }
        })
        .collect();

    Itinerary::new(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::time_key;
    use rand::{rngs::StdRng, SeedableRng};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_display_time_format() {
        assert_eq!(format_display_time(0, 5), "12:05 AM");
        assert_eq!(format_display_time(9, 0), "9:00 AM");
        assert_eq!(format_display_time(12, 30), "12:30 PM");
        assert_eq!(format_display_time(19, 45), "7:45 PM");
    }

    #[test]
    fn test_seeded_samples_are_reproducible() {
        let a = sample_flights(&mut StdRng::seed_from_u64(11), "Delhi", "Goa");
        let b = sample_flights(&mut StdRng::seed_from_u64(11), "Delhi", "Goa");
        assert_eq!(a, b);
        assert_eq!(a.len(), SAMPLE_FLIGHT_COUNT);
        assert!(a.iter().all(|f| f.departure_airport == "DEL" && f.arrival_airport == "GOA"));
        assert!(a.iter().all(|f| time_key::is_display_time(&f.departure_time)));
    }

    #[test]
    fn test_sample_hotels_and_attractions() {
        let mut rng = StdRng::seed_from_u64(3);
        let hotels = sample_hotels(&mut rng, "Udaipur", 2);
        assert_eq!(hotels.len(), 4);
        assert!(hotels[0].name.contains("Udaipur"));
        assert!(hotels.iter().all(|h| h.price >= 3000));

        let attractions = sample_attractions(&mut rng, "Udaipur");
        assert_eq!(attractions.len(), 6);
        assert!(attractions.iter().all(|a| a.visitor_price >= a.resident_price));
    }

    #[test]
    fn test_sample_itinerary_covers_inclusive_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let itinerary = sample_itinerary(&mut rng, "Goa", date("2024-10-19"), date("2024-10-21"));

        assert_eq!(itinerary.day_count(), 3);
        let numbers: Vec<u32> = itinerary.days.iter().map(|d| d.day).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(itinerary.days[0].date, "Sat, Oct 19");

        for day in &itinerary.days {
            let keys: Vec<u32> = day.activities.iter().map(|a| time_key::sort_key(&a.time)).collect();
            assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_reversed_range_yields_single_day() {
        let mut rng = StdRng::seed_from_u64(5);
        let itinerary = sample_itinerary(&mut rng, "Goa", date("2024-10-21"), date("2024-10-19"));
        assert_eq!(itinerary.day_count(), 1);
    }
}
