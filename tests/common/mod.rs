#![allow(dead_code)]

use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use serde_json::json;

use trip_planner_api::{
    config::AppConfig,
    models::{
        activity::{Activity, ActivityType},
        attraction::Attraction,
        flight::Flight,
        hotel::Hotel,
        itinerary::{Itinerary, ItineraryDay},
    },
    routes,
    services::upstream_client::UpstreamClient,
};

/// Nothing listens on port 1, so requests there fail to connect.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:1/search.json";

pub fn create_app(
    upstream_url: &str,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = AppConfig {
        search_api_base_url: upstream_url.to_string(),
        environment: "test".to_string(),
        ..AppConfig::default()
    };
    let upstream = UpstreamClient::new(upstream_url, Duration::from_secs(5))
        .expect("build upstream client");

    App::new()
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(upstream))
        .configure(routes::configure)
}

#[derive(Deserialize)]
struct MockQuery {
    engine: String,
    api_key: String,
}

async fn mock_search(query: web::Query<MockQuery>) -> HttpResponse {
    if query.api_key == "bad-key" {
        return HttpResponse::Unauthorized().json(json!({"error": "Invalid API key."}));
    }
    if query.api_key == "rate-limited" {
        return HttpResponse::TooManyRequests().body("slow down");
    }

    match query.engine.as_str() {
        "google_flights" => HttpResponse::Ok().json(json!({
            "best_flights": [{
                "flights": [{
                    "departure_airport": {"id": "DEL", "time": "2024-12-20 06:15"},
                    "arrival_airport": {"id": "GOI", "time": "2024-12-20 08:45"},
                    "airline": "IndiGo",
                    "flight_number": "6E 2231"
                }],
                "total_duration": 150,
                "price": 5120
            }]
        })),
        "google_hotels" => HttpResponse::Ok().json(json!({
            "properties": [{
                "name": "Casa Goa",
                "property_token": "casa-1",
                "rate_per_night": {"extracted_lowest": 4200}
            }]
        })),
        _ => HttpResponse::BadRequest().json(json!({"error": "Unsupported engine"})),
    }
}

/// Start a fake third-party search API and return its search URL.
pub async fn start_mock_upstream() -> String {
    let server = HttpServer::new(|| App::new().route("/search.json", web::get().to(mock_search)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock upstream");
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    format!("http://{}/search.json", addr)
}

pub fn empty_itinerary(days: u32) -> Itinerary {
    Itinerary::new(
        (1..=days)
            .map(|day| ItineraryDay {
                day,
                date: format!("Day {}", day),
                activities: vec![],
            })
            .collect(),
    )
}

pub fn meal(id: &str, time: &str, cost: u32) -> Activity {
    Activity {
        id: id.to_string(),
        time: time.to_string(),
        activity_type: ActivityType::Food,
        title: id.to_string(),
        description: String::new(),
        notes: String::new(),
        icon: "utensils".to_string(),
        cost,
    }
}

pub fn test_flight(id: &str, departure_time: &str) -> Flight {
    Flight {
        id: id.to_string(),
        airline: "IndiGo".to_string(),
        flight_number: "6E 2231".to_string(),
        departure_airport: "DEL".to_string(),
        arrival_airport: "GOI".to_string(),
        departure_time: departure_time.to_string(),
        arrival_time: "8:45 AM".to_string(),
        duration: "2h 30m".to_string(),
        price: 5120,
        stops: 0,
    }
}

pub fn test_hotel(id: &str) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: "Casa Goa".to_string(),
        description: "Portuguese villa with a garden pool".to_string(),
        address: "Assagao, North Goa".to_string(),
        rating: 4.5,
        price: 8400,
        amenities: vec!["Pool".to_string()],
        image: None,
    }
}

pub fn test_attraction(id: &str) -> Attraction {
    Attraction {
        id: id.to_string(),
        name: format!("Attraction {}", id),
        description: String::new(),
        location: "Old Goa".to_string(),
        opening_hours: "9:00 AM - 5:30 PM".to_string(),
        resident_price: 50,
        visitor_price: 500,
        cultural_notes: None,
        suggested_time: None,
        category: "heritage".to_string(),
    }
}
