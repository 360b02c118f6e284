use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{attraction::Attraction, flight::Flight, hotel::Hotel, itinerary::Itinerary};
use crate::services::sample_data::format_display_time;
use crate::services::travel_data_service::{
    AttractionQuery, FetchError, FlightQuery, HotelQuery, ItineraryQuery, ProviderFuture,
    TravelDataProvider,
};

/// Live provider backed by the search proxy's `/api/flights` and `/api/hotels`.
pub struct HttpTravelProvider {
    http_client: reqwest::Client,
    proxy_url: String,
    api_key: String,
}

impl HttpTravelProvider {
    pub fn new(
        proxy_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
            proxy_url: proxy_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.proxy_url, path))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string();
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))
    }
}

impl TravelDataProvider for HttpTravelProvider {
    fn search_flights<'a>(&'a self, query: &'a FlightQuery) -> ProviderFuture<'a, Vec<Flight>> {
        Box::pin(async move {
            let mut params = vec![
                ("origin", query.origin.clone()),
                ("destination", query.destination.clone()),
                ("date", query.date.clone()),
                ("currency", query.currency.clone()),
                ("key", self.api_key.clone()),
            ];
            if let Some(return_date) = &query.return_date {
                params.push(("return", return_date.clone()));
            }

            let body = self.get_json("/api/flights", &params).await?;
            flights_from_response(body)
        })
    }

    fn search_hotels<'a>(&'a self, query: &'a HotelQuery) -> ProviderFuture<'a, Vec<Hotel>> {
        Box::pin(async move {
            let params = vec![
                ("destination", query.destination.clone()),
                ("checkInDate", query.check_in.clone()),
                ("checkOutDate", query.check_out.clone()),
                ("adults", query.adults.to_string()),
                ("currency", query.currency.clone()),
                ("key", self.api_key.clone()),
            ];

            let body = self.get_json("/api/hotels", &params).await?;
            hotels_from_response(body)
        })
    }

    fn search_attractions<'a>(
        &'a self,
        _query: &'a AttractionQuery,
    ) -> ProviderFuture<'a, Vec<Attraction>> {
        Box::pin(async { Err(FetchError::Unsupported("attractions")) })
    }

    fn generate_itinerary<'a>(&'a self, _query: &'a ItineraryQuery) -> ProviderFuture<'a, Itinerary> {
        Box::pin(async { Err(FetchError::Unsupported("itinerary generation")) })
    }
}

#[derive(Debug, Deserialize)]
struct FlightSearchResponse {
    #[serde(default)]
    best_flights: Vec<FlightOption>,
    #[serde(default)]
    other_flights: Vec<FlightOption>,
}

#[derive(Debug, Deserialize)]
struct FlightOption {
    #[serde(default)]
    flights: Vec<FlightLeg>,
    total_duration: Option<u32>,
    price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FlightLeg {
    departure_airport: AirportTime,
    arrival_airport: AirportTime,
    #[serde(default)]
    airline: String,
    #[serde(default)]
    flight_number: String,
}

#[derive(Debug, Deserialize)]
struct AirportTime {
    id: String,
    time: String,
}

#[derive(Debug, Deserialize)]
struct HotelSearchResponse {
    #[serde(default)]
    properties: Vec<Property>,
}

#[derive(Debug, Deserialize)]
struct Property {
    name: String,
    description: Option<String>,
    address: Option<String>,
    property_token: Option<String>,
    overall_rating: Option<f32>,
    rate_per_night: Option<Rate>,
    total_rate: Option<Rate>,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    images: Vec<PropertyImage>,
}

#[derive(Debug, Deserialize)]
struct Rate {
    extracted_lowest: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PropertyImage {
    thumbnail: Option<String>,
}

/// `"2024-12-20 06:15"` -> `"6:15 AM"`; anything else is passed through.
fn display_time(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        Ok(datetime) => format_display_time(datetime.hour(), datetime.minute()),
        Err(_) => raw.to_string(),
    }
}

fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub(crate) fn flights_from_response(body: Value) -> Result<Vec<Flight>, FetchError> {
    let response: FlightSearchResponse =
        serde_json::from_value(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    let flights = response
        .best_flights
        .into_iter()
        .chain(response.other_flights)
        .enumerate()
        .filter_map(|(index, option)| {
            let price = option.price?;
            let first = option.flights.first()?;
            let last = option.flights.last()?;

            Some(Flight {
                id: format!("{}-{}", first.flight_number.replace(' ', ""), index),
                airline: first.airline.clone(),
                flight_number: first.flight_number.clone(),
                departure_airport: first.departure_airport.id.clone(),
                arrival_airport: last.arrival_airport.id.clone(),
                departure_time: display_time(&first.departure_airport.time),
                arrival_time: display_time(&last.arrival_airport.time),
                duration: option
                    .total_duration
                    .map(format_duration)
                    .unwrap_or_default(),
                price: price.round() as u32,
                stops: option.flights.len().saturating_sub(1) as u32,
            })
        })
        .collect();

    Ok(flights)
}

pub(crate) fn hotels_from_response(body: Value) -> Result<Vec<Hotel>, FetchError> {
    let response: HotelSearchResponse =
        serde_json::from_value(body).map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

    let hotels = response
        .properties
        .into_iter()
        .enumerate()
        .filter_map(|(index, property)| {
            let price = property
                .total_rate
                .and_then(|r| r.extracted_lowest)
                .or_else(|| property.rate_per_night.and_then(|r| r.extracted_lowest))?;

            Some(Hotel {
                id: property
                    .property_token
                    .unwrap_or_else(|| format!("hotel-result-{}", index)),
                name: property.name,
                description: property.description.unwrap_or_default(),
                address: property.address.unwrap_or_default(),
                rating: property.overall_rating.unwrap_or_default(),
                price: price.round() as u32,
                amenities: property.amenities,
                image: property.images.into_iter().find_map(|i| i.thumbnail),
            })
        })
        .collect();

    Ok(hotels)
}
