//! Fetch helpers for flights, hotels, attractions and base itineraries.
//!
//! Each call validates its input, answers from a per-kind cache when fresh,
//! and otherwise asks the provider. Provider failures never reach the caller:
//! they resolve to sample data plus a notice suitable for a toast.

use std::{future::Future, sync::Arc, sync::Mutex};

use chrono::NaiveDate;
use futures::future::BoxFuture;
use log::{info, warn};
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;

use crate::config::DataServiceConfig;
use crate::models::{
    attraction::Attraction, flight::Flight, hotel::Hotel, itinerary::Itinerary,
    search::SearchParams,
};
use crate::services::{
    cache::{cache_key, Clock, ExpiringCache},
    sample_data,
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0} is required")]
    MissingInput(&'static str),
    #[error("{0} must be a YYYY-MM-DD date")]
    InvalidDate(&'static str),
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not read upstream payload: {0}")]
    MalformedPayload(String),
    #[error("no live source for {0}")]
    Unsupported(&'static str),
}

pub type ProviderFuture<'a, T> = BoxFuture<'a, Result<T, FetchError>>;

/// A live source of travel data.
pub trait TravelDataProvider: Send + Sync {
    fn search_flights<'a>(&'a self, query: &'a FlightQuery) -> ProviderFuture<'a, Vec<Flight>>;
    fn search_hotels<'a>(&'a self, query: &'a HotelQuery) -> ProviderFuture<'a, Vec<Hotel>>;
    fn search_attractions<'a>(
        &'a self,
        query: &'a AttractionQuery,
    ) -> ProviderFuture<'a, Vec<Attraction>>;
    fn generate_itinerary<'a>(&'a self, query: &'a ItineraryQuery) -> ProviderFuture<'a, Itinerary>;
}

fn require(value: &str, name: &'static str) -> Result<(), FetchError> {
    if value.trim().is_empty() {
        Err(FetchError::MissingInput(name))
    } else {
        Ok(())
    }
}

fn parse_date(value: &str, name: &'static str) -> Result<NaiveDate, FetchError> {
    require(value, name)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FetchError::InvalidDate(name))
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub return_date: Option<String>,
    pub currency: String,
}

impl FlightQuery {
    pub fn from_search(search: &SearchParams) -> Self {
        Self {
            origin: search.origin.clone(),
            destination: search.destination.clone(),
            date: search.start_date.clone(),
            return_date: Some(search.end_date.clone()).filter(|d| !d.is_empty()),
            currency: "INR".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        require(&self.origin, "origin")?;
        require(&self.destination, "destination")?;
        parse_date(&self.date, "date")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HotelQuery {
    pub destination: String,
    pub check_in: String,
    pub check_out: String,
    pub adults: u32,
    pub currency: String,
}

impl HotelQuery {
    pub fn from_search(search: &SearchParams) -> Self {
        Self {
            destination: search.destination.clone(),
            check_in: search.start_date.clone(),
            check_out: search.end_date.clone(),
            adults: search.travelers.max(1),
            currency: "INR".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        require(&self.destination, "destination")?;
        parse_date(&self.check_in, "check-in date")?;
        parse_date(&self.check_out, "check-out date")?;
        Ok(())
    }

    fn nights(&self) -> u32 {
        match (
            parse_date(&self.check_in, "check-in date"),
            parse_date(&self.check_out, "check-out date"),
        ) {
            (Ok(start), Ok(end)) => (end - start).num_days().max(1) as u32,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttractionQuery {
    pub destination: String,
}

impl AttractionQuery {
    pub fn validate(&self) -> Result<(), FetchError> {
        require(&self.destination, "destination")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItineraryQuery {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: Option<u32>,
    pub preferences: Vec<String>,
}

impl ItineraryQuery {
    pub fn from_search(search: &SearchParams) -> Self {
        Self {
            destination: search.destination.clone(),
            start_date: search.start_date.clone(),
            end_date: search.end_date.clone(),
            budget: search.budget,
            preferences: search.preferences.clone(),
        }
    }

    /// Validated start and end dates.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), FetchError> {
        require(&self.destination, "destination")?;
        Ok((
            parse_date(&self.start_date, "start date")?,
            parse_date(&self.end_date, "end date")?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Cache,
    Sample,
}

/// Result of a fetch helper: always usable data, plus a notice when it is sample data.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: Arc<T>,
    pub source: DataSource,
    pub notice: Option<String>,
}

impl<T> Fetched<T> {
    fn new(data: Arc<T>, source: DataSource) -> Self {
        Self {
            data,
            source,
            notice: None,
        }
    }
}

pub struct TravelDataService<P: TravelDataProvider, C: Clock> {
    provider: P,
    config: DataServiceConfig,
    rng: Mutex<StdRng>,
    flights: ExpiringCache<Arc<Vec<Flight>>, C>,
    hotels: ExpiringCache<Arc<Vec<Hotel>>, C>,
    attractions: ExpiringCache<Arc<Vec<Attraction>>, C>,
    itineraries: ExpiringCache<Arc<Itinerary>, C>,
}

impl<P: TravelDataProvider, C: Clock> TravelDataService<P, C> {
    pub fn new(provider: P, clock: Arc<C>, config: DataServiceConfig, rng: StdRng) -> Self {
        Self {
            flights: ExpiringCache::new("flights", config.flights_ttl, clock.clone()),
            hotels: ExpiringCache::new("hotels", config.hotels_ttl, clock.clone()),
            attractions: ExpiringCache::new("attractions", config.attractions_ttl, clock.clone()),
            itineraries: ExpiringCache::new("itinerary", config.itinerary_ttl, clock),
            provider,
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn fetch_flights(&self, query: &FlightQuery) -> Result<Fetched<Vec<Flight>>, FetchError> {
        query.validate()?;
        Ok(self
            .fetch_cached(
                "flights",
                &self.flights,
                cache_key(query),
                self.provider.search_flights(query),
                |rng| sample_data::sample_flights(rng, &query.origin, &query.destination),
            )
            .await)
    }

    pub async fn fetch_hotels(&self, query: &HotelQuery) -> Result<Fetched<Vec<Hotel>>, FetchError> {
        query.validate()?;
        Ok(self
            .fetch_cached(
                "hotels",
                &self.hotels,
                cache_key(query),
                self.provider.search_hotels(query),
                |rng| sample_data::sample_hotels(rng, &query.destination, query.nights()),
            )
            .await)
    }

    pub async fn fetch_attractions(
        &self,
        query: &AttractionQuery,
    ) -> Result<Fetched<Vec<Attraction>>, FetchError> {
        query.validate()?;
        Ok(self
            .fetch_cached(
                "attractions",
                &self.attractions,
                cache_key(query),
                self.provider.search_attractions(query),
                |rng| sample_data::sample_attractions(rng, &query.destination),
            )
            .await)
    }

    pub async fn fetch_itinerary(&self, query: &ItineraryQuery) -> Result<Fetched<Itinerary>, FetchError> {
        let (start, end) = query.date_range()?;
        Ok(self
            .fetch_cached(
                "itinerary",
                &self.itineraries,
                cache_key(query),
                self.provider.generate_itinerary(query),
                |rng| sample_data::sample_itinerary(rng, &query.destination, start, end),
            )
            .await)
    }

    async fn fetch_cached<T, F, S>(
        &self,
        kind: &'static str,
        cache: &ExpiringCache<Arc<T>, C>,
        key: String,
        request: F,
        sample: S,
    ) -> Fetched<T>
    where
        F: Future<Output = Result<T, FetchError>>,
        S: FnOnce(&mut StdRng) -> T,
    {
        if let Some(hit) = cache.get(&key) {
            return Fetched::new(hit, DataSource::Cache);
        }

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        match request.await {
            Ok(data) => {
                let data = Arc::new(data);
                cache.insert(key, data.clone());
                info!("Fetched live {}", kind);
                Fetched::new(data, DataSource::Live)
            }
            Err(err) => {
                let data = {
                    let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
                    Arc::new(sample(&mut *rng))
                };

                let mut fetched = Fetched::new(data, DataSource::Sample);
                if let FetchError::Unsupported(_) = err {
                    info!("Using sample {}: {}", kind, err);
                } else {
                    warn!("Could not fetch {}, using sample data: {}", kind, err);
                    fetched.notice = Some(format!(
                        "Could not fetch {}. Showing sample results instead.",
                        kind
                    ));
                }
                fetched
            }
        }
    }
}
