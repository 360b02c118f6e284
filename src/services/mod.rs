pub mod activity_factory;
pub mod budget_service;
pub mod cache;
pub mod itinerary_composer;
pub mod itinerary_shuffle;
pub mod sample_data;
pub mod session_store;
pub mod storage;
pub mod time_key;
pub mod travel_data_service;
pub mod travel_provider;
pub mod trip_service;
pub mod trip_store;
pub mod upstream_client;
