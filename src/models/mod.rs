pub mod activity;
pub mod attraction;
pub mod flight;
pub mod hotel;
pub mod itinerary;
pub mod search;
pub mod selection;
pub mod trip;
