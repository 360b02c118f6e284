use std::sync::Arc;

use log::{info, warn};

use crate::models::{
    attraction::PricingMode,
    itinerary::Itinerary,
    search::SearchParams,
    selection::SelectionState,
    trip::{NewTrip, SavedTrip},
};
use crate::services::{
    budget_service::BudgetService,
    cache::Clock,
    itinerary_composer,
    session_store::SessionStore,
    storage::{KeyValueStorage, StorageError},
    trip_store::TripStore,
};

/// What the user is looking at when they press save.
pub struct SaveTripRequest<'a> {
    pub search: &'a SearchParams,
    pub base_itinerary: &'a Itinerary,
    pub pricing_mode: PricingMode,
    pub notes: Option<String>,
    pub cover_image: Option<String>,
}

/// Turns the live plan into a persisted trip snapshot.
pub struct TripService<L: KeyValueStorage, S: KeyValueStorage, C: Clock> {
    trips: TripStore<L, C>,
    session: SessionStore<S>,
}

impl<L: KeyValueStorage, S: KeyValueStorage, C: Clock> TripService<L, S, C> {
    pub fn new(local: Arc<L>, session: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            trips: TripStore::new(local, clock),
            session: SessionStore::new(session),
        }
    }

    pub fn trips(&self) -> &TripStore<L, C> {
        &self.trips
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Freeze the current selections into a saved trip, then reset the selection.
    ///
    /// The selection is left untouched if the trip could not be written.
    pub fn save_trip(
        &self,
        request: SaveTripRequest<'_>,
        selection: &mut SelectionState,
    ) -> Result<SavedTrip, StorageError> {
        let itinerary =
            itinerary_composer::apply_selections(request.base_itinerary, selection, request.pricing_mode);
        let duration = request.search.duration_days();
        let budget = BudgetService::summarize_for_save(&itinerary, duration);

        let saved = self.trips.add(NewTrip {
            destination: request.search.destination.clone(),
            start_date: request.search.start_date.clone(),
            end_date: request.search.end_date.clone(),
            duration,
            total_budget: budget.total,
            budget_breakdown: budget.breakdown,
            itinerary,
            notes: request.notes,
            cover_image: request.cover_image,
        })?;
        info!("Saved trip {} to {}", saved.id, saved.destination);

        selection.clear_all();
        if let Err(e) = self.session.clear_selection() {
            warn!("Trip saved but session selection could not be cleared: {}", e);
        }

        Ok(saved)
    }
}
