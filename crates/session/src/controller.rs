//! # Filter Controller
//!
//! Owns the session's filter state and is its only writer:
//! 1. Fetch the listings once on initialize
//! 2. Accept criteria mutations from the UI
//! 3. Recompute the filtered view at the end of every mutation
//! 4. Publish each recomputed view to subscribers
//!
//! There are no implicit dependency-tracked effects. Every mutation handler
//! calls `recompute` itself before returning, so the derived view is never
//! stale once a mutation has completed.

use std::sync::Arc;

use data_loader::{DataLoadError, Listing, ListingStore};
use pipeline::{filter_listings, BedroomCriteria, FilterCriteria, PriceRange, RoomTypeSelection};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::source::ListingSource;
use crate::status::{status_message, DEFAULT_STATUS};

/// A recomputed result, as seen by subscribers.
#[derive(Debug, Clone)]
pub struct FilteredView {
    /// Incremented on every recompute; 0 is the empty initial view.
    pub revision: u64,
    pub listings: Arc<[Listing]>,
}

/// Everything the presentation layer reads.
#[derive(Debug, Clone)]
pub struct FilterSessionState {
    listings: ListingStore,
    criteria: FilterCriteria,
    filtered_listings: Vec<Listing>,
    status_message: Option<&'static str>,
    revision: u64,
}

impl FilterSessionState {
    pub fn listings(&self) -> &ListingStore {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered_listings(&self) -> &[Listing] {
        &self.filtered_listings
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.status_message
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for FilterSessionState {
    fn default() -> Self {
        Self {
            listings: ListingStore::new(),
            criteria: FilterCriteria::default(),
            filtered_listings: Vec::new(),
            status_message: Some(DEFAULT_STATUS),
            revision: 0,
        }
    }
}

/// Session-scoped controller handed to every component that needs it.
pub struct FilterController {
    state: FilterSessionState,
    activated: bool,
    view_tx: watch::Sender<FilteredView>,
}

impl FilterController {
    pub fn new() -> Self {
        let (view_tx, _) = watch::channel(FilteredView {
            revision: 0,
            listings: Arc::<[Listing]>::from(Vec::new()),
        });
        Self {
            state: FilterSessionState::default(),
            activated: false,
            view_tx,
        }
    }

    /// Fetch the listings, on the first call only.
    ///
    /// A failed fetch is logged and swallowed; the session carries on with
    /// no listings and is not retried.
    pub async fn initialize<S: ListingSource>(&mut self, source: &S) {
        if !self.activate() {
            debug!("Filter session already initialized, skipping fetch");
            return;
        }
        let result = source.fetch_listings().await;
        self.commit_fetch(result);
    }

    /// Mark the session as activated. Returns `true` only the first time,
    /// which is the caller's cue to run the fetch and `commit_fetch` it.
    ///
    /// Splitting the fetch this way lets an event loop keep applying
    /// mutations while the fetch is pending.
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.activated, true)
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Install the outcome of a fetch.
    ///
    /// Success replaces the listings wholesale and recomputes against the
    /// criteria current at this moment. Failure leaves the listings as they
    /// were.
    pub fn commit_fetch(&mut self, result: Result<Vec<Listing>, DataLoadError>) {
        let store = result.and_then(|listings| {
            let store = ListingStore::from_listings(listings);
            store.validate()?;
            Ok(store)
        });

        match store {
            Ok(store) => {
                info!("Fetched {} listings", store.len());
                self.state.listings = store;
                self.recompute();
            }
            Err(err) => {
                error!(error = %err, "Error fetching listings");
            }
        }
    }

    /// Select a room type and show its explanatory copy.
    pub fn set_room_type(&mut self, selection: RoomTypeSelection) {
        self.state.status_message = status_message(&selection);
        self.state.criteria.room_type = selection;
        self.recompute();
    }

    /// Replace the price range. `min > max` is accepted as given.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.state.criteria.price_range = range;
        self.recompute();
    }

    /// Replace the bedrooms/beds/bathrooms triple as a whole.
    pub fn set_bedroom_criteria(&mut self, criteria: BedroomCriteria) {
        self.state.criteria.bedrooms = criteria;
        self.recompute();
    }

    /// Clear the room type and capacity filters. The price range is kept.
    pub fn reset_filters(&mut self) {
        self.state.criteria.room_type = RoomTypeSelection::Any;
        self.state.criteria.bedrooms = BedroomCriteria::ANY;
        self.state.status_message = Some(DEFAULT_STATUS);
        self.recompute();
    }

    /// Run the engine on demand for an explicit "show results" action.
    ///
    /// Reads the current state only; the status message and the published
    /// view are left alone.
    pub fn apply_filters(&self) -> Vec<Listing> {
        let filtered = filter_listings(self.state.listings.as_slice(), &self.state.criteria);
        info!("Applied filters, {} listings match", filtered.len());
        filtered
    }

    /// Receive every recomputed view from now on.
    pub fn subscribe(&self) -> watch::Receiver<FilteredView> {
        self.view_tx.subscribe()
    }

    pub fn state(&self) -> &FilterSessionState {
        &self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    pub fn filtered_listings(&self) -> &[Listing] {
        &self.state.filtered_listings
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.state.status_message
    }

    fn recompute(&mut self) {
        self.state.filtered_listings =
            filter_listings(self.state.listings.as_slice(), &self.state.criteria);
        self.state.revision += 1;

        debug!(
            revision = self.state.revision,
            matched = self.state.filtered_listings.len(),
            "Recomputed filtered listings"
        );

        self.view_tx.send_replace(FilteredView {
            revision: self.state.revision,
            listings: Arc::from(self.state.filtered_listings.as_slice()),
        });
    }
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}
