//! The client state container
//!
//! [`FeatureBoard`] owns the cached feature list, the current selection and
//! the list filters. Votes go through the optimistic protocol:
//!
//! 1. snapshot the local record and apply the predicted change
//! 2. send the request
//! 3. on success adopt the server record, on failure restore the snapshot
//!
//! Create, edit and delete are not optimistic; the local list changes only
//! once the server has answered.

use chrono::{Datelike, Utc};
use featureboard_core::seed::initial_features;
use featureboard_core::{Feature, FeatureId, FeatureInput, RatingSubmission};
use tracing::{debug, info, warn};

use crate::api::FeatureApi;
use crate::error::{ClientError, ClientResult};
use crate::filter::{self, FilterState};
use crate::optimistic::{Mutation, Outcome, PendingMutation};
use crate::transport::Transport;
use crate::view::FeatureView;
use crate::voter::VoterRatings;

/// Where the current feature list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Loaded from the server
    Server,
    /// The server was unreachable; showing the built-in catalog
    Fallback,
}

/// Client-side feature state.
#[derive(Debug)]
pub struct FeatureBoard<T> {
    api: FeatureApi<T>,
    voter: VoterRatings,
    features: Vec<FeatureView>,
    selected: Option<FeatureId>,
    filters: FilterState,
    year: i32,
}

impl<T: Transport> FeatureBoard<T> {
    /// Create an empty board; call [`refresh`](Self::refresh) to load.
    pub fn new(transport: T, voter: VoterRatings) -> Self {
        Self {
            api: FeatureApi::new(transport),
            voter,
            features: Vec::new(),
            selected: None,
            filters: FilterState::default(),
            year: Utc::now().year(),
        }
    }

    /// Year assumed for "Month Day" dates when sorting.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// The transport in use
    pub fn transport(&self) -> &T {
        self.api.transport()
    }

    /// Reload the list from the server.
    ///
    /// If the server cannot be reached or refuses, the built-in catalog is
    /// shown instead and [`LoadSource::Fallback`] is returned.
    pub fn refresh(&mut self) -> ClientResult<LoadSource> {
        let (features, source) = match self.api.list() {
            Ok(features) => (features, LoadSource::Server),
            Err(e) => {
                warn!(error = %e, "Failed to load features, using built-in catalog");
                (initial_features(Utc::now()), LoadSource::Fallback)
            }
        };
        self.features = features
            .into_iter()
            .map(|f| self.view_of(f))
            .collect::<ClientResult<_>>()?;
        if let Some(id) = &self.selected {
            if self.position(id).is_none() {
                self.selected = None;
            }
        }
        info!(count = self.features.len(), source = ?source, "Features loaded");
        Ok(source)
    }

    /// All loaded features, in server order
    pub fn features(&self) -> &[FeatureView] {
        &self.features
    }

    /// Look up a loaded feature.
    pub fn get(&self, id: &FeatureId) -> Option<&FeatureView> {
        self.position(id).map(|i| &self.features[i])
    }

    /// Select a loaded feature.
    pub fn select(&mut self, id: &FeatureId) -> ClientResult<&FeatureView> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        self.selected = Some(id.clone());
        Ok(&self.features[index])
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected feature, if any
    pub fn selected(&self) -> Option<&FeatureView> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Current filters
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Mutable access to the filters
    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Features passing the filters, sorted chronologically.
    pub fn filtered(&self) -> Vec<FeatureView> {
        self.filters.apply(&self.features, self.year)
    }

    /// Months present in the loaded list, in calendar order.
    pub fn available_months(&self) -> Vec<chrono::Month> {
        filter::available_months(&self.features)
    }

    /// Distinct categories in the loaded list.
    pub fn available_categories(&self) -> Vec<String> {
        filter::available_categories(&self.features)
    }

    /// Distinct tags in the loaded list.
    pub fn available_tags(&self) -> Vec<String> {
        filter::available_tags(&self.features)
    }

    /// Create a feature; it is put first in the list.
    pub fn add(&mut self, input: &FeatureInput) -> ClientResult<FeatureView> {
        let created = self.api.create(input)?;
        let view = self.view_of(created)?;
        debug!(id = %view.id, "Feature added");
        self.features.insert(0, view.clone());
        Ok(view)
    }

    /// Edit a feature.
    pub fn update(&mut self, id: &FeatureId, input: &FeatureInput) -> ClientResult<FeatureView> {
        let updated = self.api.update(id, input)?;
        let view = self.view_of(updated)?;
        match self.position(id) {
            Some(i) => self.features[i] = view.clone(),
            None => self.features.insert(0, view.clone()),
        }
        Ok(view)
    }

    /// Delete a feature, clearing the selection if it was selected.
    pub fn delete(&mut self, id: &FeatureId) -> ClientResult<()> {
        self.api.delete(id)?;
        self.features.retain(|v| &v.id != id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.voter.forget(id)?;
        debug!(id = %id, "Feature deleted");
        Ok(())
    }

    /// Upvote optimistically.
    pub fn upvote(&mut self, id: &FeatureId) -> ClientResult<FeatureView> {
        self.mutate(id, Mutation::Upvote)
    }

    /// Submit or revise this voter's rating optimistically.
    ///
    /// The previous rating comes from voter memory, which is only updated
    /// once the server has accepted the new value.
    pub fn rate(&mut self, id: &FeatureId, rating: f64) -> ClientResult<FeatureView> {
        let previous = self.voter.get(id)?;
        let view = self.mutate(id, Mutation::Rate { rating, previous })?;
        self.voter.set(id, rating)?;
        Ok(view)
    }

    /// Flip the starred flag optimistically.
    pub fn toggle_star(&mut self, id: &FeatureId) -> ClientResult<FeatureView> {
        let starred = !self.get(id).ok_or_else(|| not_found(id))?.is_starred;
        self.mutate(id, Mutation::Star { starred })
    }

    /// Apply `mutation` locally and return the pending record.
    ///
    /// The board shows the predicted state until [`settle`](Self::settle)
    /// is called. Invalid mutations fail here without touching anything.
    pub fn begin(&mut self, id: &FeatureId, mutation: Mutation) -> ClientResult<PendingMutation> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let pending = PendingMutation::begin(&self.features[index], mutation)?;
        self.features[index] = pending.optimistic.clone();
        Ok(pending)
    }

    /// Resolve a pending mutation and store the result.
    ///
    /// If the feature has since left the list the result is returned but
    /// not stored.
    pub fn settle(&mut self, pending: &PendingMutation, outcome: &Outcome) -> FeatureView {
        let view = pending.settle(outcome);
        if let Some(i) = self.position(&pending.id) {
            self.features[i] = view.clone();
        }
        view
    }

    /// Send the request a pending mutation stands for.
    pub fn dispatch(&self, pending: &PendingMutation) -> ClientResult<Feature> {
        let id = &pending.id;
        match pending.mutation {
            Mutation::Upvote => self.api.upvote(id),
            Mutation::Rate { rating, previous } => self.api.rate(
                id,
                RatingSubmission {
                    rating,
                    previous_rating: previous,
                },
            ),
            Mutation::Star { starred } => self.api.star(id, starred),
        }
    }

    fn mutate(&mut self, id: &FeatureId, mutation: Mutation) -> ClientResult<FeatureView> {
        let pending = self.begin(id, mutation)?;
        match self.dispatch(&pending) {
            Ok(server) => {
                let view = self.settle(&pending, &Outcome::Confirmed(server));
                debug!(id = %id, mutation = mutation.name(), "Mutation confirmed");
                Ok(view)
            }
            Err(e) => {
                self.settle(&pending, &Outcome::Failed);
                warn!(id = %id, mutation = mutation.name(), error = %e, "Mutation failed, rolled back");
                Err(e)
            }
        }
    }

    fn view_of(&self, feature: Feature) -> ClientResult<FeatureView> {
        let user_rating = self.voter.get(&feature.id)?;
        Ok(FeatureView::new(feature, user_rating))
    }

    fn position(&self, id: &FeatureId) -> Option<usize> {
        self.features.iter().position(|v| &v.id == id)
    }
}

fn not_found(id: &FeatureId) -> ClientError {
    ClientError::NotFound { id: id.to_string() }
}
