//! Generic resource slice: one cached collection plus its request bookkeeping.
//!
//! Every asynchronous action goes through three phases. `Pending` is applied
//! when the request is dispatched; exactly one of the settlement intents
//! (`Fetched`, `Created`, `Updated`, `Deleted`, `Rejected`) is applied when it
//! completes. Settlements carry the epoch that was current at dispatch and are
//! ignored once the slice has been invalidated since.

use std::marker::PhantomData;

use crate::api::{ApiError, Entity, Resource};
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Request generation counter of a slice.
pub type Epoch = u64;

/// The four operations every resource slice supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOp {
    Fetch,
    Create,
    Update,
    Delete,
}

impl CrudOp {
    pub fn verb(self) -> &'static str {
        match self {
            CrudOp::Fetch => "fetch",
            CrudOp::Create => "add",
            CrudOp::Update => "update",
            CrudOp::Delete => "delete",
        }
    }

    /// Message stored when the server gives none, e.g. `Failed to fetch rooms`.
    pub fn fallback_message<R: Resource>(self) -> String {
        match self {
            CrudOp::Fetch => format!("Failed to fetch {}", R::COLLECTION),
            other => format!("Failed to {} {}", other.verb(), R::SINGULAR),
        }
    }
}

/// Error slot text for a failed request: the server's message, else the fallback.
pub fn rejection_message<R: Resource>(op: CrudOp, err: &ApiError) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| op.fallback_message::<R>())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    items: Vec<T>,
    in_flight: u32,
    error: Option<String>,
    epoch: Epoch,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            in_flight: 0,
            error: None,
            epoch: 0,
        }
    }
}

impl<T: Entity> UiState for ResourceState<T> {}

impl<T: Entity> ResourceState<T> {
    /// State holding `items` with nothing in flight.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True while at least one request of this slice is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Epoch to tag newly dispatched requests with.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliceIntent<T> {
    /// A request was dispatched.
    Pending { op: CrudOp },
    /// List request fulfilled: replace the collection.
    Fetched { epoch: Epoch, items: Vec<T> },
    /// Create fulfilled: append what the server echoed.
    Created { epoch: Epoch, items: Vec<T> },
    /// Update fulfilled: replace the element with the same identifier.
    Updated { epoch: Epoch, item: T },
    /// Delete fulfilled: drop the identifier.
    Deleted { epoch: Epoch, id: String },
    /// Any request rejected.
    Rejected {
        epoch: Epoch,
        op: CrudOp,
        message: String,
    },
    /// Banner dismissed. Does not retry anything.
    ClearError,
    /// Owner went away: bump the epoch so late settlements are dropped.
    Invalidate,
}

impl<T: Entity> Intent for SliceIntent<T> {}

impl<T> SliceIntent<T> {
    /// Epoch of a settlement, `None` for intents that are not settlements.
    pub fn settlement_epoch(&self) -> Option<Epoch> {
        match self {
            SliceIntent::Fetched { epoch, .. }
            | SliceIntent::Created { epoch, .. }
            | SliceIntent::Updated { epoch, .. }
            | SliceIntent::Deleted { epoch, .. }
            | SliceIntent::Rejected { epoch, .. } => Some(*epoch),
            SliceIntent::Pending { .. } | SliceIntent::ClearError | SliceIntent::Invalidate => {
                None
            }
        }
    }

    /// Operation a settlement belongs to.
    pub fn settled_op(&self) -> Option<CrudOp> {
        match self {
            SliceIntent::Fetched { .. } => Some(CrudOp::Fetch),
            SliceIntent::Created { .. } => Some(CrudOp::Create),
            SliceIntent::Updated { .. } => Some(CrudOp::Update),
            SliceIntent::Deleted { .. } => Some(CrudOp::Delete),
            SliceIntent::Rejected { op, .. } => Some(*op),
            SliceIntent::Pending { .. } | SliceIntent::ClearError | SliceIntent::Invalidate => {
                None
            }
        }
    }
}

pub struct SliceReducer<T>(PhantomData<T>);

impl<T: Entity> Reducer for SliceReducer<T> {
    type State = ResourceState<T>;
    type Intent = SliceIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if let Some(epoch) = intent.settlement_epoch() {
            if epoch != state.epoch {
                return state;
            }
        }

        match intent {
            SliceIntent::Pending { .. } => {
                state.in_flight = state.in_flight.saturating_add(1);
                state.error = None;
            }
            SliceIntent::Fetched { items, .. } => {
                state.settle();
                state.items = items;
                state.error = None;
            }
            SliceIntent::Created { items, .. } => {
                state.settle();
                state.items.extend(items);
            }
            SliceIntent::Updated { item, .. } => {
                state.settle();
                if let Some(slot) = state.items.iter_mut().find(|e| e.id() == item.id()) {
                    *slot = item;
                }
            }
            SliceIntent::Deleted { id, .. } => {
                state.settle();
                state.items.retain(|e| e.id() != id);
            }
            SliceIntent::Rejected { message, .. } => {
                state.settle();
                state.error = Some(message);
            }
            SliceIntent::ClearError => {
                state.error = None;
            }
            SliceIntent::Invalidate => {
                state.epoch = state.epoch.wrapping_add(1);
                state.in_flight = 0;
            }
        }
        state
    }
}
