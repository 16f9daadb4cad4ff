//! List session model types for testable state management.
//!
//! This module separates state (`SessionState`) from the async driver
//! (`ListSession`), enabling unit testing of every transition without a
//! network or a runtime. `reduce_session` is a pure function; async I/O
//! is handled by the driver, which feeds completion actions back in.

use crate::catalog::CatalogEntity;

use super::filter::filter_collection;

/// Lifecycle of one list session.
///
/// `Ready` and `Error` are mutually exclusive with `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Visibility of the create/edit modal.
///
/// Closed at mount; opens only on explicit action; returns to Closed only
/// via cancel or successful submit, at which point the session reloads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    OpenForCreate,
    OpenForEdit(String),
}

/// Raw state owned by one list session.
#[derive(Debug, Clone)]
pub struct SessionState<E> {
    /// Full, unfiltered snapshot of the collection.
    pub collection: Vec<E>,
    /// Live search input, updated on every keystroke.
    pub query: String,
    /// Last query that survived the debounce quiet period.
    pub settled_query: String,
    /// Derived view, always `filter(collection, settled_query)`.
    pub filtered: Vec<E>,
    /// Session lifecycle state.
    pub status: SessionStatus,
    /// Inline error shown next to the list, if any.
    pub error: Option<String>,
    /// Create/edit modal visibility.
    pub modal: ModalState,
    /// Entity id awaiting explicit delete confirmation.
    pub pending_delete: Option<String>,
    /// Whether any load ever succeeded. A failed first load shows an
    /// empty list; later failures keep the stale snapshot visible.
    pub loaded_once: bool,
    /// Monotonic sequence of issued loads; completions carrying an older
    /// sequence are stale and discarded.
    pub load_seq: u64,
}

impl<E> Default for SessionState<E> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            query: String::new(),
            settled_query: String::new(),
            filtered: Vec::new(),
            status: SessionStatus::Idle,
            error: None,
            modal: ModalState::Closed,
            pending_delete: None,
            loaded_once: false,
            load_seq: 0,
        }
    }
}

impl<E> SessionState<E> {
    /// Whether the list area should show its empty placeholder.
    pub fn is_empty_view(&self) -> bool {
        self.status == SessionStatus::Ready && self.filtered.is_empty()
    }
}

/// All actions on a list session.
///
/// Completion actions (`LoadSucceeded`, `LoadFailed`, `DeleteSucceeded`,
/// `DeleteFailed`) are produced by the driver when async work resolves.
#[derive(Debug, Clone)]
pub enum SessionAction<E> {
    /// A load was issued; enters Loading and advances the load sequence.
    LoadRequested,
    /// A load resolved with a fresh collection snapshot.
    LoadSucceeded { seq: u64, collection: Vec<E> },
    /// A load resolved with an error.
    LoadFailed { seq: u64, message: String },

    /// Live search input changed; no transition, no network.
    QueryChanged(String),
    /// The debounce quiet period elapsed; recompute the filtered view.
    QuerySettled(String),

    /// Open the modal with an empty draft.
    OpenCreateModal,
    /// Open the modal for an existing entity.
    OpenEditModal(String),
    /// The modal closed, by cancel or successful submit. The driver
    /// unconditionally issues a reload afterwards.
    ModalClosed,

    /// Ask for delete confirmation for an entity.
    DeleteRequested(String),
    /// Confirmation declined.
    DeleteCancelled,
    /// Confirmation accepted; the delete request is now in flight.
    DeleteConfirmed,
    /// The delete resolved; the driver issues a reload afterwards.
    DeleteSucceeded,
    /// The delete failed. Collection state is untouched and no reload
    /// follows; the error shows inline.
    DeleteFailed(String),
}

/// Pure function: apply an action to session state.
///
/// Contains only state transitions. Network calls, debounce timers, and
/// modal construction live in the driver.
pub fn reduce_session<E: CatalogEntity>(
    mut state: SessionState<E>,
    action: SessionAction<E>,
) -> SessionState<E> {
    match action {
        SessionAction::LoadRequested => {
            state.load_seq += 1;
            state.status = SessionStatus::Loading;
            state.error = None;
        }

        SessionAction::LoadSucceeded { seq, collection } => {
            if seq != state.load_seq {
                // A newer load superseded this response.
                tracing::debug!("discarding stale load result (seq {seq})");
                return state;
            }
            state.filtered = filter_collection(&collection, &state.settled_query);
            state.collection = collection;
            state.loaded_once = true;
            state.status = SessionStatus::Ready;
            state.error = None;
        }

        SessionAction::LoadFailed { seq, message } => {
            if seq != state.load_seq {
                tracing::debug!("discarding stale load failure (seq {seq})");
                return state;
            }
            state.status = SessionStatus::Error;
            state.error = Some(message);
            // Keep the last good snapshot visible alongside the error;
            // only a session that never loaded shows an empty list.
            if !state.loaded_once {
                state.collection.clear();
                state.filtered.clear();
            }
        }

        SessionAction::QueryChanged(query) => {
            state.query = query;
        }

        SessionAction::QuerySettled(query) => {
            state.filtered = filter_collection(&state.collection, &query);
            state.settled_query = query;
        }

        SessionAction::OpenCreateModal => {
            state.modal = ModalState::OpenForCreate;
        }

        SessionAction::OpenEditModal(id) => {
            state.modal = ModalState::OpenForEdit(id);
        }

        SessionAction::ModalClosed => {
            state.modal = ModalState::Closed;
        }

        SessionAction::DeleteRequested(id) => {
            state.pending_delete = Some(id);
        }

        SessionAction::DeleteCancelled => {
            state.pending_delete = None;
        }

        SessionAction::DeleteConfirmed => {
            state.pending_delete = None;
            state.error = None;
        }

        SessionAction::DeleteSucceeded => {}

        SessionAction::DeleteFailed(message) => {
            state.error = Some(message);
        }
    }

    state
}
