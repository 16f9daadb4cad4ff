//! Generic list-management session.
//!
//! One session per entity kind: it loads the collection through a
//! [`CollectionGateway`], keeps a debounced search view over it, and runs
//! the create/edit modal and the delete confirmation flow. All state
//! transitions go through the pure reducer in [`model`]; this module's
//! [`ListSession`] is the async driver that performs the I/O and feeds
//! completion actions back in.

pub mod debounce;
pub mod filter;
pub mod model;
pub mod modal;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::catalog::CatalogEntity;
use crate::gateway::CollectionGateway;

pub use debounce::SearchDebouncer;
pub use filter::filter_collection;
pub use modal::{ModalMode, MutationModal};
pub use model::{reduce_session, ModalState, SessionAction, SessionState, SessionStatus};

/// Async driver for one entity kind's list session.
///
/// Owns the state, the gateway handle, the search debouncer, and the open
/// modal (if any). Every mutation path ends in an unconditional reload:
/// after a modal closes (cancel or successful submit) and after a
/// confirmed delete resolves successfully, the session re-enters Loading
/// and refetches the collection. A failed delete skips the reload and
/// surfaces inline instead.
///
/// Dropping the session cancels any pending debounce timer; in-flight
/// requests are awaited inline and never outlive a method call.
pub struct ListSession<E: CatalogEntity, G: CollectionGateway<E>> {
    state: SessionState<E>,
    gateway: Arc<G>,
    debouncer: SearchDebouncer,
    settled_rx: mpsc::UnboundedReceiver<String>,
    modal: Option<MutationModal<E>>,
}

impl<E: CatalogEntity, G: CollectionGateway<E>> ListSession<E, G> {
    pub fn new(gateway: Arc<G>, quiet_period: Duration) -> Self {
        let (debouncer, settled_rx) = SearchDebouncer::new(quiet_period);
        Self {
            state: SessionState::default(),
            gateway,
            debouncer,
            settled_rx,
            modal: None,
        }
    }

    pub fn state(&self) -> &SessionState<E> {
        &self.state
    }

    pub fn modal(&self) -> Option<&MutationModal<E>> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut MutationModal<E>> {
        self.modal.as_mut()
    }

    fn dispatch(&mut self, action: SessionAction<E>) {
        self.state = reduce_session(std::mem::take(&mut self.state), action);
    }

    /// Initial load on mount.
    pub async fn mount(&mut self) {
        self.reload().await;
    }

    /// Issue a full collection fetch and apply its outcome.
    ///
    /// The sequence number captured at issue time lets the reducer discard
    /// this completion if another load supersedes it.
    pub async fn reload(&mut self) {
        self.dispatch(SessionAction::LoadRequested);
        let seq = self.state.load_seq;

        let action = match self.gateway.list_all().await {
            Ok(collection) => SessionAction::LoadSucceeded { seq, collection },
            Err(e) => SessionAction::LoadFailed {
                seq,
                message: e.display_message(),
            },
        };
        self.dispatch(action);
    }

    /// Record a search keystroke and restart the debounce timer.
    ///
    /// Nothing else happens until the quiet period elapses; the filtered
    /// view is untouched by the raw keystroke.
    pub fn query_changed(&mut self, query: &str) {
        self.dispatch(SessionAction::QueryChanged(query.to_string()));
        self.debouncer.on_query_change(query.to_string());
    }

    /// Apply any settled queries that have already been delivered.
    ///
    /// Returns whether the filtered view was recomputed. Non-blocking;
    /// callers with an event loop poll this alongside their other sources.
    pub fn poll_settled(&mut self) -> bool {
        let mut applied = false;
        while let Ok(query) = self.settled_rx.try_recv() {
            self.dispatch(SessionAction::QuerySettled(query));
            applied = true;
        }
        applied
    }

    /// Wait for the pending debounce timer to settle, then apply it.
    ///
    /// Returns immediately when a settled value is already queued, and
    /// does nothing when no timer is pending.
    pub async fn wait_settled(&mut self) {
        if self.poll_settled() {
            return;
        }
        if !self.debouncer.is_pending() {
            return;
        }
        if let Some(query) = self.settled_rx.recv().await {
            self.dispatch(SessionAction::QuerySettled(query));
        }
    }

    /// Open the modal with an empty draft.
    pub fn open_create(&mut self) {
        self.dispatch(SessionAction::OpenCreateModal);
        self.modal = Some(MutationModal::for_create());
    }

    /// Open the modal for an existing entity, prefilling from a fresh
    /// fetch. Opens even when the fetch fails.
    pub async fn open_edit(&mut self, id: &str) {
        self.dispatch(SessionAction::OpenEditModal(id.to_string()));
        let gateway = Arc::clone(&self.gateway);
        let modal = MutationModal::for_edit(id.to_string(), gateway.as_ref()).await;
        self.modal = Some(modal);
    }

    /// Submit the open modal's draft. On success the modal closes and the
    /// session reloads; on failure the modal stays open, draft intact.
    pub async fn submit_modal(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        let gateway = Arc::clone(&self.gateway);
        if modal.submit(gateway.as_ref()).await {
            self.close_modal().await;
        }
    }

    /// Dismiss the open modal without submitting. Still reloads: the
    /// parent list never trusts its snapshot across a modal session.
    pub async fn cancel_modal(&mut self) {
        if self.modal.is_some() {
            self.close_modal().await;
        }
    }

    async fn close_modal(&mut self) {
        self.modal = None;
        self.dispatch(SessionAction::ModalClosed);
        self.reload().await;
    }

    /// Stage a delete for confirmation. No network traffic yet.
    pub fn request_delete(&mut self, id: &str) {
        self.dispatch(SessionAction::DeleteRequested(id.to_string()));
    }

    /// Decline the staged delete.
    pub fn cancel_delete(&mut self) {
        self.dispatch(SessionAction::DeleteCancelled);
    }

    /// Perform the staged delete. A success reloads the collection; a
    /// failure leaves it untouched with the error inline.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.state.pending_delete.clone() else {
            return;
        };
        self.dispatch(SessionAction::DeleteConfirmed);

        match self.gateway.remove(&id).await {
            Ok(()) => {
                self.dispatch(SessionAction::DeleteSucceeded);
                self.reload().await;
            }
            Err(e) => {
                self.dispatch(SessionAction::DeleteFailed(e.display_message()));
            }
        }
    }
}
