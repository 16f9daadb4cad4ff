//! Create/edit modal sub-session.
//!
//! The modal owns its own draft, submit flag, and error, fully isolated
//! from the parent list state. The parent learns nothing of intermediate
//! edits; it only reloads once the modal closes.

use crate::catalog::{CatalogEntity, EntityDraft};
use crate::error::StockroomError;
use crate::gateway::{CollectionGateway, PayloadMode};

/// What the modal does on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    /// Edit the entity bound at open time. Submit routes by this id even
    /// when the prefill fetch failed.
    Edit(String),
}

/// One open create/edit modal.
#[derive(Debug, Clone)]
pub struct MutationModal<E: CatalogEntity> {
    mode: ModalMode,
    draft: E::Draft,
    submitting: bool,
    error: Option<String>,
}

impl<E: CatalogEntity> MutationModal<E> {
    /// Open with an empty draft.
    pub fn for_create() -> Self {
        Self {
            mode: ModalMode::Create,
            draft: E::Draft::default(),
            submitting: false,
            error: None,
        }
    }

    /// Open for an existing entity, prefilling the draft from a fresh
    /// fetch.
    ///
    /// A failed fetch still opens the modal: the draft stays empty and the
    /// fetch error shows inline. The id binding is fixed either way.
    pub async fn for_edit<G>(id: String, gateway: &G) -> Self
    where
        G: CollectionGateway<E> + ?Sized,
    {
        let (draft, error) = match gateway.get_one(&id).await {
            Ok(entity) => (E::Draft::seed(&entity), None),
            Err(e) => {
                tracing::warn!("prefill fetch for {} '{id}' failed: {e}", E::KIND_SINGULAR);
                (E::Draft::default(), Some(e.display_message()))
            }
        };
        Self {
            mode: ModalMode::Edit(id),
            draft,
            submitting: false,
            error,
        }
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace the draft wholesale with an edited copy.
    pub fn set_draft(&mut self, draft: E::Draft) {
        self.draft = draft;
    }

    /// Submit the draft. Returns `true` when the write succeeded and the
    /// modal should close; on any failure the modal stays open with the
    /// draft intact and the error set.
    pub async fn submit<G>(&mut self, gateway: &G) -> bool
    where
        G: CollectionGateway<E> + ?Sized,
    {
        // Presence check before any network traffic.
        if let Some(field) = self.draft.missing_required() {
            self.error = Some(format!("{field} is required"));
            return false;
        }

        self.submitting = true;
        self.error = None;

        let result = match &self.mode {
            ModalMode::Create => {
                let payload = self.draft.to_payload(PayloadMode::Create);
                gateway.create(payload).await.map(|_| ())
            }
            ModalMode::Edit(id) => {
                let payload = self.draft.to_payload(PayloadMode::Update);
                gateway.update(id, payload).await.map(|_| ())
            }
        };

        self.submitting = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                if !matches!(e, StockroomError::Validation(_)) {
                    tracing::warn!("{} submit failed: {e}", E::KIND_SINGULAR);
                }
                self.error = Some(e.display_message());
                false
            }
        }
    }
}
