//! Remote collection gateway.
//!
//! Wraps the backend's CRUD contract for one entity kind. The gateway does
//! request/response marshaling and error normalization only: no caching,
//! no retries, no success-shape branching above this boundary.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpGateway;

/// Whether a payload targets the create or the update verb.
///
/// The distinction matters for fields where "omitted" and "explicitly
/// empty" mean different things, such as clearing a stored image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    Create,
    Update,
}

/// One field value within an [`EntityPayload`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain form field.
    Text(String),
    /// Binary upload, sent as a multipart part with a filename.
    File {
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    /// Explicit empty value, signaling removal of a stored value.
    Clear,
}

/// Ordered field map sent to the create/update verbs.
///
/// Empty text values are dropped at insertion time rather than sent as
/// empty form fields; [`FieldValue::Clear`] is the one deliberate
/// exception, carrying an explicit empty value onto the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityPayload {
    fields: Vec<(String, FieldValue)>,
}

impl EntityPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field, omitting it entirely when the value is empty.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.fields
                .push((name.to_string(), FieldValue::Text(value.to_string())));
        }
        self
    }

    /// Append a binary upload field.
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        self.fields.push((
            name.to_string(),
            FieldValue::File {
                filename: filename.to_string(),
                content_type: content_type.to_string(),
                bytes,
            },
        ));
        self
    }

    /// Append an explicit empty value for `name`.
    pub fn clear(mut self, name: &str) -> Self {
        self.fields.push((name.to_string(), FieldValue::Clear));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// Common interface to the backend's CRUD verbs for one entity kind.
///
/// Implementations normalize every failure into the crate error taxonomy
/// so that callers never branch on transport status codes.
#[async_trait]
pub trait CollectionGateway<E>: Send + Sync {
    /// Read the full collection. A response lacking the expected envelope
    /// key resolves to an empty collection rather than an error.
    async fn list_all(&self) -> Result<Vec<E>>;

    /// Fetch a single record by id.
    async fn get_one(&self, id: &str) -> Result<E>;

    /// Create a record. Returns the created entity when the backend's
    /// response body carries one.
    async fn create(&self, payload: EntityPayload) -> Result<Option<E>>;

    /// Update a record by id. Same payload rules as create.
    async fn update(&self, id: &str, payload: EntityPayload) -> Result<Option<E>>;

    /// Delete a record by id.
    async fn remove(&self, id: &str) -> Result<()>;
}
