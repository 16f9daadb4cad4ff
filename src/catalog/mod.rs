//! Catalog entity types.
//!
//! A catalog entity is one record (product or category) as returned by the
//! backend. The [`CatalogEntity`] trait is the seam that lets one list
//! controller serve both kinds: it names the REST resource, exposes the
//! stable id and display name, and selects the searchable fields.

use serde::{Deserialize, Deserializer, Serialize};

use crate::gateway::{EntityPayload, PayloadMode};

/// Label shown for products without an embedded category reference.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One catalog record as returned by the backend.
///
/// Implementors also carry the draft type their create/edit form works on.
pub trait CatalogEntity:
    Clone + Send + Sync + serde::de::DeserializeOwned + std::fmt::Debug + 'static
{
    /// Resource path segment and list-envelope key, e.g. `products`.
    const KIND: &'static str;
    /// Singular envelope key used by the get-one response, e.g. `product`.
    const KIND_SINGULAR: &'static str;
    /// Path segment appended to the resource root by the create verb.
    /// The backend routes product creation at the collection root but
    /// category creation at an explicit `create` path.
    const CREATE_SEGMENT: &'static str = "create";

    /// Draft record edited by this entity's mutation modal.
    type Draft: EntityDraft<Entity = Self>;

    /// Stable, server-assigned identifier.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Ordered searchable fields. Absent fields yield `None` and never
    /// match, they are not an error.
    fn search_fields(&self) -> [Option<&str>; 2];
}

/// Draft form state for one mutation modal.
///
/// The draft is one cohesive value: field edits replace the whole record
/// rather than mutating siblings in place, which keeps the prefilled vs.
/// dirty distinction explicit.
pub trait EntityDraft: Clone + Default + Send + std::fmt::Debug + 'static {
    type Entity;

    /// Seed a draft from a fetched entity (edit prefill).
    fn seed(entity: &Self::Entity) -> Self;

    /// Presence-only required-field check. Returns the first missing field
    /// name; cross-field business validation is the backend's job.
    fn missing_required(&self) -> Option<&'static str>;

    /// Convert to the wire payload. `mode` matters only for fields whose
    /// omitted-vs-explicitly-empty distinction is meaningful on update.
    fn to_payload(&self, mode: PayloadMode) -> EntityPayload;
}

/// Embedded category reference carried by products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

/// A product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Category name for display, defaulting when no reference is embedded.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }
}

impl CatalogEntity for Product {
    const KIND: &'static str = "products";
    const KIND_SINGULAR: &'static str = "product";
    const CREATE_SEGMENT: &'static str = "";

    type Draft = ProductDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> [Option<&str>; 2] {
        [
            Some(self.name.as_str()),
            self.category.as_ref().map(|c| c.name.as_str()),
        ]
    }
}

/// A category record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntity for Category {
    const KIND: &'static str = "categories";
    const KIND_SINGULAR: &'static str = "category";

    type Draft = CategoryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> [Option<&str>; 2] {
        [Some(self.name.as_str()), None]
    }
}

/// Pending state of a product's image field within a draft.
///
/// `Keep` means the field is omitted from the payload (no change on
/// update); `Upload` sends binary multipart content; `Remove` sends an
/// explicit empty value on update so the backend clears the stored image.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImageField {
    #[default]
    Keep,
    Upload {
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    Remove,
}

/// Draft form state for a product.
///
/// Numeric fields are kept as entered text; parsing and range checks are
/// delegated to the backend along with the rest of business validation.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    /// Selected category id, empty when none chosen.
    pub category: String,
    pub image: ImageField,
    pub stock: String,
}

impl EntityDraft for ProductDraft {
    type Entity = Product;

    fn seed(entity: &Product) -> Self {
        Self {
            name: entity.name.clone(),
            price: entity.price.to_string(),
            description: entity.description.clone(),
            category: entity
                .category
                .as_ref()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            image: ImageField::Keep,
            stock: entity.stock.to_string(),
        }
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.price.trim().is_empty() {
            return Some("price");
        }
        if self.description.trim().is_empty() {
            return Some("description");
        }
        if self.category.trim().is_empty() {
            return Some("category");
        }
        if self.stock.trim().is_empty() {
            return Some("stock");
        }
        None
    }

    fn to_payload(&self, mode: PayloadMode) -> EntityPayload {
        let mut payload = EntityPayload::new()
            .text("name", &self.name)
            .text("price", &self.price)
            .text("description", &self.description)
            .text("category", &self.category)
            .text("stock", &self.stock);

        match &self.image {
            ImageField::Keep => {}
            ImageField::Upload {
                filename,
                content_type,
                bytes,
            } => {
                payload = payload.file("image", filename, content_type, bytes.clone());
            }
            ImageField::Remove => {
                // Only meaningful against an existing record; a created
                // product simply never had an image to clear.
                if mode == PayloadMode::Update {
                    payload = payload.clear("image");
                }
            }
        }

        payload
    }
}

/// Draft form state for a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl EntityDraft for CategoryDraft {
    type Entity = Category;

    fn seed(entity: &Category) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone(),
        }
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.description.trim().is_empty() {
            return Some("description");
        }
        None
    }

    fn to_payload(&self, _mode: PayloadMode) -> EntityPayload {
        EntityPayload::new()
            .text("name", &self.name)
            .text("description", &self.description)
    }
}

/// Accept both string ids and numeric ids, normalizing to `String`.
///
/// The backend serves Mongo-style `_id` strings for categories but plain
/// numeric ids for products.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
