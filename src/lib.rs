//! Stockroom: a catalog administration client.
//!
//! Talks to a REST catalog backend serving products and categories. The
//! core is a generic list session per entity kind: load the collection,
//! filter it with debounced free-text search, and run create/edit/delete
//! flows that always reload the collection afterwards.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;
pub mod session;

pub use catalog::{CatalogEntity, Category, EntityDraft, Product};
pub use error::{Result, StockroomError};
pub use gateway::{CollectionGateway, HttpGateway};
pub use session::ListSession;
