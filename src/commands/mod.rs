//! CLI command implementations.
//!
//! Each command is a thin wrapper: load configuration, build the gateway
//! for the entity kind, perform one operation, print. Long-lived session
//! state (debounced search, modal flows) lives in [`crate::session`].

pub mod category;
pub mod config;
pub mod interactive;
pub mod product;

pub use category::{
    cmd_category_add, cmd_category_ls, cmd_category_rm, cmd_category_set, cmd_category_show,
};
pub use config::{cmd_config_set_debounce, cmd_config_set_url, cmd_config_show};
pub use product::{
    cmd_product_add, cmd_product_ls, cmd_product_rm, cmd_product_set, cmd_product_show,
    ProductFields,
};
