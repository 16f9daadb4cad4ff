//! Category commands.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::{Category, CategoryDraft, EntityDraft};
use crate::commands::interactive;
use crate::config::Config;
use crate::error::{Result, StockroomError};
use crate::gateway::{CollectionGateway, HttpGateway, PayloadMode};
use crate::session::filter_collection;

/// A row in the category list table
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// List all categories, optionally filtered by a search query
pub async fn cmd_category_ls(search: Option<&str>) -> Result<()> {
    let gateway = HttpGateway::<Category>::from_config(&Config::load()?)?;
    let categories = gateway.list_all().await?;

    let visible = match search {
        Some(query) => filter_collection(&categories, query),
        None => categories,
    };

    if visible.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    let rows: Vec<CategoryRow> = visible
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} category(ies)", visible.len());
    Ok(())
}

/// Display a single category
pub async fn cmd_category_show(id: &str) -> Result<()> {
    let gateway = HttpGateway::<Category>::from_config(&Config::load()?)?;
    let category = gateway.get_one(id).await?;

    println!("{} {}", category.id.dimmed(), category.name.bold());
    if !category.description.is_empty() {
        println!("\n{}", category.description);
    }
    Ok(())
}

/// Create a new category
pub async fn cmd_category_add(name: &str, description: &str) -> Result<()> {
    let draft = CategoryDraft {
        name: name.to_string(),
        description: description.to_string(),
    };
    if let Some(field) = draft.missing_required() {
        return Err(StockroomError::Validation(format!("{field} is required")));
    }

    let gateway = HttpGateway::<Category>::from_config(&Config::load()?)?;
    let created = gateway.create(draft.to_payload(PayloadMode::Create)).await?;

    match created {
        Some(category) => println!("Created category {} ({})", category.name.bold(), category.id),
        None => println!("Category created."),
    }
    Ok(())
}

/// Update an existing category, changing only the given fields
pub async fn cmd_category_set(
    id: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let gateway = HttpGateway::<Category>::from_config(&Config::load()?)?;
    let current = gateway.get_one(id).await?;

    let mut draft = CategoryDraft::seed(&current);
    if let Some(name) = name {
        draft.name = name.to_string();
    }
    if let Some(description) = description {
        draft.description = description.to_string();
    }

    if let Some(field) = draft.missing_required() {
        return Err(StockroomError::Validation(format!("{field} is required")));
    }

    gateway
        .update(id, draft.to_payload(PayloadMode::Update))
        .await?;
    println!("Updated category {}", id);
    Ok(())
}

/// Delete a category after confirmation
pub async fn cmd_category_rm(id: &str, force: bool) -> Result<()> {
    if !force {
        if !interactive::is_stdin_tty() {
            return Err(StockroomError::Validation(
                "Category deletion requires --force in non-interactive contexts.".to_string(),
            ));
        }
        if !interactive::confirm(&format!("Delete category {}", id))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let gateway = HttpGateway::<Category>::from_config(&Config::load()?)?;
    gateway.remove(id).await?;
    println!("Deleted category {}", id);
    Ok(())
}
