//! Product commands.

use std::path::Path;

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::catalog::{EntityDraft, ImageField, Product, ProductDraft};
use crate::commands::interactive;
use crate::config::Config;
use crate::error::{Result, StockroomError};
use crate::gateway::{CollectionGateway, HttpGateway, PayloadMode};
use crate::session::filter_collection;

/// A row in the product list table
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Stock")]
    stock: u32,
}

/// Optional field overrides shared by `add` and `set`.
#[derive(Debug, Default)]
pub struct ProductFields {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<std::path::PathBuf>,
    pub stock: Option<String>,
    pub remove_image: bool,
}

/// List all products, optionally filtered by a search query
pub async fn cmd_product_ls(search: Option<&str>) -> Result<()> {
    let gateway = HttpGateway::<Product>::from_config(&Config::load()?)?;
    let products = gateway.list_all().await?;

    let visible = match search {
        Some(query) => filter_collection(&products, query),
        None => products,
    };

    if visible.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    let rows: Vec<ProductRow> = visible
        .iter()
        .map(|p| ProductRow {
            id: p.id.clone(),
            name: p.name.clone(),
            price: format!("{:.2}", p.price),
            category: p.category_name().to_string(),
            stock: p.stock,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} product(s)", visible.len());
    Ok(())
}

/// Display a single product
pub async fn cmd_product_show(id: &str) -> Result<()> {
    let gateway = HttpGateway::<Product>::from_config(&Config::load()?)?;
    let product = gateway.get_one(id).await?;

    println!("{} {}", product.id.dimmed(), product.name.bold());
    println!("Price:       {:.2}", product.price);
    println!("Category:    {}", product.category_name());
    println!("Stock:       {}", product.stock);
    if let Some(image) = &product.image {
        println!("Image:       {}", image);
    }
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }
    Ok(())
}

/// Create a new product
pub async fn cmd_product_add(fields: ProductFields) -> Result<()> {
    let image = match &fields.image {
        Some(path) => load_image(path).await?,
        None => ImageField::Keep,
    };

    let draft = ProductDraft {
        name: fields.name.unwrap_or_default(),
        price: fields.price.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        category: fields.category.unwrap_or_default(),
        image,
        stock: fields.stock.unwrap_or_default(),
    };

    if let Some(field) = draft.missing_required() {
        return Err(StockroomError::Validation(format!("{field} is required")));
    }

    let gateway = HttpGateway::<Product>::from_config(&Config::load()?)?;
    let created = gateway.create(draft.to_payload(PayloadMode::Create)).await?;

    match created {
        Some(product) => println!("Created product {} ({})", product.name.bold(), product.id),
        None => println!("Product created."),
    }
    Ok(())
}

/// Update an existing product, changing only the given fields
pub async fn cmd_product_set(id: &str, fields: ProductFields) -> Result<()> {
    let gateway = HttpGateway::<Product>::from_config(&Config::load()?)?;
    let current = gateway.get_one(id).await?;

    let mut draft = ProductDraft::seed(&current);
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(price) = fields.price {
        draft.price = price;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(category) = fields.category {
        draft.category = category;
    }
    if let Some(stock) = fields.stock {
        draft.stock = stock;
    }
    if let Some(path) = &fields.image {
        draft.image = load_image(path).await?;
    } else if fields.remove_image {
        draft.image = ImageField::Remove;
    }

    if let Some(field) = draft.missing_required() {
        return Err(StockroomError::Validation(format!("{field} is required")));
    }

    gateway
        .update(id, draft.to_payload(PayloadMode::Update))
        .await?;
    println!("Updated product {}", id);
    Ok(())
}

/// Delete a product after confirmation
pub async fn cmd_product_rm(id: &str, force: bool) -> Result<()> {
    if !force {
        if !interactive::is_stdin_tty() {
            return Err(StockroomError::Validation(
                "Product deletion requires --force in non-interactive contexts.".to_string(),
            ));
        }
        if !interactive::confirm(&format!("Delete product {}", id))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let gateway = HttpGateway::<Product>::from_config(&Config::load()?)?;
    gateway.remove(id).await?;
    println!("Deleted product {}", id);
    Ok(())
}

/// Read an image file into an upload field, inferring the MIME type from
/// the extension.
async fn load_image(path: &Path) -> Result<ImageField> {
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content_type = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };

    Ok(ImageField::Upload {
        filename,
        content_type: content_type.to_string(),
        bytes,
    })
}
