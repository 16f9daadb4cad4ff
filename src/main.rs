use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use stockroom::commands::{
    cmd_category_add, cmd_category_ls, cmd_category_rm, cmd_category_set, cmd_category_show,
    cmd_config_set_debounce, cmd_config_set_url, cmd_config_show, cmd_product_add, cmd_product_ls,
    cmd_product_rm, cmd_product_set, cmd_product_show, ProductFields,
};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Catalog administration over a REST backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage products
    #[command(visible_alias = "p")]
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Manage categories
    #[command(visible_alias = "c")]
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    Ls {
        /// Filter by name or category (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Display a single product
    Show {
        /// Product ID
        id: String,
    },
    /// Create a product
    Add {
        /// Product name
        name: String,

        /// Price
        #[arg(short, long)]
        price: String,

        /// Description text
        #[arg(short, long)]
        description: String,

        /// Category ID
        #[arg(short, long)]
        category: String,

        /// Stock count
        #[arg(short, long)]
        stock: String,

        /// Path to an image file to upload
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Update fields of a product
    Set {
        /// Product ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New category ID
        #[arg(long)]
        category: Option<String>,

        /// New stock count
        #[arg(long)]
        stock: Option<String>,

        /// Path to a replacement image file
        #[arg(long)]
        image: Option<PathBuf>,

        /// Remove the stored image
        #[arg(long, conflicts_with = "image")]
        remove_image: bool,
    },
    /// Delete a product
    Rm {
        /// Product ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories
    Ls {
        /// Filter by name (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Display a single category
    Show {
        /// Category ID
        id: String,
    },
    /// Create a category
    Add {
        /// Category name
        name: String,

        /// Description text
        #[arg(short, long)]
        description: String,
    },
    /// Update fields of a category
    Set {
        /// Category ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a category
    Rm {
        /// Category ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the backend base URL
    SetUrl {
        /// Base URL, e.g. http://localhost:3000
        url: String,
    },
    /// Set the search debounce quiet period in milliseconds
    SetDebounce {
        /// Quiet period in milliseconds
        ms: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Product { action } => match action {
            ProductAction::Ls { search } => cmd_product_ls(search.as_deref()).await,
            ProductAction::Show { id } => cmd_product_show(&id).await,
            ProductAction::Add {
                name,
                price,
                description,
                category,
                stock,
                image,
            } => {
                cmd_product_add(ProductFields {
                    name: Some(name),
                    price: Some(price),
                    description: Some(description),
                    category: Some(category),
                    image,
                    stock: Some(stock),
                    remove_image: false,
                })
                .await
            }
            ProductAction::Set {
                id,
                name,
                price,
                description,
                category,
                stock,
                image,
                remove_image,
            } => {
                cmd_product_set(
                    &id,
                    ProductFields {
                        name,
                        price,
                        description,
                        category,
                        image,
                        stock,
                        remove_image,
                    },
                )
                .await
            }
            ProductAction::Rm { id, force } => cmd_product_rm(&id, force).await,
        },

        Commands::Category { action } => match action {
            CategoryAction::Ls { search } => cmd_category_ls(search.as_deref()).await,
            CategoryAction::Show { id } => cmd_category_show(&id).await,
            CategoryAction::Add { name, description } => {
                cmd_category_add(&name, &description).await
            }
            CategoryAction::Set {
                id,
                name,
                description,
            } => cmd_category_set(&id, name.as_deref(), description.as_deref()).await,
            CategoryAction::Rm { id, force } => cmd_category_rm(&id, force).await,
        },

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::SetUrl { url } => cmd_config_set_url(&url),
            ConfigAction::SetDebounce { ms } => cmd_config_set_debounce(ms),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
