//! CLI command implementations

use std::path::PathBuf;
use std::sync::Arc;

use clap::Subcommand;
use marquee_core::catalog::{CatalogStore, Category};
use marquee_core::config::MarqueeConfig;
use marquee_core::resolver::ContentResolver;
use marquee_core::{MarqueeError, Result};
use marquee_search::CatalogSearch;
use marquee_web::run_server;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// JSON catalog file (uses the built-in demo catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// List catalog entries
    List {
        /// Restrict to one category (movie, series, documentary)
        #[arg(long)]
        category: Option<Category>,
        /// JSON catalog file (uses the built-in demo catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Search the catalog by title
    Search {
        /// Search query
        query: String,
        /// JSON catalog file (uses the built-in demo catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show one catalog entry by id
    Show {
        /// Content id
        id: String,
        /// JSON catalog file (uses the built-in demo catalog if omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Server {
            host,
            port,
            catalog,
        } => start_server(host, port, catalog).await,
        Commands::List { category, catalog } => list_catalog(category, catalog),
        Commands::Search { query, catalog } => search_catalog(&query, catalog),
        Commands::Show { id, catalog } => show_item(&id, catalog),
    }
}

/// Start the web server
///
/// # Errors
/// - `MarqueeError::Catalog` - Catalog file invalid or inconsistent
/// - `MarqueeError::WebUI` - Server failed to bind or run
async fn start_server(host: String, port: u16, catalog: Option<PathBuf>) -> Result<()> {
    let mut config = MarqueeConfig::from_env();
    config.server.host = host;
    config.server.port = port;
    if catalog.is_some() {
        config.catalog.source_path = catalog;
    }

    run_server(config)
        .await
        .map_err(MarqueeError::from_web_ui_error)
}

fn load_catalog(catalog: Option<PathBuf>) -> Result<CatalogStore> {
    let mut config = MarqueeConfig::from_env();
    if catalog.is_some() {
        config.catalog.source_path = catalog;
    }

    let store = match config.catalog.source_path {
        Some(path) => CatalogStore::from_json_file(&path)?,
        None => CatalogStore::demo(),
    };
    Ok(store)
}

/// List catalog entries, optionally restricted to one category
fn list_catalog(category: Option<Category>, catalog: Option<PathBuf>) -> Result<()> {
    let store = load_catalog(catalog)?;

    match category {
        Some(category) => {
            for item in store.by_category(category) {
                println!("{}  {}  [{}]", item.id, item.title, item.category);
            }
        }
        None => {
            for item in store.all() {
                println!("{}  {}  [{}]", item.id, item.title, item.category);
            }
        }
    }

    Ok(())
}

/// Print titles matching a query
fn search_catalog(query: &str, catalog: Option<PathBuf>) -> Result<()> {
    let store = Arc::new(load_catalog(catalog)?);
    let search = CatalogSearch::new(store);

    let mut matched = 0;
    for item in search.search(query) {
        println!("{}  {}  [{}]", item.id, item.title, item.category);
        matched += 1;
    }

    if matched == 0 {
        println!("No titles match '{query}'");
    }

    Ok(())
}

/// Print one record by id; an unknown id is a normal outcome, not a
/// process error
fn show_item(id: &str, catalog: Option<PathBuf>) -> Result<()> {
    let store = Arc::new(load_catalog(catalog)?);
    let resolver = ContentResolver::new(store);

    match resolver.resolve(id) {
        Some(item) => {
            println!("id:        {}", item.id);
            println!("title:     {}", item.title);
            println!("category:  {}", item.category);
            println!("thumbnail: {}", item.thumbnail_url);
            println!("media:     {}", item.media_url);
        }
        None => println!("No catalog entry with id '{id}'"),
    }

    Ok(())
}
