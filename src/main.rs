use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use mealdb_browser::render::{render_detail, render_filters, render_summaries};
use mealdb_browser::shell::run_shell;
use mealdb_browser::{
    CatalogClient, CatalogConfig, CatalogError, CatalogService, HttpCatalog, QueryState,
    RecipeBrowser,
};

#[derive(Parser, Debug)]
#[command(name = "mealdb-browser")]
#[command(about = "Search, filter and read recipes from TheMealDB")]
struct Cli {
    /// Catalog base URL (overrides MEALDB__BASE_URL and mealdb.toml)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List recipe categories
    Categories,
    /// List cuisine areas
    Areas,
    /// Search by name, or filter by category or area
    Search {
        /// Free-text recipe name; may be empty
        #[arg(default_value = "")]
        term: String,
        #[arg(long, conflicts_with = "area")]
        category: Option<String>,
        #[arg(long)]
        area: Option<String>,
    },
    /// Show one recipe in full
    Show {
        id: String,
    },
    /// Interactive browser reading commands from stdin
    Browse,
}

fn build_catalog(cli: &Cli) -> Result<HttpCatalog, CatalogError> {
    let config = CatalogConfig::load()?;
    let mut builder = CatalogClient::builder().config(&config);
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = build_catalog(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Categories => {
            let categories = catalog.list_categories().await?;
            render_filters(&categories, &[], &mut out)?;
        }
        Command::Areas => {
            let areas = catalog.list_areas().await?;
            render_filters(&[], &areas, &mut out)?;
        }
        Command::Search {
            term,
            category,
            area,
        } => {
            let mut query = QueryState::with_term(term);
            if let Some(category) = category {
                query.select_category(category);
            } else if let Some(area) = area {
                query.select_area(area);
            }
            let recipes = catalog.search(&query).await?;
            if recipes.is_empty() {
                writeln!(out, "No recipes found.")?;
            } else {
                render_summaries(&recipes, &mut out)?;
            }
        }
        Command::Show { id } => {
            let detail = catalog.get_detail(&id).await?;
            render_detail(&detail, &mut out)?;
        }
        Command::Browse => {
            let mut browser = RecipeBrowser::new(Box::new(catalog));
            let input = BufReader::new(tokio::io::stdin());
            run_shell(&mut browser, input, &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
