//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::chart_svg::render_series_chart;
use crate::adapters::csv_export::write_series;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_catalog_adapter::JsonCatalogAdapter;
use crate::domain::catalog::{InvestmentSubItem, REFERENCE_YEAR};
use crate::domain::catalog_validation::validate_catalog;
use crate::domain::error::HindsightError;
use crate::domain::format::{format_unit, group_digits};
use crate::domain::selection::Selection;
use crate::domain::valuation::{self, Trend};
use crate::ports::catalog_port::CatalogPort;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "hindsight", about = "Historical investment valuation calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Value a past investment at the reference year
    Valuate {
        #[arg(short, long)]
        catalog: PathBuf,
        #[arg(long)]
        category: String,
        #[arg(long)]
        item: String,
        #[arg(short, long)]
        amount: f64,
        #[arg(short, long)]
        year: u16,
        /// Write the year-by-year series as CSV
        #[arg(long)]
        export: Option<PathBuf>,
        /// Write the line chart as SVG
        #[arg(long)]
        chart: Option<PathBuf>,
    },
    /// List investment categories
    ListCategories {
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// List items within a category
    ListItems {
        #[arg(short, long)]
        catalog: PathBuf,
        #[arg(long)]
        category: String,
    },
    /// Show year coverage for items
    Info {
        #[arg(short, long)]
        catalog: PathBuf,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        item: Option<String>,
    },
    /// Check catalog structure
    Validate {
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// Start the web server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Valuate {
            catalog,
            category,
            item,
            amount,
            year,
            export,
            chart,
        } => run_valuate(
            &catalog,
            &category,
            &item,
            amount,
            year,
            export.as_ref(),
            chart.as_ref(),
        ),
        Command::ListCategories { catalog } => run_list_categories(&catalog),
        Command::ListItems { catalog, category } => run_list_items(&catalog, &category),
        Command::Info {
            catalog,
            category,
            item,
        } => run_info(&catalog, category.as_deref(), item.as_deref()),
        Command::Validate { catalog } => run_validate(&catalog),
        Command::Serve { config } => run_serve(&config),
    }
}

pub fn load_catalog(path: &PathBuf) -> Result<JsonCatalogAdapter, ExitCode> {
    eprintln!("Loading catalog from {}", path.display());
    JsonCatalogAdapter::from_file(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = HindsightError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// The catalog file a `serve` config points at.
pub fn catalog_path_from_config(config: &dyn ConfigPort) -> Result<PathBuf, HindsightError> {
    config
        .get_string("catalog", "path")
        .map(PathBuf::from)
        .ok_or_else(|| HindsightError::ConfigMissing {
            section: "catalog".into(),
            key: "path".into(),
        })
}

/// One coverage line for the `info` command.
pub fn info_line(category_id: &str, item: &InvestmentSubItem) -> String {
    match item.year_range() {
        Some((first, last, count)) => format!(
            "{}/{}: {} entries, {} to {}",
            category_id, item.id, count, first, last
        ),
        None => format!("{}/{}: no price data", category_id, item.id),
    }
}

fn run_valuate(
    catalog_path: &PathBuf,
    category: &str,
    item_id: &str,
    amount: f64,
    year: u16,
    export_path: Option<&PathBuf>,
    chart_path: Option<&PathBuf>,
) -> ExitCode {
    let adapter = match load_catalog(catalog_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let catalog = match adapter.catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let selection = Selection {
        category: category.to_string(),
        item: item_id.to_string(),
        amount,
        start_year: year,
    };

    let (item, result) = match valuation::valuate(&catalog, &selection) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    println!(
        "If you had invested {} won in {} in {}, it would be worth about {} ({} won) in {}.",
        group_digits(amount),
        item.label,
        year,
        format_unit(result.projected_value),
        group_digits(result.projected_value),
        REFERENCE_YEAR,
    );
    println!("Growth: {:.2}%", result.growth_percent);
    let trend = match Trend::from_growth(result.growth_percent) {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Flat => "flat",
    };
    println!("Trend: {trend}");
    println!();
    for point in &result.series {
        println!("  {}  {}", point.year, group_digits(point.value as f64));
    }

    if let Some(path) = export_path {
        let file = match fs::File::create(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("error: failed to create {}: {e}", path.display());
                return ExitCode::from(1);
            }
        };
        if let Err(e) = write_series(file, &result.series) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Series written to: {}", path.display());
    }

    if let Some(path) = chart_path {
        let svg = render_series_chart(&item.label, &result.series);
        if let Err(e) = fs::write(path, &svg) {
            eprintln!("error: failed to write chart: {e}");
            return ExitCode::from(1);
        }
        eprintln!("Chart written to: {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_list_categories(catalog_path: &PathBuf) -> ExitCode {
    let adapter = match load_catalog(catalog_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let catalog = match adapter.catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for category in &catalog.investments {
        println!("{}: {}", category.id, category.label);
    }
    eprintln!("{} categories found", catalog.investments.len());
    ExitCode::SUCCESS
}

fn run_list_items(catalog_path: &PathBuf, category: &str) -> ExitCode {
    let adapter = match load_catalog(catalog_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let catalog = match adapter.catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let category = match catalog.find_category(category) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if category.items.is_empty() {
        eprintln!("No items in category {}", category.id);
    } else {
        for item in &category.items {
            println!("{}: {}", item.id, item.label);
        }
        eprintln!("{} items found", category.items.len());
    }
    ExitCode::SUCCESS
}

fn run_info(catalog_path: &PathBuf, category: Option<&str>, item: Option<&str>) -> ExitCode {
    let adapter = match load_catalog(catalog_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let catalog = match adapter.catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for cat in &catalog.investments {
        if let Some(wanted) = category {
            if cat.id != wanted {
                continue;
            }
        }
        for it in &cat.items {
            if let Some(wanted) = item {
                if it.id != wanted {
                    continue;
                }
            }
            println!("{}", info_line(&cat.id, it));
        }
    }
    ExitCode::SUCCESS
}

fn run_validate(catalog_path: &PathBuf) -> ExitCode {
    let adapter = match load_catalog(catalog_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let catalog = match adapter.catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match validate_catalog(&catalog) {
        Ok(()) => {
            eprintln!("Catalog is valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_serve(config_path: &PathBuf) -> ExitCode {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{AppState, build_router};
        use std::net::SocketAddr;
        use std::sync::Arc;

        eprintln!("Loading config from {}", config_path.display());
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(code) => return code,
        };

        let catalog_path = match catalog_path_from_config(&config) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let catalog_port = match load_catalog(&catalog_path) {
            Ok(a) => Arc::new(a) as Arc<dyn CatalogPort + Send + Sync>,
            Err(code) => return code,
        };

        let addr: SocketAddr = config
            .get_string("web", "listen")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .unwrap_or_else(|_| "127.0.0.1:3000".parse().unwrap());

        eprintln!("Starting web server on {}", addr);

        let state = AppState { catalog_port };
        let router = build_router(state);

        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, router).await.unwrap();
        });

        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        eprintln!("error: web feature is required for serve");
        ExitCode::from(1)
    }
}
