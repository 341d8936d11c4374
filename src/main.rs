//! Aadhaar Insights CLI
//!
//! Offline access to the dashboard:
//! - Render a section as HTML, JSON or text
//! - List sections and datasets
//! - Generate a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use aadhaar_insights::chart::TextRenderer;
use aadhaar_insights::config::{generate_default_config, Config};
use aadhaar_insights::dashboard::{render_card_text, Section, ViewState, HEADER_CARDS};
use aadhaar_insights::dataset::{DatasetName, DatasetRegistry};
use aadhaar_insights::logging::init_logging;
use aadhaar_insights::render::{render_page, render_text, PageOptions};

#[derive(Parser)]
#[command(name = "aadhaar-insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Aadhaar enrollment and update analytics dashboard")]
#[command(long_about = "Aadhaar Insights presents precomputed enrollment, biometric and demographic statistics.\nRender any dashboard section offline or inspect the underlying datasets.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dashboard section
    Render {
        /// Section id (overview, enrollment, biometric, demographic, comparison)
        #[arg(short, long)]
        section: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List dashboard sections
    Sections,

    /// List datasets, or show the rows of one
    Datasets {
        /// Dataset name
        name: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = TableFormat::Table)]
        format: TableFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Html,
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if cli.verbose {
        loaded.config.logging.level = "debug".to_string();
    }
    init_logging(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    let registry = DatasetRegistry::global();

    match cli.command {
        Commands::Render {
            section,
            format,
            output,
        } => {
            let rendered = render(&config, registry, section.as_deref(), format)?;
            write_output(&rendered, output.as_ref())?;
        }

        Commands::Sections => {
            println!("{:<14} {:<20} DATASETS", "ID", "LABEL");
            println!("{}", "-".repeat(60));
            for section in Section::all() {
                let layout = aadhaar_insights::route(*section);
                let mut datasets: Vec<&str> =
                    layout.datasets().iter().map(|d| d.as_str()).collect();
                datasets.dedup();
                let marker = if *section == config.dashboard.default_section {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{}{:<13} {:<20} {}",
                    marker,
                    section.id(),
                    section.label(),
                    datasets.join(", ")
                );
            }
        }

        Commands::Datasets { name, format } => match name {
            Some(name) => show_dataset(registry, &name, format)?,
            None => list_datasets(registry, format)?,
        },

        Commands::Config { output } => {
            write_output(&generate_default_config(), output.as_ref())?;
        }
    }

    Ok(())
}

/// Render one section in the requested format
///
/// An unknown section id leaves the view on the configured default and
/// renders an empty body.
fn render(
    config: &Config,
    registry: &DatasetRegistry,
    section: Option<&str>,
    format: RenderFormat,
) -> Result<String> {
    let mut view = ViewState::with_section(config.dashboard.default_section);

    let layout = match section {
        None => Some(view.layout()),
        Some(id) => match view.select_by_id(id) {
            Some(_) => Some(view.layout()),
            None => {
                tracing::warn!(section = %id, "Unknown section, rendering nothing");
                None
            }
        },
    };

    tracing::debug!(section = %view.active(), ?format, "Rendering section");

    let rendered = match format {
        RenderFormat::Html => render_page(
            &PageOptions {
                config: &config.dashboard,
                active: view.active(),
                layout: layout.as_ref(),
            },
            registry,
        )?,
        RenderFormat::Json => serde_json::to_string_pretty(&layout)?,
        RenderFormat::Text => match &layout {
            Some(layout) => render_text(layout, registry, &TextRenderer::default(), true)?,
            None => HEADER_CARDS
                .iter()
                .map(|card| render_card_text(card) + "\n")
                .collect(),
        },
    };

    Ok(rendered)
}

fn list_datasets(registry: &DatasetRegistry, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Json => {
            let summary: Vec<_> = registry
                .names()
                .map(|name| {
                    let data = registry.dataset(name);
                    serde_json::json!({
                        "name": name,
                        "record": data.record_kind(),
                        "rows": data.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        TableFormat::Table => {
            println!("{:<30} {:<16} {:>5}", "NAME", "RECORD", "ROWS");
            println!("{}", "-".repeat(53));
            for name in registry.names() {
                let data = registry.dataset(name);
                println!(
                    "{:<30} {:<16} {:>5}",
                    name.as_str(),
                    data.record_kind(),
                    data.len()
                );
            }
        }
    }
    Ok(())
}

fn show_dataset(registry: &DatasetRegistry, name: &str, format: TableFormat) -> Result<()> {
    let data = registry.get(name).with_context(|| {
        let known: Vec<&str> = DatasetName::all().iter().map(|n| n.as_str()).collect();
        format!("Unknown dataset '{}' (known: {})", name, known.join(", "))
    })?;

    match format {
        TableFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        TableFormat::Table => {
            let records = data.records();
            let Some(first) = records.first() else {
                println!("(empty)");
                return Ok(());
            };

            let fields = first.field_names();
            let header: Vec<String> = fields.iter().map(|f| format!("{:<22}", f)).collect();
            println!("{}", header.join(" ").trim_end());
            println!("{}", "-".repeat(23 * fields.len()));

            for record in records {
                let row: Vec<String> = fields
                    .iter()
                    .map(|f| {
                        let value = record.field(f).map(|v| v.to_string()).unwrap_or_default();
                        format!("{:<22}", value)
                    })
                    .collect();
                println!("{}", row.join(" ").trim_end());
            }
        }
    }
    Ok(())
}

fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {:?}", content.len(), path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
