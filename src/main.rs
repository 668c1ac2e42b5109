//! gauss-export CLI - Bell-curve distribution tables, charts and spreadsheets.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use gauss_export::adapters::{
    render_distribution_table, LocalExportStorage, PlottersChartRenderer, SystemClock,
    XlsxSpreadsheetWriter,
};
use gauss_export::application::{
    ComputeDistributionCommand, ComputeDistributionHandler, DistributionParams,
    ExportDistributionCommand, ExportDistributionHandler, RenderChartCommand, RenderChartHandler,
};
use gauss_export::config::{AppConfig, LoggingConfig};
use gauss_export::domain::export::ExportLayout;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gauss-export")]
#[command(version)]
#[command(about = "Gaussian distribution calculator with chart and spreadsheet export")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Distribution parameters; unset values come from configuration.
#[derive(Args, Debug, Clone)]
struct DistributionArgs {
    /// Number of points (e.g. weeks)
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Center of the curve [default: count / 2]
    #[arg(short, long, allow_negative_numbers = true)]
    mean: Option<f64>,

    /// Width of the curve [default: max(count / 6, 1)]
    #[arg(short, long)]
    std_dev: Option<f64>,

    /// Total quantity (boxes) to allocate across the points
    #[arg(short, long)]
    total: Option<f64>,
}

impl DistributionArgs {
    fn resolve(&self, config: &AppConfig) -> DistributionParams {
        let defaults = &config.distribution;
        let count = self.count.unwrap_or(defaults.count);
        DistributionParams {
            count,
            mean: self.mean.unwrap_or_else(|| defaults.mean_for(count)),
            std_dev: self.std_dev.unwrap_or_else(|| defaults.std_dev_for(count)),
            total_quantity: self.total.unwrap_or(defaults.total_quantity),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the distribution table
    Table {
        #[command(flatten)]
        dist: DistributionArgs,

        /// Print the rounded points as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the distribution chart as PNG
    Chart {
        #[command(flatten)]
        dist: DistributionArgs,

        /// Path to output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export the distribution to an .xlsx workbook
    Export {
        #[command(flatten)]
        dist: DistributionArgs,

        /// Sheet layout: horizontal (with chart and note) or vertical
        #[arg(short, long)]
        layout: Option<ExportLayout>,

        /// Note written beside the chart
        #[arg(short, long, conflicts_with = "annotation_file")]
        annotation: Option<String>,

        /// Read the note from a file
        #[arg(long)]
        annotation_file: Option<PathBuf>,

        /// Directory the workbook is written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show example configuration
    ExampleConfig,
}

fn setup_logging(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let directive = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .with_context(|| format!("Invalid log level {directive:?}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set subscriber: {e}"))
}

fn print_example_config() {
    let example = r#"# gauss-export configuration file
# Every value can be overridden with GAUSS_EXPORT__<SECTION>__<KEY>,
# e.g. GAUSS_EXPORT__EXPORT__LAYOUT=vertical

[distribution]
count = 52
# mean = 26.0        # default: count / 2
# std_dev = 8.0      # default: max(count / 6, 1)
total_quantity = 0.0

[export]
output_dir = "."
layout = "horizontal"          # or "vertical"
rounding = "half_away_from_zero" # or "half_to_even"
chart_width = 1000
chart_height = 400
chart_labels = true            # needs a system font

[logging]
level = "info"
json = false
"#;
    println!("{example}");
}

fn chart_renderer(config: &AppConfig) -> PlottersChartRenderer {
    PlottersChartRenderer::new(config.export.chart_width, config.export.chart_height)
        .with_labels(config.export.chart_labels)
}

fn read_annotation(text: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    match (text, file) {
        (Some(text), _) => Ok(Some(text)),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("Failed to read annotation from {path:?}")),
        (None, None) => Ok(None),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::ExampleConfig = cli.command {
        print_example_config();
        return Ok(());
    }

    let config = AppConfig::load_from(cli.config.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    config.validate().context("Invalid configuration")?;
    setup_logging(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::ExampleConfig => {}

        Commands::Table { dist, json } => {
            let table = ComputeDistributionHandler::new().handle(ComputeDistributionCommand {
                params: dist.resolve(&config),
                rounding: config.export.rounding,
            })?;

            if json {
                let out = serde_json::to_string_pretty(&table)
                    .context("Failed to serialize distribution")?;
                println!("{out}");
            } else {
                println!("{}", render_distribution_table(&table));
            }
        }

        Commands::Chart { dist, output } => {
            let handler = RenderChartHandler::new(Arc::new(chart_renderer(&config)));
            let image = handler.handle(RenderChartCommand {
                params: dist.resolve(&config),
            })?;

            std::fs::write(&output, image.as_bytes())
                .with_context(|| format!("Failed to write chart to {output:?}"))?;
            info!(path = ?output, bytes = image.len(), "Chart written");
            println!("Chart: {output:?}");
        }

        Commands::Export {
            dist,
            layout,
            annotation,
            annotation_file,
            output_dir,
        } => {
            let annotation = read_annotation(annotation, annotation_file)?;
            let layout = layout.unwrap_or(config.export.layout);
            if annotation.is_some() && !layout.embeds_annotation() {
                bail!("The {layout} layout has no room for an annotation");
            }

            let handler = ExportDistributionHandler::new(
                Arc::new(chart_renderer(&config)),
                Arc::new(XlsxSpreadsheetWriter::new()),
                Arc::new(SystemClock),
            );
            let storage =
                LocalExportStorage::new(output_dir.unwrap_or_else(|| config.export.output_dir.clone()));

            let saved = handler.save(
                ExportDistributionCommand {
                    params: dist.resolve(&config),
                    layout,
                    rounding: config.export.rounding,
                    annotation,
                },
                &storage,
            )?;

            println!("\n=== Export Complete ===");
            println!("Layout:   {}", saved.workbook.layout);
            println!("Size:     {} bytes", saved.workbook.size());
            println!("Output:   {:?}", saved.path);
        }
    }

    Ok(())
}
