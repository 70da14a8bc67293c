//! todolist CLI - Monthly TO DO workbook generator
//!
//! Builds one spreadsheet per month with a sheet for every weekday and a
//! grey separator sheet for every weekend.

mod config;
mod exit;
mod prompt;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use todolist_core::{
    parse_month, parse_year, partition, validate, MonthRange, Renderer, SheetDescriptor,
};
use todolist_render::{ExcelRenderer, PlanRenderer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::exit::{ExitCode, Outcome};
use crate::prompt::Prompt;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(author, version, about = "Monthly TO DO workbook generator", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", env = "TODOLIST_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the workbook (asks for month/year when not given)
    Generate(GenerateArgs),

    /// Print the sheets a month would produce without writing anything
    Plan {
        /// Month number (1-12)
        #[arg(short, long)]
        month: String,

        /// Four-digit year
        #[arg(short, long)]
        year: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = PlanFormat::Text)]
        format: PlanFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlanFormat {
    Text,
    Json,
}

/// `plan --format json` document
#[derive(Serialize)]
struct PlanDocument<'a> {
    month_name: &'static str,
    range: &'a MonthRange,
    sheets: &'a [SheetDescriptor],
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Month number (1-12)
    #[arg(short, long)]
    month: Option<String>,

    /// Four-digit year
    #[arg(short, long)]
    year: Option<String>,

    /// Directory the workbook is written to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// File name template ({month}, {month_name}, {year})
    #[arg(short, long)]
    template: Option<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(outcome) => {
            match &outcome {
                Outcome::Created(path) => println!("Created: {}", path.display()),
                Outcome::Cancelled => println!("Generation cancelled"),
                Outcome::Planned => {}
            }
            ExitCode::Success.into()
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Failure.into()
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Generate(args)) => generate(&config, args),
        Some(Commands::Plan {
            month,
            year,
            format,
        }) => plan(&config, &month, &year, format),
        None => generate(&config, GenerateArgs::default()),
    }
}

/// Resolve month/year from flags, asking for whatever is missing
fn resolve_range(
    config: &Config,
    month: Option<&str>,
    year: Option<&str>,
) -> Result<Option<MonthRange>> {
    let bounds = config.year_bounds()?;

    let month = month.map(parse_month).transpose()?;
    let year = year.map(|y| parse_year(y, bounds)).transpose()?;

    let (month, year) = match (month, year) {
        (Some(month), Some(year)) => (month, year),
        (month, year) => {
            let today = chrono::Local::now().date_naive();
            let stdin = io::stdin();
            let mut prompt = Prompt::new(stdin.lock(), io::stdout());

            let month = match month {
                Some(month) => month,
                None => match prompt.ask_month(today.month())? {
                    Some(month) => month,
                    None => return Ok(None),
                },
            };
            let year = match year {
                Some(year) => year,
                None => {
                    let default = today.year().clamp(bounds.min, bounds.max);
                    match prompt.ask_year(default, bounds)? {
                        Some(year) => year,
                        None => return Ok(None),
                    }
                }
            };
            (month, year)
        }
    };

    Ok(Some(validate(year, month, bounds)?))
}

fn renderer(config: &Config) -> ExcelRenderer {
    let mut renderer = ExcelRenderer::new();
    if let Some(width) = config.column_width {
        renderer = renderer.column_width(width);
    }
    if let Some(row) = config.last_row {
        renderer = renderer.last_row(row);
    }
    renderer
}

fn generate(config: &Config, args: GenerateArgs) -> Result<Outcome> {
    let template = config.template(args.template.as_deref())?;
    let output_dir = config.output_dir(args.output_dir.as_deref());

    let Some(range) = resolve_range(config, args.month.as_deref(), args.year.as_deref())? else {
        tracing::info!("generation cancelled by user");
        return Ok(Outcome::Cancelled);
    };

    let sheets = partition(&range);
    let path = output_dir.join(template.render(&range));
    tracing::info!(
        year = range.year,
        month = range.month,
        sheets = sheets.len(),
        path = %path.display(),
        "generating workbook"
    );

    write_workbook(config, &sheets, &path)?;
    Ok(Outcome::Created(path))
}

fn write_workbook(config: &Config, sheets: &[SheetDescriptor], path: &Path) -> Result<()> {
    renderer(config)
        .save(sheets, path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn plan(config: &Config, month: &str, year: &str, format: PlanFormat) -> Result<Outcome> {
    let Some(range) = resolve_range(config, Some(month), Some(year))? else {
        return Ok(Outcome::Cancelled);
    };
    let sheets = partition(&range);

    match format {
        PlanFormat::Text => {
            let text = PlanRenderer::new().render(&sheets)?;
            println!("{} {}", range.month_name(), range.year);
            print!("{text}");
        }
        PlanFormat::Json => {
            let document = PlanDocument {
                month_name: range.month_name(),
                range: &range,
                sheets: &sheets,
            };
            let json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize sheet plan")?;
            println!("{json}");
        }
    }
    Ok(Outcome::Planned)
}
