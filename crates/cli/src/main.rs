mod config;
mod render;

use anyhow::{Context, Result};
use catalog_loader::{CatalogCache, ContentType};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dashboard::Dashboard;
use pipeline::FilterCriteria;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use config::{AppConfig, CliConfig, FileConfig};

/// netflix-dash - Netflix catalog dashboard in the terminal
#[derive(Parser)]
#[command(name = "netflix-dash")]
#[command(about = "Explore the Netflix catalog: distributions, genres, countries and trends", long_about = None)]
struct Cli {
    /// Path to the catalog CSV [default: netflix_titles.csv]
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print views as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Commands,
}

/// The dashboard's filter controls
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Only this content type
    #[arg(long = "type", value_enum, global = true)]
    content_type: Option<TypeArg>,

    /// Only titles produced in these countries (repeatable)
    #[arg(long = "country", global = true)]
    countries: Vec<String>,

    /// Only titles with these ratings (repeatable; "Unknown" selects unrated titles)
    #[arg(long = "rating", global = true)]
    ratings: Vec<String>,

    /// Only titles listed under this genre
    #[arg(long, global = true)]
    genre: Option<String>,

    /// First release year, inclusive
    #[arg(long, global = true)]
    from_year: Option<i32>,

    /// Last release year, inclusive
    #[arg(long, global = true)]
    to_year: Option<i32>,

    /// Case-insensitive search over titles, descriptions, directors and cast
    #[arg(long, global = true)]
    search: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TypeArg {
    Movie,
    #[value(alias = "tv")]
    TvShow,
}

impl From<TypeArg> for ContentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Movie => ContentType::Movie,
            TypeArg::TvShow => ContentType::TvShow,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Headline metrics: totals and latest release year
    Summary,

    /// Content types, ratings, decades and durations
    Overview,

    /// Top genres, genre trends, directors and cast
    Genres,

    /// Countries, per-country ratings and Movie/TV split
    Geography,

    /// Releases and additions over time
    Trends,

    /// Searchable table of matching titles
    Detail {
        /// Number of titles to display [default: 100]
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the values accepted by the filter flags
    Options,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = cli
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let limit = match cli.command {
        Commands::Detail { limit } => limit,
        _ => None,
    };
    let config = AppConfig::resolve(
        &CliConfig {
            data: cli.data.clone(),
            from_year: cli.filters.from_year,
            to_year: cli.filters.to_year,
            limit,
        },
        file_config,
    );

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let mut cache = CatalogCache::new();
    let catalog = cache
        .get_or_load(&config.data_path)
        .with_context(|| format!("Failed to load catalog from {}", config.data_path.display()))?;
    info!(
        "Loaded {} titles from {} ({} duplicates, {} skipped)",
        catalog.len(),
        config.data_path.display(),
        catalog.summary().duplicate_rows,
        catalog.summary().skipped_rows
    );
    if !cli.json {
        eprintln!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());
    }

    let criteria = build_criteria(&cli.filters, config.year_range);
    let dashboard = Dashboard::new(catalog, config.settings.clone());

    match cli.command {
        Commands::Summary => emit(&dashboard.summary(&criteria), cli.json, render::print_summary)?,
        Commands::Overview => emit(&dashboard.overview(&criteria), cli.json, render::print_overview)?,
        Commands::Genres => emit(&dashboard.genres(&criteria), cli.json, render::print_genres)?,
        Commands::Geography => {
            emit(&dashboard.geography(&criteria), cli.json, render::print_geography)?
        }
        Commands::Trends => emit(&dashboard.trends(&criteria), cli.json, render::print_trends)?,
        Commands::Detail { .. } => {
            let limit = dashboard.settings().detail_limit;
            emit(&dashboard.detail(&criteria, limit), cli.json, render::print_detail)?
        }
        Commands::Options => emit(&dashboard.filter_options(), cli.json, render::print_options)?,
    }

    Ok(())
}

/// Turn the filter flags into criteria. Flags win over the configured
/// default year range.
fn build_criteria(args: &FilterArgs, year_range: Option<(i32, i32)>) -> FilterCriteria {
    let mut criteria = FilterCriteria::new()
        .with_countries(args.countries.iter().cloned())
        .with_ratings(args.ratings.iter().cloned());
    if let Some(content_type) = args.content_type {
        criteria = criteria.with_content_type(content_type.into());
    }
    if let Some(genre) = &args.genre {
        criteria = criteria.with_genre(genre.as_str());
    }
    if let Some((from, to)) = year_range {
        criteria = criteria.with_year_range(from, to);
    }
    if let Some(query) = &args.search {
        criteria = criteria.with_query(query.as_str());
    }
    criteria
}

/// Print `view` as pretty JSON or through its text renderer
fn emit<T: Serialize>(view: &T, json: bool, print_text: fn(&T)) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(view).context("Failed to serialize view")?;
        println!("{}", out);
    } else {
        print_text(view);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_criteria_from_flags() {
        let args = FilterArgs {
            content_type: Some(TypeArg::TvShow),
            countries: vec!["India".to_string()],
            search: Some("  factory ".to_string()),
            ..FilterArgs::default()
        };

        let criteria = build_criteria(&args, Some((2015, 2021)));
        assert_eq!(criteria.content_type(), Some(ContentType::TvShow));
        assert_eq!(criteria.countries().map(|c| c.len()), Some(1));
        assert_eq!(criteria.query(), Some("factory"));
        assert_eq!(criteria.year_range().map(|r| (r.start(), r.end())), Some((2015, 2021)));
        assert!(criteria.ratings().is_none());
    }

    #[test]
    fn test_no_flags_is_unrestricted() {
        let criteria = build_criteria(&FilterArgs::default(), None);
        assert!(criteria.is_unrestricted());
    }

    #[test]
    fn test_cli_parses_global_filters_after_subcommand() {
        let cli = Cli::try_parse_from([
            "netflix-dash",
            "detail",
            "--limit",
            "5",
            "--type",
            "tv",
            "--rating",
            "TV-MA",
            "--rating",
            "TV-14",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Detail { limit: Some(5) }));
        assert!(matches!(cli.filters.content_type, Some(TypeArg::TvShow)));
        assert_eq!(cli.filters.ratings, vec!["TV-MA", "TV-14"]);
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
