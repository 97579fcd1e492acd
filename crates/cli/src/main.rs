mod labels;
mod settings_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use library::{Movie, MovieLibrary};
use listing::filters::{
    MovieInMovieSet, MovieSetFilter, OfflineFilter, OfflineMovie, WatchedFilter, WatchedFlag,
};
use listing::{FilterPipeline, NullPlacement, SortDirection, SortField, SortSettings};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// tmm-sort - order and filter a movie library
#[derive(Parser)]
#[command(name = "tmm-sort")]
#[command(about = "Sort and filter a movie library the way the movie list does", long_about = None)]
struct Cli {
    /// Path to the movie library (JSON array of movies)
    #[arg(short, long, default_value = "data/movies.json")]
    library: PathBuf,

    /// Where the chosen sort settings are kept
    #[arg(short, long, default_value = "tmm-sort.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the library in sorted order
    Sort {
        /// Field to sort by (title, sort_title, year, date_added, release_date,
        /// watched, rating, runtime, video_bitrate)
        #[arg(long)]
        field: Option<SortField>,

        /// asc or desc
        #[arg(long)]
        direction: Option<SortDirection>,

        /// Where movies without a value go: lowest or always_first
        #[arg(long)]
        nulls: Option<NullPlacement>,

        /// Collation locale for titles (BCP-47, e.g. "de" or "sv-SE")
        #[arg(long)]
        locale: Option<String>,

        /// Only watched / not_watched movies
        #[arg(long)]
        watched: Option<WatchedFlag>,

        /// Only movies in / not_in a movie set
        #[arg(long)]
        movie_set: Option<MovieInMovieSet>,

        /// Only offline / online movies
        #[arg(long)]
        offline: Option<OfflineMovie>,

        /// Show at most this many movies
        #[arg(long)]
        limit: Option<usize>,

        /// Sort on all cores
        #[arg(long)]
        parallel: bool,

        /// Remember field, direction, null placement and locale
        #[arg(long)]
        save: bool,
    },

    /// List the fields a library can be sorted by
    Fields,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            field,
            direction,
            nulls,
            locale,
            watched,
            movie_set,
            offline,
            limit,
            parallel,
            save,
        } => {
            let mut settings = settings_store::load(&cli.settings)?;
            if let Some(field) = field {
                settings.field = field;
            }
            if let Some(direction) = direction {
                settings.direction = direction;
            }
            if let Some(nulls) = nulls {
                settings.null_placement = nulls;
            }
            if let Some(locale) = locale {
                settings.locale = locale;
            }

            let filters = FilterPipeline::new()
                .add_optional_filter(watched.map(WatchedFilter::new))
                .add_optional_filter(movie_set.map(MovieSetFilter::new))
                .add_optional_filter(offline.map(OfflineFilter::new));

            handle_sort(&cli.library, &settings, &filters, limit, parallel)?;

            if save {
                settings_store::save(&cli.settings, &settings)?;
            }
        }
        Commands::Fields => handle_fields(),
    }

    Ok(())
}

/// Handle the 'sort' command
fn handle_sort(
    library_path: &Path,
    settings: &SortSettings,
    filters: &FilterPipeline,
    limit: Option<usize>,
    parallel: bool,
) -> Result<()> {
    let start = Instant::now();
    let library = MovieLibrary::load_from_file(library_path)
        .with_context(|| format!("Failed to load library {}", library_path.display()))?;
    let total = library.len();

    let comparator = settings
        .comparator()
        .context("Invalid sort settings")?;

    let visible = filters.apply(library.into_movies())?;
    let sorted = if parallel {
        comparator.par_sorted(visible)
    } else {
        comparator.sorted(visible)
    };
    tracing::debug!("Sorted {} movies in {:?}", sorted.len(), start.elapsed());

    print_movies(&sorted, settings, total, limit);
    Ok(())
}

/// Handle the 'fields' command
fn handle_fields() {
    println!("{}", "Sort fields:".bold().blue());
    for field in SortField::ALL {
        println!("  {:<14} {}", field.as_str().green(), labels::field_label(field));
    }
}

/// Print the sorted list with the sort column next to each title
fn print_movies(movies: &[Movie], settings: &SortSettings, total: usize, limit: Option<usize>) {
    println!(
        "{}",
        format!(
            "{} movies of {} by {} ({}, {}, locale {}):",
            movies.len(),
            total,
            labels::field_label(settings.field),
            labels::direction_label(settings.direction),
            labels::null_placement_label(settings.null_placement),
            settings.locale,
        )
        .bold()
        .blue()
    );

    let shown = limit.unwrap_or(movies.len());
    for (rank, movie) in movies.iter().take(shown).enumerate() {
        let flags = format!(
            "{}{}",
            if movie.watched { " [watched]" } else { "" },
            if movie.offline { " [offline]" } else { "" },
        );
        println!(
            "{:>4}. {} {} {}",
            (rank + 1).to_string().green(),
            movie.title,
            format!("({})", labels::field_value(movie, settings.field)).cyan(),
            flags.dimmed()
        );
    }

    if shown < movies.len() {
        println!("  ... {} more", movies.len() - shown);
    }
}
