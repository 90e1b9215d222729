use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{
    CatalogIndexer, ComputeIndexer, IndexArtifact, MAX_RECOMMENDATIONS, MatchConfig,
    PrecomputedIndexer, RankedTitle, close_matches, recommend_ranked,
};
use std::path::PathBuf;
use std::time::Instant;
use tmdb_client::{MovieDetails, TmdbClient};
use tracing::warn;

mod config;

use config::Config;

/// Overview snippets are cut to roughly this many characters in the grid.
const OVERVIEW_SNIPPET_LEN: usize = 120;

/// CineMatch - genre-similarity movie recommender
#[derive(Parser)]
#[command(name = "cine-match")]
#[command(about = "Recommends movies similar to a title using genre text similarity", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV (title,genres columns)
    #[arg(short, long, default_value = "data/movies.csv")]
    catalog: PathBuf,

    /// Load a precomputed index artifact instead of building from the CSV
    #[arg(long)]
    precomputed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Free-text movie title (spelling variants are tolerated)
        #[arg(long)]
        title: String,

        /// Number of recommendations to show (at most 10)
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Skip the TMDB detail fetch and show titles only
        #[arg(long)]
        no_details: bool,
    },

    /// Show which catalog titles a query fuzzy-matches
    Search {
        /// Free-text movie title to match
        #[arg(long)]
        title: String,
    },

    /// Build the index and write it as a precomputed artifact
    Index {
        /// Output path for the artifact
        #[arg(long, default_value = "data/index.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Select the indexer by configuration: compute from the CSV, or load a
    // precomputed artifact written by an earlier `index` run
    let indexer: Box<dyn CatalogIndexer> = match &cli.precomputed {
        Some(path) => Box::new(PrecomputedIndexer::new(path)),
        None => Box::new(ComputeIndexer::new(&cli.catalog)),
    };

    // Build the immutable context once; everything after this is read-only
    let start = Instant::now();
    let (catalog, matrix) = indexer.load().context("Failed to load the movie index")?;
    println!(
        "{} Indexed {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            title,
            limit,
            no_details,
        } => handle_recommend(&catalog, &matrix, &title, limit, no_details).await?,
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Index { output } => handle_index(catalog, matrix, &output)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: &catalog::Catalog,
    matrix: &engine::SimilarityMatrix,
    title: &str,
    limit: usize,
    no_details: bool,
) -> Result<()> {
    let mut recommendations = recommend_ranked(title, catalog, matrix, &MatchConfig::default());
    recommendations.truncate(limit.min(MAX_RECOMMENDATIONS));

    if recommendations.is_empty() {
        // Not an error: the user may retry with different input
        println!("{} No movie matching '{}' was found.", "!".yellow(), title);
        return Ok(());
    }

    println!("{}", "Here are your recommendations:".bold().blue());

    if no_details {
        for (rank, rec) in recommendations.iter().enumerate() {
            print_bare(rank + 1, rec);
        }
        return Ok(());
    }

    // The API key is the one piece of required configuration; fail fast
    // before the first fetch rather than degrading every item
    let config = Config::from_env()?;
    let client = TmdbClient::with_api_url(&config.tmdb_api_key, &config.tmdb_api_url)?;

    // Sequential, one fetch per title, each item degrading independently
    for (rank, rec) in recommendations.iter().enumerate() {
        let details = match client.fetch_details(&rec.title).await {
            Ok(details) => details,
            Err(e) => {
                warn!(title = %rec.title, error = %e, "Detail fetch failed; showing title only");
                MovieDetails::default()
            }
        };
        print_with_details(rank + 1, rec, &details);
    }

    Ok(())
}

/// Handle the 'search' command: expose the fuzzy matcher's view of a query
fn handle_search(catalog: &catalog::Catalog, title: &str) {
    let matches = close_matches(title, catalog.titles(), &MatchConfig::default());

    if matches.is_empty() {
        println!("{} No close matches for '{}'.", "!".yellow(), title);
        return;
    }

    println!("{}", format!("Close matches for '{}':", title).bold().blue());
    for (index, score) in matches {
        let matched = catalog.get(index).map(|m| m.title.as_str()).unwrap_or("?");
        println!("  {} {} (ratio {:.2})", "•".green(), matched, score);
    }
}

/// Handle the 'index' command: persist the built index for later runs
fn handle_index(
    catalog: catalog::Catalog,
    matrix: engine::SimilarityMatrix,
    output: &PathBuf,
) -> Result<()> {
    let movies = catalog.len();
    IndexArtifact::new(catalog, matrix)
        .write(output)
        .with_context(|| format!("Failed to write index artifact to {}", output.display()))?;
    println!(
        "{} Wrote precomputed index ({} movies) to {}",
        "✓".green(),
        movies,
        output.display()
    );
    Ok(())
}

fn print_bare(rank: usize, rec: &RankedTitle) {
    println!(
        "{}. {} (similarity {:.2})",
        rank.to_string().green(),
        rec.title.bold(),
        rec.score
    );
}

fn print_with_details(rank: usize, rec: &RankedTitle, details: &MovieDetails) {
    print_bare(rank, rec);
    if let Some(rating) = details.rating {
        println!("   ⭐ Rating: {:.1}", rating);
    }
    if let Some(overview) = &details.overview {
        println!("   {}", truncate_overview(overview, OVERVIEW_SNIPPET_LEN).dimmed());
    }
    if let Some(poster) = &details.poster_url {
        println!("   {}", poster.cyan());
    }
}

/// Cut an overview down to a display snippet, appending an ellipsis when
/// anything was dropped. Counts chars, not bytes, so multi-byte text is
/// never split mid-character.
fn truncate_overview(overview: &str, max_chars: usize) -> String {
    if overview.chars().count() <= max_chars {
        return overview.to_string();
    }
    let snippet: String = overview.chars().take(max_chars).collect();
    format!("{snippet}...")
}
