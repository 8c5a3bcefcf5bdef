//! CLI administration tool for the movie catalog.
//!
//! Inspects and edits the catalog directly over PostgreSQL, through the same
//! services the HTTP API uses.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Row counts per collection
//! cargo run --bin admin -- stats
//!
//! # Browse and edit records
//! cargo run --bin admin -- movies list
//! cargo run --bin admin -- genres show 3
//! cargo run --bin admin -- movies patch 1 '{"rating": 8.5}'
//! cargo run --bin admin -- directors delete 7
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use movie_catalog::config::{Config, load_from_env, mask_connection_string};
use movie_catalog::prelude::*;
use movie_catalog::server::{connect_pool, pg_state};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the movie catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage movies
    Movies {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage genres
    Genres {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage directors
    Directors {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Show row counts per collection
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Record subcommands shared by every collection.
#[derive(Subcommand)]
enum RecordAction {
    /// List all records
    List,

    /// Show a single record as JSON
    Show { id: i64 },

    /// Partially update a record from a JSON object
    Patch {
        id: i64,

        /// Fields to change, e.g. '{"rating": 8.5}'. Unknown keys are ignored.
        fields: String,
    },

    /// Delete a record
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

/// One-line rendering of a record for `list` output.
trait Summary {
    fn summary(&self) -> String;
}

impl Summary for Movie {
    fn summary(&self) -> String {
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        let rating = self.rating.map(|r| format!("{r:.1}")).unwrap_or_default();
        format!("{:<40} {:<6} {:<5}", self.title, year, rating)
    }
}

impl Summary for Genre {
    fn summary(&self) -> String {
        self.name.clone()
    }
}

impl Summary for Director {
    fn summary(&self) -> String {
        self.name.clone()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;
    let pool = connect_pool(&config).await?;
    let state = pg_state(Arc::new(pool.clone()));

    match cli.command {
        Commands::Movies { action } => {
            handle_record_action(state.movie_service.as_ref(), action).await?
        }
        Commands::Genres { action } => {
            handle_record_action(state.genre_service.as_ref(), action).await?
        }
        Commands::Directors { action } => {
            handle_record_action(state.director_service.as_ref(), action).await?
        }
        Commands::Stats => handle_stats(&state).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches record commands for one collection.
async fn handle_record_action<E: Entity + Summary>(
    service: &CatalogService<E>,
    action: RecordAction,
) -> Result<()> {
    match action {
        RecordAction::List => list_records(service).await,
        RecordAction::Show { id } => {
            let record = service.get_one(id).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        RecordAction::Patch { id, fields } => patch_record(service, id, &fields).await,
        RecordAction::Delete { id, yes } => delete_record(service, id, yes).await,
    }
}

/// Lists all records of a collection.
///
/// # Output Format
///
/// ```text
/// 📋 movies
///
///   ID    Record
///   ────────────────────────────────────────────────────────────
///   1     Yellowstone                              2018   8.6
/// ```
async fn list_records<E: Entity + Summary>(service: &CatalogService<E>) -> Result<()> {
    println!("{}", format!("📋 {}", E::COLLECTION).bright_blue().bold());
    println!();

    let records = service.get_all().await?;

    if records.is_empty() {
        println!("{}", format!("  No {} found", E::COLLECTION).yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {}",
        "ID".bright_white().bold(),
        "Record".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for record in &records {
        println!(
            "  {:<5} {}",
            record.id().to_string().bright_black(),
            record.summary().cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Applies a partial update given as a JSON object string.
async fn patch_record<E: Entity>(service: &CatalogService<E>, id: i64, fields: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(fields).context("Fields must be a JSON object")?;
    let patch = Patch::try_from(value)?.with_id(id);

    let ignored: Vec<String> = patch
        .unrecognized_fields::<E>()
        .into_iter()
        .map(str::to_string)
        .collect();

    service.partially_update(patch).await?;

    if !ignored.is_empty() {
        println!(
            "{}",
            format!("⚠️  Ignored unknown fields: {}", ignored.join(", ")).yellow()
        );
    }
    println!(
        "{}",
        format!("✅ Updated {} {}", E::KIND, id).green().bold()
    );

    Ok(())
}

/// Deletes a record with confirmation prompt.
async fn delete_record<E: Entity + Summary>(
    service: &CatalogService<E>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    let record = service.get_one(id).await?;

    println!("  {}: {}", E::KIND, record.summary().cyan());
    println!("  ID:    {}", id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete this {}?", E::KIND))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(id).await?;

    println!("{}", format!("✅ Deleted {} {}", E::KIND, id).green().bold());

    Ok(())
}

/// Displays the number of records in each collection.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let movies = state.movie_service.get_all().await?.len();
    let genres = state.genre_service.get_all().await?.len();
    let directors = state.director_service.get_all().await?.len();

    println!("  Movies:    {}", movies.to_string().bright_green().bold());
    println!("  Genres:    {}", genres.to_string().bright_green().bold());
    println!("  Directors: {}", directors.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!(
                "  URL:        {}",
                mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
