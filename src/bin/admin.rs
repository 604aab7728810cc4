//! CLI administration tool for snaplink.
//!
//! Inspects and manages short URLs directly in PostgreSQL, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Summary counts
//! cargo run --bin admin -- stats
//!
//! # Most clicked URLs
//! cargo run --bin admin -- top --limit 20
//!
//! # Inspect a code, including soft-deleted records
//! cargo run --bin admin -- show abc123 --include-deleted
//!
//! # Soft-delete a code
//! cargo run --bin admin -- delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `BASE_URL`: prefix used when printing short URLs

use snaplink::application::services::{AnalyticsService, UrlService};
use snaplink::config::{Config, mask_connection_string};
use snaplink::domain::entities::UrlRecord;
use snaplink::error::AppError;
use snaplink::infrastructure::persistence::{PgAnalyticsRepository, PgUrlRepository};
use snaplink::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing snaplink.
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
    /// Show totals over active URLs
    Stats,

    /// List the most clicked URLs
    Top {
        /// Number of rows (1-100)
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(1..=100))]
        limit: i64,
    },

    /// Show a single short URL
    Show {
        /// Short code to look up
        code: String,

        /// Also match soft-deleted records
        #[arg(long)]
        include_deleted: bool,
    },

    /// Soft-delete a short URL
    Delete {
        /// Short code to delete
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

type Urls = UrlService<PgUrlRepository, RandomCodeGenerator>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config.require_database_url()?;

    let pool = PgPool::connect(database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(database_url)
            )
        })?;
    let pool = Arc::new(pool);

    let urls = UrlService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        RandomCodeGenerator::new(config.code_length),
        config.base_url.clone(),
    );
    let analytics = AnalyticsService::new(Arc::new(PgAnalyticsRepository::new(pool.clone())));

    match cli.command {
        Commands::Stats => handle_stats(&analytics).await?,
        Commands::Top { limit } => handle_top(&analytics, limit).await?,
        Commands::Show {
            code,
            include_deleted,
        } => handle_show(&urls, &code, include_deleted).await?,
        Commands::Delete { code, yes } => handle_delete(&urls, &code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays totals over active URLs.
async fn handle_stats(analytics: &AnalyticsService<PgAnalyticsRepository>) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let summary = analytics.summary().await?;

    println!(
        "  URLs:          {}",
        summary.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Custom URLs:   {}",
        summary.total_custom_urls.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        summary.total_clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists the most clicked active URLs.
///
/// # Output Format
///
/// ```text
/// Most clicked
///
///   Code                 Clicks     Original URL
///   ---------------------------------------------------------------------------
///   abc123               42         https://example.com/
/// ```
async fn handle_top(analytics: &AnalyticsService<PgAnalyticsRepository>, limit: i64) -> Result<()> {
    println!("{}", "Most clicked".bright_blue().bold());
    println!();

    let records = analytics.most_clicked(limit).await?;

    if records.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<10} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<20} {:<10} {}",
            record.short_code.cyan(),
            record.clicks.to_string().bright_green(),
            record.original_url
        );
    }

    println!();

    Ok(())
}

/// Prints a single record.
///
/// Without `--include-deleted` only active records are matched. With it, the
/// active holder of the code wins; otherwise the most recently deleted one is
/// shown.
async fn handle_show(urls: &Urls, code: &str, include_deleted: bool) -> Result<()> {
    let lookup = if include_deleted {
        urls.get_url_including_deleted(code).await
    } else {
        urls.get_url(code).await
    };

    match lookup {
        Ok(record) => {
            print_record(urls, &record);
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("  No URL with code '{code}'").yellow());
            if !include_deleted {
                println!(
                    "  Retry with {} to search deleted records",
                    "--include-deleted".bright_cyan()
                );
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Soft-deletes a code after confirmation.
async fn handle_delete(urls: &Urls, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete short URL".bright_blue().bold());
    println!();

    let record = match urls.get_url(code).await {
        Ok(record) => record,
        Err(AppError::NotFound { .. }) => {
            println!(
                "{}",
                format!("  No active URL with code '{code}'").yellow()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_record(urls, &record);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    urls.delete_url(code).await?;

    println!();
    println!("{}", "URL deleted; the code can be reused.".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let total_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            let deleted_rows: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE is_deleted")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL:   {}", version.bright_white());
            println!("  Rows:         {}", total_rows.to_string().bright_white());
            println!(
                "  Soft-deleted: {}",
                deleted_rows.to_string().bright_white()
            );
            println!();
        }
    }

    Ok(())
}

fn print_record(urls: &Urls, record: &UrlRecord) {
    let status = if record.is_deleted {
        "DELETED".red()
    } else {
        "ACTIVE".green()
    };

    println!("  ID:        {}", record.id.to_string().bright_black());
    println!("  Code:      {}", record.short_code.cyan());
    println!(
        "  Short URL: {}",
        urls.short_url(&record.short_code).bright_yellow()
    );
    println!("  Original:  {}", record.original_url);
    println!("  Custom:    {}", record.is_custom);
    println!("  Clicks:    {}", record.clicks.to_string().bright_green());
    println!(
        "  Created:   {}",
        record.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(updated_at) = record.updated_at {
        println!("  Updated:   {}", updated_at.format("%Y-%m-%d %H:%M"));
    }
    println!("  Status:    {}", status);
    println!();
}
