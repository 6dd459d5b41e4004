//! Command-line surface

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::Config;
use crate::db::DbService;
use crate::seed::Seeder;
use crate::utils::{AppError, AppResult};
use crate::verify::Verifier;

#[derive(Parser)]
#[command(name = "banquet-seeder")]
#[command(about = "Sample-data seeder for the Banquet catering platform", long_about = None)]
pub struct Cli {
    /// Override the data directory holding the embedded database
    #[arg(long, global = true, env = "BANQUET_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wipe create-only tables and repopulate everything with sample data
    Seed,

    /// Run data-integrity checks against the current database contents
    Verify,

    /// Delete the sample rows without repopulating
    Wipe,
}

/// Dispatch one CLI command against the configured database
pub async fn execute(cli: Cli) -> AppResult<()> {
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let db = DbService::new(Path::new(&config.data_dir)).await?;

    match cli.command {
        Commands::Seed => {
            let summary = Seeder::new(db.handle(), &config).run().await?;
            tracing::info!(
                "Seeding complete: {} rows across {} tables",
                summary.total_rows(),
                summary.tables.len()
            );
            Ok(())
        }
        Commands::Verify => {
            let report = Verifier::new(db.handle()).run().await?;
            report.log();
            if report.is_ok() {
                Ok(())
            } else {
                Err(AppError::IntegrityViolations(report.violations.len()))
            }
        }
        Commands::Wipe => {
            Seeder::new(db.handle(), &config).wipe().await?;
            tracing::info!("Wipe complete");
            Ok(())
        }
    }
}
