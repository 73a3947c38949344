pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod report;
pub mod services;
pub mod stats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::{info, warn};

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::database::SqliteMatchStore;
use crate::services::import::ImportService;
use crate::services::maintenance::MaintenanceService;
use crate::services::report::ReportService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(config.server_port(port), config);
        service.run().await
    })
}

pub fn handle_import(file: &Path) -> Result<()> {
    let config = AppConfig::new();
    let pool = database::open(&config.database.path)?;
    let summary = ImportService::new(pool).run(file)?;
    println!(
        "Imported {} matches and {} ratings ({} rows skipped)",
        summary.matches_inserted,
        summary.ratings_inserted,
        summary.matches_skipped + summary.ratings_skipped
    );
    Ok(())
}

pub fn handle_report(
    player: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    output: Option<&Path>,
) -> Result<()> {
    let config = AppConfig::new();
    let (start, end) = config.resolve_range(start, end);
    let store = SqliteMatchStore::new(database::open(&config.database.path)?);

    let player_report = ReportService::new(&store).build(player, start, end)?;
    if player_report.match_count == 0 && !store.has_player(player)? {
        warn!("No data for {}. Import their scraped matches first.", player);
    }

    let lines = report::stat_lines(player_report.match_count, &player_report.statistics);
    println!("{}", report::render_text(player, &lines, true));

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_report_path(&config, player));
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let page = report::render_html(player, &lines, &player_report.rating_series)?;
    std::fs::write(&output_path, page)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    info!("Wrote interactive chart to {}", output_path.display());

    Ok(())
}

fn default_report_path(config: &AppConfig, player: &str) -> PathBuf {
    Path::new(&config.report.output_dir).join(format!("{player}.html"))
}

pub fn handle_dedup() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::open(&config.database.path)?;
    let removed = MaintenanceService::new(pool).remove_duplicates()?;
    println!("Duplicates removed from `matches` in `{}`: {}", config.database.path, removed);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
