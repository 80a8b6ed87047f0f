mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use cli::args::{Cli, Commands};
use cli::handlers;
use goalpace::config::AppConfig;
use goalpace::data::Dataset;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    if let Commands::Config { action } = &cli.command {
        return handlers::handle_config(&config, action);
    }

    let data_path = match cli.data {
        Some(path) => path,
        None => config.dataset_path()?,
    };

    match cli.command {
        Commands::Goals { status } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_goals(&data, &config, status.as_deref())?;
        }
        Commands::Progress { goal, now, json } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_progress(&data, &config, &goal, now.as_deref(), json)?;
        }
        Commands::Log {
            goal,
            value,
            date,
            note,
        } => {
            handlers::handle_log(
                &data_path,
                &config,
                &goal,
                &value,
                date.as_deref(),
                note.as_deref(),
            )?;
        }
        Commands::Chart {
            goal,
            from,
            to,
            bucket,
            json,
        } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_chart(&data, &config, &goal, &from, &to, bucket.as_deref(), json)?;
        }
        Commands::Heatmap { goal, month, json } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_heatmap(&data, &goal, &month, json)?;
        }
        Commands::Overview { now, json } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_overview(&data, &config, now.as_deref(), json)?;
        }
        Commands::Cycle { goal, now, json } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_cycle(&data, &config, &goal, now.as_deref(), json)?;
        }
        Commands::Export { now } => {
            let data = load_dataset(&data_path, &config)?;
            handlers::handle_export(&data, &config, now.as_deref())?;
        }
        // Handled before the data file is resolved
        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Load the goals/logs file, giving naive timestamps the configured offset
/// so every stamp the engine sees shares one representation.
fn load_dataset(path: &Path, config: &AppConfig) -> Result<Dataset> {
    let mut data =
        Dataset::load(path).with_context(|| format!("Loading data from {:?}", path))?;
    if config.time.normalize_naive {
        data.normalize_timestamps(config.time.offset()?);
    }
    log::debug!(
        "Loaded {} goals and {} logs from {:?}",
        data.goals.len(),
        data.logs.len(),
        path
    );
    Ok(data)
}
