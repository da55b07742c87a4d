use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tokio::sync::Mutex;

use complaintui::{
    core::state::AppState,
    infrastructure::{cli::Cli, config::Config, loader::load_csv, tui::real::RealTui},
    integration::app_runner::AppRunner,
    presentation::report::SummaryReport,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based)
    let mut config = Config::new()?;
    if let Some(export) = &args.export {
        config.data.export_path = Some(export.clone());
    }

    let path = args
        .data
        .clone()
        .or_else(|| config.data.path.clone())
        .ok_or_else(|| eyre!("no dataset given: pass --data <CSV> or set data.path in the config"))?;
    let dataset = load_csv(&path).wrap_err_with(|| format!("failed to load {}", path.display()))?;

    let filter = args.filter(&config.data.filter);
    let dataset = Arc::new(filter.apply(&dataset));

    if args.summary {
        let report = SummaryReport::from_dataset(&dataset);
        if args.json {
            println!("{}", report.to_json()?);
        } else {
            print!("{report}");
        }
        return Ok(());
    }

    let state = AppState::new_with_config(dataset, config);
    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(state, tui);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
