mod app;
mod app_data;
mod cli;
mod config;
mod joke;
mod state;
mod task;
mod tips;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_data::app_data;
use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. CLI runs stay quiet unless RUST_LOG or --verbose asks otherwise.
    let default_filter = match (&cli.command, cli.output.verbose) {
        (None, _) => "devnotes=debug,info",
        (Some(_), true) => "devnotes=debug,warn",
        (Some(_), false) => "error",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Some(command) => {
            if let Err(e) = runtime.block_on(cli::run(command, &cli.output)) {
                if cli.output.verbose {
                    cli::print_error(&format!("{:#}", e));
                } else {
                    cli::print_error(&e.to_string());
                }
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            // The event loop runs on this thread, outside block_on, so tokio::spawn
            // still works from the UI without the loop counting as one long task.
            let _guard = runtime.enter();
            run_gui()
        }
    }
}

fn run_gui() -> Result<()> {
    tracing::info!("Starting DevNotes");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {:#}", e);
        Config::default()
    });

    let window = &app_data().window;
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(window.initial_size)
        .with_min_inner_size(window.min_size)
        .with_title(&window.title);

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    eframe::run_native(
        "DevNotes",
        native_options,
        Box::new(|cc| Ok(Box::new(app::DevNotesApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
