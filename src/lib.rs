pub mod analysis;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod server;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, DashboardState};
use cli::{Cli, Command, DashboardArgs, ServeArgs};
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::{
    analysis::{ComparisonRequest, run_comparison},
    data::{air_quality::AirQualityClient, power::PowerClient, weather::WeatherClient},
    domain::Parameter,
};

const DEFAULT_LOG_FILTER: &str = "climate_compare=info,tower_http=info";

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve(args) => run_server(args).await,
        Command::Dashboard(args) => {
            args.validate()?;
            if args.one_shot {
                run_one_shot(&args).await
            } else {
                run_dashboard(&args).await
            }
        }
    }
}

/// Logs go to stderr; the interactive dashboard never calls this so nothing
/// draws over the terminal UI.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn run_server(args: ServeArgs) -> Result<()> {
    init_tracing();
    server::serve(args.addr(), PowerClient::with_base_url(args.upstream_url.clone())).await
}

async fn run_one_shot(args: &DashboardArgs) -> Result<()> {
    init_tracing();
    let request = ComparisonRequest::new(
        &args.locations,
        Parameter::from_id(&args.parameter),
        &args.start,
        &args.end,
        &args.threshold_text(),
    )?;
    let weather = WeatherClient::with_base_url(args.backend_url.clone());
    let air_quality = AirQualityClient::with_base_url(args.backend_url.clone());

    let report = run_comparison(&weather, &air_quality, &request)
        .await
        .context("Error during analysis")?;

    println!("{}", report.text_summary());
    for line in report.air_quality_lines() {
        println!("{line}");
    }

    if let Some(path) = &args.export_path {
        let charts = app::export::export_report(path, &report)?;
        println!(
            "Report saved to {} (charts: {})",
            path.display(),
            charts.display()
        );
    }
    Ok(())
}

async fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, args).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    args: &DashboardArgs,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut state = DashboardState::new(args);

    tx.send(AppEvent::Bootstrap).await?;

    while state.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    state.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    state.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &state))?;

        if state.mode == AppMode::Quit {
            state.running = false;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
