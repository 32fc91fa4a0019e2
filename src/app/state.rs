use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    analysis::{ComparisonReport, ComparisonRequest, run_comparison},
    app::{
        events::AppEvent,
        export::export_report,
        settings::{DashboardSettings, load_settings, save_settings},
    },
    cli::DashboardArgs,
    data::{air_quality::AirQualityClient, weather::WeatherClient},
    domain::{Location, Parameter, Selection},
    error::ValidationError,
};

mod input;
mod methods_run;
#[cfg(test)]
mod tests;

pub use input::{Prompt, PromptField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

/// Raw query inputs, validated only when a run starts.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryForm {
    pub parameter: Parameter,
    pub start: String,
    pub end: String,
    pub threshold: String,
}

#[derive(Debug)]
pub struct DashboardState {
    pub mode: AppMode,
    pub running: bool,
    pub selection: Selection,
    pub form: QueryForm,
    pub report: Option<ComparisonReport>,
    pub notice: Option<String>,
    pub last_error: Option<String>,
    pub prompt: Option<Prompt>,
    pub run_id: u64,
    pub settings: DashboardSettings,
    pub settings_path: Option<PathBuf>,
    pub export_path: PathBuf,
    weather: WeatherClient,
    air_quality: AirQualityClient,
}

impl DashboardState {
    pub fn new(args: &DashboardArgs) -> Self {
        Self::with_settings(args, true)
    }

    /// Builds the state; with `enable_disk` off the theme preference is
    /// neither read nor written.
    pub fn with_settings(args: &DashboardArgs, enable_disk: bool) -> Self {
        let (settings, settings_path) = load_settings(args, enable_disk);
        let mut selection = Selection::new();
        for location in &args.locations {
            if selection.add(*location).is_err() {
                break;
            }
        }

        Self {
            mode: AppMode::Idle,
            running: true,
            selection,
            form: QueryForm {
                parameter: Parameter::from_id(&args.parameter),
                start: args.start.clone(),
                end: args.end.clone(),
                threshold: args.threshold_text(),
            },
            report: None,
            notice: None,
            last_error: None,
            prompt: None,
            run_id: 0,
            settings,
            settings_path,
            export_path: args.export_path_or_default(),
            weather: WeatherClient::with_base_url(args.backend_url.clone()),
            air_quality: AirQualityClient::with_base_url(args.backend_url.clone()),
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx),
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::RunSucceeded { run_id, report } => self.handle_run_succeeded(run_id, *report),
            AppEvent::RunFailed { run_id, message } => self.handle_run_failed(run_id, message),
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
        Ok(())
    }

    pub(crate) fn handle_bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let ready = !self.selection.is_empty()
            && !self.form.start.trim().is_empty()
            && !self.form.end.trim().is_empty();
        if ready {
            self.start_run(tx);
        } else {
            self.notice = Some("Press 'a' to add a location, then 'g' to get data.".to_string());
        }
    }

    pub fn add_location(&mut self, location: Location) {
        match self.selection.add(location) {
            Ok(idx) => self.notice = Some(format!("Added location {}: {location}", idx + 1)),
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn remove_location(&mut self, index: usize) {
        if let Some(removed) = self.selection.remove(index) {
            self.notice = Some(format!("Removed {removed}"));
        }
    }

    pub fn clear_locations(&mut self) {
        self.selection.clear();
        self.notice = Some("Cleared all locations".to_string());
    }

    pub fn cycle_parameter(&mut self, direction: i8) {
        self.form.parameter = self.form.parameter.cycled(direction);
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.persist_settings();
    }

    pub(crate) fn persist_settings(&mut self) {
        if let Some(path) = &self.settings_path
            && let Err(err) = save_settings(path, &self.settings)
        {
            warn!("failed to save settings: {err:#}");
            self.notice = Some(format!("Failed to save settings: {err}"));
        }
    }

    pub fn export(&mut self) {
        let Some(report) = &self.report else {
            self.notice = Some("Nothing to export yet. Get data first.".to_string());
            return;
        };
        self.notice = Some(match export_report(&self.export_path, report) {
            Ok(charts) => format!(
                "Report saved to {} (charts: {})",
                self.export_path.display(),
                charts.display()
            ),
            Err(err) => format!("Export failed: {err:#}"),
        });
    }

    /// Validates the form, or explains why the run cannot start.
    pub fn build_request(&self) -> Result<ComparisonRequest, ValidationError> {
        ComparisonRequest::new(
            self.selection.locations(),
            self.form.parameter.clone(),
            &self.form.start,
            &self.form.end,
            &self.form.threshold,
        )
    }
}
