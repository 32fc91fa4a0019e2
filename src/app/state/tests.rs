use super::*;
use crate::test_support::{dashboard_args, location, sample_report};
use tokio::sync::mpsc;

fn state() -> DashboardState {
    DashboardState::with_settings(&dashboard_args(), false)
}

fn key(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

fn code(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn command_from_char_maps_known_commands() {
    assert_eq!(input::command_from_char('q'), Some(input::KeyCommand::Quit));
    assert_eq!(
        input::command_from_char('2'),
        Some(input::KeyCommand::RemoveLocation(1))
    );
    assert_eq!(
        input::command_from_char('P'),
        Some(input::KeyCommand::PreviousParameter)
    );
    assert_eq!(input::command_from_char('z'), None);
}

#[test]
fn new_state_takes_form_from_args() {
    let mut args = dashboard_args();
    args.locations = vec![location(1.0, 2.0)];
    let state = DashboardState::with_settings(&args, false);

    assert_eq!(state.mode, AppMode::Idle);
    assert_eq!(state.selection.len(), 1);
    assert_eq!(state.form.threshold, "30");
    assert_eq!(state.form.parameter.id, "T2M");
    assert!(state.settings_path.is_none());
}

#[tokio::test]
async fn typing_a_location_adds_it_to_the_selection() {
    let mut state = state();
    let (tx, _rx) = mpsc::channel(4);

    state.handle_input(key('a'), &tx).await.expect("open prompt");
    for ch in "12.97,77.59".chars() {
        state.handle_input(key(ch), &tx).await.expect("type");
    }
    state.handle_input(code(KeyCode::Enter), &tx).await.expect("submit");

    assert!(state.prompt.is_none());
    assert_eq!(state.selection.locations(), &[location(12.97, 77.59)]);
}

#[tokio::test]
async fn third_location_is_refused_with_notice() {
    let mut state = state();
    state.add_location(location(1.0, 1.0));
    state.add_location(location(2.0, 2.0));
    let (tx, _rx) = mpsc::channel(4);

    state.handle_input(key('a'), &tx).await.expect("add key");

    assert!(state.prompt.is_none());
    assert_eq!(state.selection.len(), 2);
    assert!(
        state
            .notice
            .as_deref()
            .is_some_and(|n| n.contains("up to 2 locations"))
    );
}

#[test]
fn invalid_location_text_leaves_selection_unchanged() {
    let mut state = state();
    state.open_prompt(PromptField::Location);
    if let Some(prompt) = state.prompt.as_mut() {
        prompt.buffer = "95,10".to_string();
    }
    state.submit_prompt();

    assert!(state.selection.is_empty());
    assert!(state.notice.is_some());
}

#[test]
fn escape_cancels_prompt_without_changes() {
    let mut state = state();
    state.open_prompt(PromptField::StartDate);
    state.handle_prompt_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    state.handle_prompt_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

    assert!(state.prompt.is_none());
    assert_eq!(state.form.start, "2024-06-01");
}

#[test]
fn editing_threshold_to_empty_clears_it() {
    let mut state = state();
    state.add_location(location(1.0, 1.0));
    state.open_prompt(PromptField::Threshold);
    for _ in 0..4 {
        state.handle_prompt_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    }
    state.submit_prompt();
    assert_eq!(state.form.threshold, "");
    assert_eq!(state.build_request().map(|r| r.threshold), Ok(None));
}

#[tokio::test]
async fn get_data_without_locations_reports_validation_error() {
    let mut state = state();
    let (tx, _rx) = mpsc::channel(4);

    state.handle_input(key('g'), &tx).await.expect("get data");

    assert_eq!(state.run_id, 0);
    assert_eq!(state.mode, AppMode::Idle);
    assert_eq!(
        state.notice.as_deref(),
        Some("Please add at least one location.")
    );
}

#[tokio::test]
async fn start_after_end_is_rejected_before_any_request() {
    let mut state = state();
    state.add_location(location(1.0, 1.0));
    state.form.start = "2024-06-05".to_string();
    let (tx, _rx) = mpsc::channel(4);

    state.start_run(&tx);

    assert_eq!(state.run_id, 0);
    assert_eq!(
        state.notice.as_deref(),
        Some("Start date must be before end date.")
    );
}

#[test]
fn stale_run_results_are_discarded() {
    let mut state = state();
    state.run_id = 2;
    state.mode = AppMode::Loading;

    state.handle_run_succeeded(1, sample_report());
    assert!(state.report.is_none());
    assert_eq!(state.mode, AppMode::Loading);

    state.handle_run_failed(1, "boom".to_string());
    assert!(state.last_error.is_none());

    state.handle_run_succeeded(2, sample_report());
    assert!(state.report.is_some());
    assert_eq!(state.mode, AppMode::Ready);
}

#[test]
fn failed_run_keeps_previous_report() {
    let mut state = state();
    state.run_id = 1;
    state.handle_run_succeeded(1, sample_report());

    state.run_id = 2;
    state.handle_run_failed(2, "location 1: weather request returned status 500".to_string());

    assert_eq!(state.mode, AppMode::Error);
    assert!(state.report.is_some());
    assert_eq!(
        state.last_error.as_deref(),
        Some("Error during analysis: location 1: weather request returned status 500")
    );
}

#[tokio::test]
async fn starting_a_run_bumps_the_run_id() {
    let mut state = state();
    state.add_location(location(1.0, 1.0));
    // Nothing listens on this port; the spawned run just fails later.
    state.weather = WeatherClient::with_base_url("http://127.0.0.1:9");
    state.air_quality = AirQualityClient::with_base_url("http://127.0.0.1:9");
    let (tx, _rx) = mpsc::channel(4);

    state.start_run(&tx);
    state.start_run(&tx);

    assert_eq!(state.run_id, 2);
    assert_eq!(state.mode, AppMode::Loading);
}

#[tokio::test]
async fn quit_keys_emit_quit_event() {
    let mut state = state();
    let (tx, mut rx) = mpsc::channel(4);

    state.handle_input(key('q'), &tx).await.expect("q");
    assert!(matches!(rx.recv().await, Some(AppEvent::Quit)));

    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    state.handle_input(ctrl_c, &tx).await.expect("ctrl+c");
    assert!(matches!(rx.recv().await, Some(AppEvent::Quit)));

    state.handle_event(AppEvent::Quit, &tx).await.expect("quit");
    assert_eq!(state.mode, AppMode::Quit);
}

#[test]
fn remove_and_clear_locations() {
    let mut state = state();
    state.add_location(location(1.0, 1.0));
    state.add_location(location(2.0, 2.0));

    state.remove_location(0);
    assert_eq!(state.selection.locations(), &[location(2.0, 2.0)]);

    state.clear_locations();
    assert!(state.selection.is_empty());
}

#[test]
fn theme_toggle_without_disk_only_changes_memory() {
    let mut state = state();
    state.toggle_theme();
    assert_eq!(state.settings.theme, crate::cli::ThemeArg::Dark);
    assert!(state.notice.is_none());
}

#[test]
fn theme_toggle_persists_when_path_is_known() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    let mut state = state();
    state.settings_path = Some(path.clone());

    state.toggle_theme();

    let saved = crate::app::settings::read_settings(&path).expect("saved settings");
    assert_eq!(saved.theme, crate::cli::ThemeArg::Dark);
}

#[test]
fn export_without_report_explains_itself() {
    let mut state = state();
    state.export();
    assert_eq!(
        state.notice.as_deref(),
        Some("Nothing to export yet. Get data first.")
    );
}

#[test]
fn export_writes_report_to_configured_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut state = state();
    state.export_path = dir.path().join("report.txt");
    state.report = Some(sample_report());

    state.export();

    assert!(state.export_path.exists());
    assert!(dir.path().join("report.svg").exists());
    assert!(
        state
            .notice
            .as_deref()
            .is_some_and(|n| n.starts_with("Report saved to"))
    );
}
