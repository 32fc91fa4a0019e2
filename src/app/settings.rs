use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::{DashboardArgs, ThemeArg};

pub const CONFIG_DIR_ENV: &str = "CLIMATE_COMPARE_CONFIG_DIR";

/// Preferences that survive between dashboard sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub theme: ThemeArg,
}

/// Loads the saved settings, then applies command-line overrides. With
/// `enable_disk` off nothing is read and no save path is returned.
pub fn load_settings(args: &DashboardArgs, enable_disk: bool) -> (DashboardSettings, Option<PathBuf>) {
    let path = if enable_disk { settings_path() } else { None };
    let mut settings = path
        .as_deref()
        .and_then(read_settings)
        .unwrap_or_default();
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    (settings, path)
}

pub fn read_settings(path: &Path) -> Option<DashboardSettings> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(path: &Path, settings: &DashboardSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(
        std::env::var_os(CONFIG_DIR_ENV),
        std::env::var_os("HOME"),
    )
}

fn resolve_settings_path(config_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(base) = config_dir {
        return Some(PathBuf::from(base).join("settings.json"));
    }
    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("climate-compare")
            .join("settings.json"),
    )
}
