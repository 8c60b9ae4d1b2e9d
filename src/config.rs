use std::path::PathBuf;

use crate::theme::ThemeMode;

pub const DEFAULT_DATA_FILE: &str = "firta_plan.json";
pub const DEFAULT_CLOCK_SIZE: f32 = 600.0;
const MIN_CLOCK_SIZE: f32 = 360.0;
const MAX_CLOCK_SIZE: f32 = 1200.0;

/// Resolved startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub theme: ThemeMode,
    pub clock_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            theme: ThemeMode::Light,
            clock_size: DEFAULT_CLOCK_SIZE,
        }
    }
}

/// Return the path to the settings file.
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".config/firta-plan/settings.md")
}

/// Parse `~/.config/firta-plan/settings.md` on top of `base`.
///
/// Format:
/// ```markdown
/// # planner
/// - data-file: firta_plan.json
/// - theme: dark
/// - clock-size: 600
/// ```
///
/// Only bullets under a `# planner` heading are read. Unknown keys and
/// unparsable values are ignored; clock-size is clamped to 360..=1200.
pub fn parse_settings(content: &str, base: Settings) -> Settings {
    let mut settings = base;
    let mut in_planner = false;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(heading) = trimmed.strip_prefix("# ") {
            in_planner = heading.trim().eq_ignore_ascii_case("planner");
            continue;
        }

        if !in_planner {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("- data-file:") {
            let path = rest.trim();
            if !path.is_empty() {
                settings.data_file = PathBuf::from(path);
            }
        } else if let Some(rest) = trimmed.strip_prefix("- theme:") {
            if let Some(mode) = ThemeMode::parse(rest) {
                settings.theme = mode;
            }
        } else if let Some(rest) = trimmed.strip_prefix("- clock-size:") {
            if let Ok(n) = rest.trim().parse::<f32>() {
                if n.is_finite() {
                    settings.clock_size = n.clamp(MIN_CLOCK_SIZE, MAX_CLOCK_SIZE);
                }
            }
        }
    }

    settings
}

/// Apply `FIRTA_PLAN_FILE` / `FIRTA_PLAN_THEME` style overrides. `lookup`
/// stands in for `std::env::var` so callers can feed fixed values.
pub fn apply_env(mut settings: Settings, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    if let Some(path) = lookup("FIRTA_PLAN_FILE").filter(|s| !s.trim().is_empty()) {
        settings.data_file = PathBuf::from(path.trim());
    }
    if let Some(raw) = lookup("FIRTA_PLAN_THEME") {
        match ThemeMode::parse(&raw) {
            Some(mode) => settings.theme = mode,
            None => tracing::warn!(value = %raw, "ignoring unknown FIRTA_PLAN_THEME"),
        }
    }
    settings
}

/// Defaults, then the settings file if present, then the environment.
pub fn load() -> Settings {
    let path = config_file_path();
    let settings = match std::fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "settings file found");
            parse_settings(&content, Settings::default())
        }
        Err(_) => Settings::default(),
    };
    apply_env(settings, |key| std::env::var(key).ok())
}
