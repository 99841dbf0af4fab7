use std::{collections::HashMap, fs, path::Path, path::PathBuf};

pub const SETTINGS_FILE: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub seed_file: Option<PathBuf>,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            seed_file: None,
            window_title: "Course Roster".into(),
        }
    }
}

/// Defaults, then `roster.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("log_filter") {
                    settings.log_filter = v.clone();
                }
                if let Some(v) = file_cfg.get("seed_file") {
                    settings.seed_file = Some(PathBuf::from(v));
                }
                if let Some(v) = file_cfg.get("window_title") {
                    settings.window_title = v.clone();
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings file")
            }
        }
    }

    if let Some(v) = env("ROSTER_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = env("ROSTER_SEED_FILE") {
        settings.seed_file = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__SEED_FILE") {
        settings.seed_file = Some(PathBuf::from(v));
    }

    if let Some(v) = env("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }

    settings
}
