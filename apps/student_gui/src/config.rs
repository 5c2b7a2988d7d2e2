use std::{
    fs, io,
    path::{Path, PathBuf},
};

use client_core::DEFAULT_API_BASE_URL;
use serde::Deserialize;

const LOCAL_SETTINGS_FILE: &str = "student_gui.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
}

/// Defaults, then the first settings file found, then environment overrides.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let candidates = match config_path {
        Some(path) => vec![path.to_path_buf()],
        None => default_settings_paths(),
    };
    if let Some(file_cfg) = candidates.iter().find_map(|path| read_settings_file(path)) {
        apply_file_settings(&mut settings, file_cfg);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn default_settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_SETTINGS_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("student_gui").join("config.toml"));
    }
    paths
}

fn read_settings_file(path: &Path) -> Option<FileSettings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), "skipping unreadable settings file: {err}");
            return None;
        }
    };

    match parse_settings(&raw) {
        Ok(file_cfg) => {
            tracing::info!(path = %path.display(), "loaded settings file");
            Some(file_cfg)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "skipping malformed settings file: {err}");
            None
        }
    }
}

fn parse_settings(raw: &str) -> Result<FileSettings, toml::de::Error> {
    toml::from_str(raw)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.api_base_url.filter(|v| !v.trim().is_empty()) {
        settings.api_base_url = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for name in ["STUDENTS_API_URL", "APP__API_BASE_URL"] {
        if let Some(v) = lookup(name).filter(|v| !v.trim().is_empty()) {
            settings.api_base_url = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn defaults_to_local_student_api() {
        assert_eq!(
            Settings::default().api_base_url,
            "http://localhost:8082/api/students"
        );
    }

    #[test]
    fn file_value_replaces_default_but_blank_is_ignored() {
        let mut settings = Settings::default();
        apply_file_settings(
            &mut settings,
            parse_settings(r#"api_base_url = """#).expect("parse blank"),
        );
        assert_eq!(settings, Settings::default());

        apply_file_settings(
            &mut settings,
            parse_settings(r#"api_base_url = "http://records.internal/api/students""#)
                .expect("parse"),
        );
        assert_eq!(settings.api_base_url, "http://records.internal/api/students");
    }

    #[test]
    fn app_prefixed_env_var_wins_over_plain_one() {
        let vars = HashMap::from([
            ("STUDENTS_API_URL", "http://plain:1/api/students"),
            ("APP__API_BASE_URL", "http://prefixed:2/api/students"),
        ]);
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(settings.api_base_url, "http://prefixed:2/api/students");
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(parse_settings("api_base_url = [").is_err());
    }

    #[test]
    fn explicit_settings_file_is_loaded() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let temp_root = env::temp_dir().join(format!("student_gui_config_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");
        let path = temp_root.join("custom.toml");
        fs::write(&path, "api_base_url = \"http://10.0.0.5:9000/api/students\"\n")
            .expect("write settings");

        let file_cfg = read_settings_file(&path).expect("settings file");
        assert_eq!(
            file_cfg.api_base_url.as_deref(),
            Some("http://10.0.0.5:9000/api/students")
        );
        assert!(read_settings_file(&temp_root.join("missing.toml")).is_none());

        fs::remove_dir_all(temp_root).expect("cleanup");
    }
}
