use crate::gui::dial::{DEFAULT_SELECTIONS, DEFAULT_TEXT_SIZE, MAX_SELECTIONS};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
pub struct ParseColorError(String);

/// Hex color override, e.g. `"#00c000"` or `"#00c000ff"`. The leading `#`
/// is optional.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct ColorSpec(Srgba<f64>);

impl ColorSpec {
    pub fn srgba(&self) -> Srgba<f64> {
        self.0
    }
}

impl FromStr for ColorSpec {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        let (r, g, b, a) = match hex.len() {
            6 => (channel(0)?, channel(2)?, channel(4)?, 255),
            8 => (channel(0)?, channel(2)?, channel(4)?, channel(6)?),
            _ => return Err(ParseColorError(s.to_string())),
        };
        Ok(Self(Srgba::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.0.into_components();
        let byte = |c: f64| (c * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(r),
            byte(g),
            byte(b),
            byte(a)
        )
    }
}

/// Optional overrides for the GTK theme lookup.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Colors {
    pub neutral: Option<ColorSpec>,
    pub highlight: Option<ColorSpec>,
    pub text: Option<ColorSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_selections")]
    pub selections: usize,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default)]
    pub colors: Colors,
}

impl Config {
    /// Selection count clamped to the range the fixed 45° spacing supports.
    pub fn selections(&self) -> usize {
        if !(1..=MAX_SELECTIONS).contains(&self.selections) {
            log::warn!(
                "selections = {} out of range, clamping to 1..={}",
                self.selections,
                MAX_SELECTIONS
            );
        }
        self.selections.clamp(1, MAX_SELECTIONS)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selections: default_selections(),
            text_size: default_text_size(),
            colors: Colors::default(),
        }
    }
}

fn default_selections() -> usize {
    DEFAULT_SELECTIONS
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "fandial", "fandial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("FANDIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Failed to write default config: {}", e),
        }
    }

    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spec_parsing() {
        let cases = vec![
            ("\"#00ff00\"", Srgba::new(0.0, 1.0, 0.0, 1.0)),
            ("\"00ff00\"", Srgba::new(0.0, 1.0, 0.0, 1.0)),
            ("\"#000000ff\"", Srgba::new(0.0, 0.0, 0.0, 1.0)),
            ("\"#FF0000\"", Srgba::new(1.0, 0.0, 0.0, 1.0)),
        ];

        for (json, expected) in cases {
            let deserialized: ColorSpec = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized.srgba(), expected);
        }
    }

    #[test]
    fn test_color_spec_rejects_garbage() {
        for bad in ["\"\"", "\"#12345\"", "\"#gggggg\"", "\"green\""] {
            assert!(serde_json::from_str::<ColorSpec>(bad).is_err());
        }
    }

    #[test]
    fn test_color_spec_alpha_roundtrip() {
        let spec: ColorSpec = "#00c00080".parse().unwrap();
        assert_eq!(spec.to_string(), "#00c00080");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.selections(), 4);
        assert_eq!(config.text_size, 40.0);
        assert!(config.colors.neutral.is_none());
    }

    #[test]
    fn test_selections_clamped() {
        let config = Config {
            selections: 20,
            ..Config::default()
        };
        assert_eq!(config.selections(), 8);

        let config = Config {
            selections: 0,
            ..Config::default()
        };
        assert_eq!(config.selections(), 1);
    }

    #[test]
    fn test_embedded_default_config_parses() {
        let config: Config = toml_from_str(DEFAULT_CONFIG);
        assert_eq!(config.selections(), 4);
    }

    fn toml_from_str(s: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(s, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
