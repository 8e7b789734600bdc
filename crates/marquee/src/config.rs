use crate::carousel::state::{SlideLink, SlideTitle};
use crate::motion::MotionPreference;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SlideConfig {
    pub title: SlideTitle,
    pub link: Option<SlideLink>,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AutoAdvanceConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for AutoAdvanceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
    #[serde(default)]
    pub auto_advance: AutoAdvanceConfig,
    /// The host-environment motion preference. Watched for changes like the
    /// rest of the file, so flipping it takes effect without a restart.
    #[serde(default)]
    pub motion: MotionPreference,
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
        ProjectDirs::from("org", "marquee", "marquee").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("MARQUEE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Load the config, falling back to the built-in demo deck whenever the
/// result would leave the carousel without a single slide.
pub fn load_or_setup() -> Config {
    match load_config() {
        Ok(config) if !config.slides.is_empty() => config,
        Ok(config) => {
            log::info!("no slides configured, using the demo deck");
            Config {
                slides: demo_slides(),
                ..config
            }
        }
        Err(e) => {
            log::warn!("failed to load config ({e}), using the demo deck");
            Config {
                slides: demo_slides(),
                auto_advance: AutoAdvanceConfig {
                    enabled: true,
                    ..AutoAdvanceConfig::default()
                },
                motion: MotionPreference::default(),
            }
        }
    }
}

fn demo_slides() -> Vec<SlideConfig> {
    vec![
        SlideConfig {
            title: SlideTitle::new("Spring sale"),
            link: Some(SlideLink::new("/sale/spring")),
            body: "Up to 40% off selected items.".to_string(),
        },
        SlideConfig {
            title: SlideTitle::new("New arrivals"),
            link: Some(SlideLink::new("/collections/new")),
            body: "Fresh colors for the season.".to_string(),
        },
        SlideConfig {
            title: SlideTitle::new("Free shipping"),
            link: None,
            body: "On every order over 50.".to_string(),
        },
    ]
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

/// Watch the config file and emit [`AppEvent::ConfigReload`] on changes.
///
/// This is also the environment-change path for the motion preference: a
/// reload re-reads `motion` and the app re-evaluates the auto-advance timer.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Cannot watch config: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    // the directory has to exist before notify can watch it
    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Cannot create config directory {}: {}", config_dir.display(), e);
        return;
    }

    // notify delivers on its own thread; bridge into the async world
    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    );
    let mut watcher = match watcher {
        Ok(w) => w,
        Err(e) => {
            log::error!("Cannot create file watcher: {}", e);
            return;
        }
    };
    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Cannot watch {}: {}", config_dir.display(), e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::error!("Watch error: {}", e);
                continue;
            }
        };

        let relevant = matches!(
            event.kind,
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
        ) && event.paths.iter().any(|p| p == &config_path);

        if relevant && tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_toml(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn default_config_parses() {
        let config = parse_toml(DEFAULT_CONFIG);
        assert_eq!(config.slides.len(), 3);
        assert!(config.auto_advance.enabled);
        assert_eq!(config.auto_advance.interval_ms, 5000);
        assert_eq!(config.motion, MotionPreference::NoPreference);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = parse_toml("[[slides]]\ntitle = \"Only one\"\n");
        assert_eq!(config.slides.len(), 1);
        assert!(config.slides[0].link.is_none());
        assert!(!config.auto_advance.enabled);
        assert_eq!(config.auto_advance.interval_ms, 5000);
        assert_eq!(config.motion, MotionPreference::NoPreference);
    }

    #[test]
    fn reduced_motion_round_trips_through_toml() {
        let config = parse_toml("motion = \"reduce\"\n");
        assert_eq!(config.motion, MotionPreference::Reduce);
    }

    #[test]
    fn demo_deck_is_usable() {
        let slides = demo_slides();
        assert!(slides.len() >= 2);
        assert!(slides.iter().all(|s| !s.title.to_string().is_empty()));
    }
}
