//! Configuration for Lootdrop.
//!
//! Loaded from `~/.lootdrop/config.toml`. Every section and field is optional;
//! anything missing falls back to the defaults in [`WorkflowSettings`].
//!
//! ```toml
//! [app]
//! language = "en"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! catalog = "${HOME}/lootdrop/catalog.toml"
//!
//! [cart]
//! max_items = 4
//!
//! [timing]
//! toast_ms = 7000
//! countdown_ticks = 5
//! countdown_tick_ms = 1000
//! playback_interval_ms = 400
//!
//! [links]
//! server = "https://example.com/join"
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use lootdrop_types::Language;
use lootdrop_types::ui::UiOptions;

/// Environment variable that overrides `[app] language`.
pub const LANGUAGE_ENV_VAR: &str = "LOOTDROP_LANG";

pub const DEFAULT_MAX_CART_ITEMS: usize = 4;
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(7);
pub const DEFAULT_COUNTDOWN_TICKS: u32 = 5;
pub const DEFAULT_COUNTDOWN_TICK: Duration = Duration::from_secs(1);
pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(400);
pub const DEFAULT_SERVER_LINK: &str = "https://www.roblox.com/share?code=moreira&type=Server";

#[derive(Debug, Default, Deserialize)]
pub struct LootdropConfig {
    pub app: Option<AppConfig>,
    pub cart: Option<CartConfig>,
    pub timing: Option<TimingConfig>,
    pub links: Option<LinksConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Interface language tag ("en" or "ka").
    pub language: Option<String>,
    /// Use ASCII-only glyphs for icons and the cursor.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable cursor blinking and other motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Path to a TOML catalog replacing the built-in one. Supports `${VAR}` expansion.
    pub catalog: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CartConfig {
    pub max_items: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimingConfig {
    pub toast_ms: Option<u64>,
    pub countdown_ticks: Option<u32>,
    pub countdown_tick_ms: Option<u64>,
    pub playback_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinksConfig {
    /// Outbound destination offered after a successful transfer. Supports `${VAR}` expansion.
    pub server: Option<String>,
}

/// Resolved workflow constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    pub max_cart_items: usize,
    pub toast_duration: Duration,
    pub countdown_ticks: u32,
    pub countdown_tick: Duration,
    pub playback_interval: Duration,
    pub server_link: String,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            max_cart_items: DEFAULT_MAX_CART_ITEMS,
            toast_duration: DEFAULT_TOAST_DURATION,
            countdown_ticks: DEFAULT_COUNTDOWN_TICKS,
            countdown_tick: DEFAULT_COUNTDOWN_TICK,
            playback_interval: DEFAULT_PLAYBACK_INTERVAL,
            server_link: DEFAULT_SERVER_LINK.to_string(),
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables become empty.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lootdrop").join("config.toml"))
}

impl LootdropConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is `Ok(None)`, not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve and validate workflow constants, filling gaps with defaults.
    pub fn workflow_settings(&self) -> Result<WorkflowSettings, ConfigError> {
        let defaults = WorkflowSettings::default();
        let timing = self.timing.as_ref();

        let max_cart_items = self
            .cart
            .as_ref()
            .and_then(|cart| cart.max_items)
            .unwrap_or(defaults.max_cart_items);
        if max_cart_items == 0 {
            return Err(ConfigError::Invalid {
                field: "cart.max_items",
                reason: "must be at least 1",
            });
        }

        let countdown_tick = timing
            .and_then(|t| t.countdown_tick_ms)
            .map_or(defaults.countdown_tick, Duration::from_millis);
        if countdown_tick.is_zero() {
            return Err(ConfigError::Invalid {
                field: "timing.countdown_tick_ms",
                reason: "must be greater than zero",
            });
        }

        let playback_interval = timing
            .and_then(|t| t.playback_interval_ms)
            .map_or(defaults.playback_interval, Duration::from_millis);
        if playback_interval.is_zero() {
            return Err(ConfigError::Invalid {
                field: "timing.playback_interval_ms",
                reason: "must be greater than zero",
            });
        }

        let server_link = self
            .links
            .as_ref()
            .and_then(|links| links.server.as_deref())
            .map(expand_env_vars)
            .filter(|link| !link.trim().is_empty())
            .unwrap_or(defaults.server_link);

        Ok(WorkflowSettings {
            max_cart_items,
            toast_duration: timing
                .and_then(|t| t.toast_ms)
                .map_or(defaults.toast_duration, Duration::from_millis),
            countdown_ticks: timing
                .and_then(|t| t.countdown_ticks)
                .unwrap_or(defaults.countdown_ticks),
            countdown_tick,
            playback_interval,
            server_link,
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    /// Configured language, if any. Unknown tags are logged and ignored.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        let raw = self.app.as_ref()?.language.as_deref()?;
        parse_language(raw, "config")
    }

    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let raw = self.app.as_ref()?.catalog.as_deref()?;
        let expanded = expand_env_vars(raw);
        let trimmed = expanded.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// Pick the interface language: environment override, then config, then the default.
#[must_use]
pub fn resolve_language(env_value: Option<&str>, config: Option<&LootdropConfig>) -> Language {
    env_value
        .and_then(|raw| parse_language(raw, LANGUAGE_ENV_VAR))
        .or_else(|| config.and_then(LootdropConfig::language))
        .unwrap_or_default()
}

fn parse_language(raw: &str, source: &str) -> Option<Language> {
    match raw.parse::<Language>() {
        Ok(lang) => Some(lang),
        Err(err) => {
            tracing::warn!(source, "{err}");
            None
        }
    }
}
