//! Application initialization for the App.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use lootdrop_config::{ConfigError, LootdropConfig, WorkflowSettings};
use lootdrop_types::ui::{UiOptions, View};
use lootdrop_types::{Catalog, CatalogError, Language};

use super::App;
use crate::cart::Cart;
use crate::state::Screen;
use crate::toast::Toast;

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

impl App {
    #[must_use]
    pub fn new(
        settings: WorkflowSettings,
        catalog: Catalog,
        language: Language,
        ui_options: UiOptions,
    ) -> Self {
        Self {
            cart: Cart::new(settings.max_cart_items),
            settings,
            catalog,
            toast: Toast::new(),
            language,
            screen: Screen::mount(View::Catalog),
            ui_options,
            last_frame: Instant::now(),
            ui_clock: Duration::ZERO,
            status: None,
            outbound: None,
            should_quit: false,
        }
    }

    /// Build the session from an optional config file and an already resolved language.
    pub fn from_config(
        config: Option<&LootdropConfig>,
        language: Language,
    ) -> Result<Self, InitError> {
        let Some(config) = config else {
            info!(%language, "Starting with default settings");
            return Ok(Self::new(
                WorkflowSettings::default(),
                Catalog::builtin(),
                language,
                UiOptions::default(),
            ));
        };

        let settings = config.workflow_settings()?;
        let catalog = match config.catalog_path() {
            Some(path) => load_catalog(path)?,
            None => Catalog::builtin(),
        };
        info!(
            %language,
            items = catalog.len(),
            max_cart_items = settings.max_cart_items,
            "Starting"
        );
        Ok(Self::new(settings, catalog, language, config.ui_options()))
    }
}

fn load_catalog(path: PathBuf) -> Result<Catalog, InitError> {
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(InitError::CatalogRead { path, source }),
    };
    Catalog::from_toml_str(&raw).map_err(|source| InitError::Catalog { path, source })
}
