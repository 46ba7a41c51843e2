//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use luxe_commerce::catalog::Catalog;
use luxe_commerce::{StoreConfig, Storefront};
use luxe_observability::{LogLevel, SessionId, StructuredLogger};

use crate::config::{self, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Shared read-only catalog.
    pub catalog: Arc<Catalog>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (config::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StoreConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Arc::new(Catalog::builtin()),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StoreConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = config::load(&config_path) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Start a fresh storefront session.
    ///
    /// Session logs go to stderr in verbose mode and are dropped otherwise.
    /// Fails when the configured currency is not the catalog's.
    pub fn storefront(&self) -> Result<Storefront> {
        let logger = if self.output.is_verbose() && !self.output.is_json() {
            StructuredLogger::new(SessionId::generate())
                .with_format(self.config.log_format)
                .with_min_level(self.config.log_level.min(LogLevel::Debug))
        } else {
            StructuredLogger::disabled()
        };

        let store = Storefront::new(Arc::clone(&self.catalog), self.config.clone())
            .with_context(|| match &self.config_path {
                Some(path) => format!("Invalid store settings in {}", path.display()),
                None => "Invalid store settings".to_string(),
            })?;
        Ok(store.with_logger(logger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: StoreConfig) -> Context {
        Context {
            config,
            config_path: Some(PathBuf::from("luxe.toml")),
            output: Output::new(false, false),
            cwd: PathBuf::from("."),
            catalog: Arc::new(Catalog::builtin()),
        }
    }

    #[test]
    fn test_storefront_reports_foreign_currency() {
        let config = StoreConfig::from_toml_str("currency = \"GBP\"\n").unwrap();
        let err = context(config).storefront().err().unwrap();
        assert!(err.to_string().contains("luxe.toml"));
        assert!(format!("{:#}", err).contains("Currency mismatch"));
    }

    #[test]
    fn test_storefront_opens_with_defaults() {
        let mut store = context(StoreConfig::default()).storefront().unwrap();
        store.add_to_cart_by_id("1", 2, None, None).unwrap();
        assert_eq!(store.cart_count(), 2);
    }
}
