//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use sock_commerce::events::StorefrontEvent;
use sock_commerce::Storefront;
use sock_observability::StructuredLogger;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Session logger.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output, logger: StructuredLogger) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            logger
                .debug_builder("Loaded config")
                .field("path", path.display().to_string())
                .emit();
        }

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Build a storefront whose state changes are logged.
    pub fn storefront(&self) -> Result<Storefront> {
        let mut store = self.config.storefront()?;
        store.subscribe(event_logger(self.logger.clone()));
        Ok(store)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

/// Subscriber that writes every storefront event to the session log.
pub fn event_logger(logger: StructuredLogger) -> impl FnMut(&StorefrontEvent) {
    move |event: &StorefrontEvent| {
        logger
            .debug_builder("Storefront event")
            .field("event", event.kind())
            .field_json("payload", event)
            .emit();
    }
}

/// Find a config file in the directory tree, starting at `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("socks.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join("socks.toml")));
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("socks.json"), "{}").unwrap();
        std::fs::write(dir.path().join("socks.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()), Some(dir.path().join("socks.toml")));
    }

    #[test]
    fn test_resolve() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(cwd, "x.json"), PathBuf::from("/work/x.json"));
        assert_eq!(resolve(cwd, "/tmp/x.json"), PathBuf::from("/tmp/x.json"));
    }
}
