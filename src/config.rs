//! Package list configuration.
//!
//! Packages come from, in order: an explicit file, `~/.workout/packages.toml`,
//! or the built-in demo list. Files ending in `.json` are read as JSON,
//! anything else as TOML:
//!
//! ```toml
//! [[package]]
//! code = "RUN"
//! data = [15000, 1, 75]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::package::Package;

/// The packages to process, in order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(rename = "package", default)]
    pub packages: Vec<Package>,
}

impl Config {
    /// Resolve the package list.
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// missing the built-in demo list is used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        Self::resolve(explicit, Self::path())
    }

    fn resolve(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<Self, String> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = default
            && path.exists()
        {
            return Self::from_file(&path);
        }

        tracing::debug!("no package file; using built-in packages");
        Ok(Self::builtin())
    }

    /// Read a package file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents)
                .map_err(|e| format!("invalid packages at {}: {e}", path.display()))?
        } else {
            toml::from_str(&contents)
                .map_err(|e| format!("invalid packages at {}: {e}", path.display()))?
        };

        tracing::debug!(
            path = %path.display(),
            count = config.packages.len(),
            "loaded packages"
        );
        Ok(config)
    }

    /// The default package file path: `~/.workout/packages.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".workout").join("packages.toml"))
    }

    /// One reading of each kind.
    pub fn builtin() -> Self {
        Self {
            packages: vec![
                Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
                Package::new("RUN", [15_000.0, 1.0, 75.0]),
                Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
            ],
        }
    }
}
