//! Asset manifest configuration
//!
//! Names the bundled scripts and stylesheets every [`Document`](crate::Document)
//! links by default. Embedders replace it to ship their own assets.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Path segment stepping up one directory
pub const PARENT_DIR: &str = "..";

/// Bundled asset manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Directory holding all bundled assets, relative to the output root
    pub asset_root: String,
    /// Script directory under `asset_root`
    pub script_dir: String,
    /// Script file names, in load order
    pub scripts: Vec<String>,
    /// Stylesheet directory under `asset_root`
    pub style_dir: String,
    /// Stylesheet file names, in cascade order
    pub stylesheets: Vec<String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            asset_root: "viewer".to_string(),
            script_dir: "js".to_string(),
            scripts: vec![
                "jquery-2.2.3.min.js".to_string(),
                "bootstrap.min.js".to_string(),
                "viewer.js".to_string(),
            ],
            style_dir: "css".to_string(),
            stylesheets: vec!["bootstrap.min.css".to_string(), "viewer.css".to_string()],
        }
    }
}

/// Manifest loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AssetManifest {
    /// Parse a manifest from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a manifest from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Script paths as seen from a page `level` directories deep
    pub fn script_paths(&self, level: usize) -> Vec<String> {
        self.asset_paths(level, &self.script_dir, &self.scripts)
    }

    /// Stylesheet paths as seen from a page `level` directories deep
    pub fn stylesheet_paths(&self, level: usize) -> Vec<String> {
        self.asset_paths(level, &self.style_dir, &self.stylesheets)
    }

    fn asset_paths(&self, level: usize, dir: &str, files: &[String]) -> Vec<String> {
        files
            .iter()
            .map(|file| nested_path(level, [self.asset_root.as_str(), dir, file.as_str()]))
            .collect()
    }
}

/// Join `segments` with `/` behind `level` parent-directory steps.
///
/// Empty segments are skipped, so an empty `asset_root` links assets
/// directly.
pub fn nested_path<'a, I>(level: usize, segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    std::iter::repeat_n(PARENT_DIR, level)
        .chain(segments.into_iter().filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join("/")
}
