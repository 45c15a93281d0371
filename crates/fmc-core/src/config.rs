//! Configuration types for fmc.
//!
//! [`Config::load`] reads `~/.config/fmc/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r##"
[output]
# Empty means the system temp directory.
dir         = ""
open_viewer = false

[style]
background = "#131722"
foreground = "#d1d4dc"
grid       = "#363c4e"
palette = [
    "#2196f3",
    "#26a69a",
    "#ff9800",
    "#ef5350",
    "#ab47bc",
    "#66bb6a",
    "#ffca28",
    "#5c6bc0",
]
"##;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/fmc/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated artifacts; empty means the system temp dir.
    #[serde(default)]
    pub dir: String,
    /// Launch the platform viewer after every successful render.
    #[serde(default)]
    pub open_viewer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            open_viewer: false,
        }
    }
}

/// `[style]` section of `config.toml` — colours handed to the renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_grid")]
    pub grid: String,
    /// Series/slice colours, cycled when the series is longer than the
    /// palette.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_background() -> String {
    "#131722".to_string()
}
fn default_foreground() -> String {
    "#d1d4dc".to_string()
}
fn default_grid() -> String {
    "#363c4e".to_string()
}
fn default_palette() -> Vec<String> {
    [
        "#2196f3", "#26a69a", "#ff9800", "#ef5350", "#ab47bc", "#66bb6a", "#ffca28", "#5c6bc0",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
            grid: default_grid(),
            palette: default_palette(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fmc/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fmc")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
