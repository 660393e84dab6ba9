//! TOML-based configuration persistence for the compositor.
//!
//! Reads and writes `CompositorConfig` to the platform-appropriate config
//! file:
//! - Linux:    `~/.config/prism/config.toml` (honoring `XDG_CONFIG_HOME`)
//! - macOS:    `~/Library/Application Support/Prism/config.toml`
//! - Windows:  `%APPDATA%\Prism\config.toml`
//!
//! The config describes the virtual output roster the headless binary seeds:
//! each entry names an output, places it in the shared layout space, and
//! lists the modes it advertises. Fields annotated with
//! `#[serde(default = "...")]` fall back to sensible values when absent, so
//! the compositor works on first run and when loading a config written by an
//! older build.

use std::path::PathBuf;

use prism_core::Mode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositorConfig {
    pub compositor: CompositorSection,
    /// The output roster the headless binary seeds at startup.
    #[serde(default)]
    pub outputs: Vec<OutputEntry>,
}

/// General compositor behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompositorSection {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// Name of the seat the command surface drives.
    #[serde(default = "default_seat_name")]
    pub seat_name: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// One output in the seeded roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputEntry {
    /// Stable output name (e.g. `VIRT-1`).
    pub name: String,
    /// Horizontal position of the top-left corner in the shared layout space.
    #[serde(default)]
    pub x: i32,
    /// Vertical position of the top-left corner in the shared layout space.
    #[serde(default)]
    pub y: i32,
    /// Advertised modes in discovery order. An output with no modes gets no
    /// placement size and stays invisible to spatial resolution.
    #[serde(default)]
    pub modes: Vec<Mode>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_seat_name() -> String {
    "seat0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            compositor: CompositorSection::default(),
            outputs: Vec::new(),
        }
    }
}

impl Default for CompositorSection {
    fn default() -> Self {
        Self {
            version: default_version(),
            seat_name: default_seat_name(),
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `CompositorConfig` from disk, returning `CompositorConfig::default()`
/// if the file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<CompositorConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: CompositorConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CompositorConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk.
///
/// Creates the config directory and file if they do not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &CompositorConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("prism"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/Prism
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Prism")
        })
    }

    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Prism"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
