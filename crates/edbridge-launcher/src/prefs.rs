//! Preferences: the flat string/bool settings the launcher is driven by.
//!
//! The launcher never assumes where settings live. It talks to a
//! [`PrefsStore`] collaborator exposing the host's key/value settings API;
//! embedding hosts bring their own store, the CLI uses the file-backed
//! [`TomlPrefs`], and tests use [`MemoryPrefs`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use edbridge_core::prelude::*;
use edbridge_core::{CodeAssetSet, DEFAULT_CODE_ASSETS};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

/// Setting names, shared by every store implementation.
pub mod keys {
    pub const EDITOR_COMMAND: &str = "editor_command";
    pub const EDITOR_ARGS: &str = "editor_args";
    pub const CODE_ASSETS: &str = "code_assets";
    pub const TERMINAL_COMMAND: &str = "terminal_command";
    pub const TERMINAL_ARGS: &str = "terminal_args";
    pub const GENERATE_PROJECT_FILES: &str = "generate_project_files";

    /// Every key the launcher reads, in display order.
    pub const ALL: &[&str] = &[
        EDITOR_COMMAND,
        EDITOR_ARGS,
        CODE_ASSETS,
        TERMINAL_COMMAND,
        TERMINAL_ARGS,
        GENERATE_PROJECT_FILES,
    ];
}

// ─────────────────────────────────────────────────────────────────────────────
// Store Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The host's key/value settings API.
///
/// Reads take a default so absent keys never error; writes mutate the store
/// only — persistence (where applicable) is an explicit separate step,
/// matching the edit-then-save flow of a preferences panel.
pub trait PrefsStore {
    fn get_string(&self, key: &str, default: &str) -> String;
    fn set_string(&mut self, key: &str, value: &str);
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&mut self, key: &str, value: bool);
    fn delete(&mut self, key: &str);
}

/// A stored preference value. TOML distinguishes the two natively, so the
/// untagged representation round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Text(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory Store
// ─────────────────────────────────────────────────────────────────────────────

/// Volatile store for tests and hosts that persist settings themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryPrefs {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(PrefValue::Text(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), PrefValue::Text(value.to_string()));
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => *b,
            _ => default,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), PrefValue::Bool(value));
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML-backed Store
// ─────────────────────────────────────────────────────────────────────────────

/// File-backed store used by the CLI: a flat TOML table of settings.
#[derive(Debug)]
pub struct TomlPrefs {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
}

impl TomlPrefs {
    /// Load settings from `path`.
    ///
    /// A missing file is first run, not an error; an unreadable or unparsable
    /// file is logged and treated as empty so the defaults apply.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let values = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(values) => {
                        debug!("Loaded preferences from {:?}", path);
                        values
                    }
                    Err(e) => {
                        warn!("Failed to parse {:?}: {}", path, e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!("Failed to read {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            debug!("No preferences file at {:?}, using defaults", path);
            BTreeMap::new()
        };

        Self { path, values }
    }

    /// Default preferences location for the CLI:
    /// `<config dir>/edbridge/config.toml`.
    pub fn default_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("edbridge").join("config.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the store back to disk.
    ///
    /// Takes an exclusive lock on the file for the duration of the write so
    /// two concurrent saves cannot interleave.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }

        let header = "# edbridge preferences\n\
                      # Edit with `edbridge config set <key> <value>`\n\n";
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| Error::config(format!("Failed to open {:?}: {}", self.path, e)))?;

        file.lock_exclusive()
            .map_err(|e| Error::config(format!("Failed to lock {:?}: {}", self.path, e)))?;

        file.set_len(0)
            .map_err(|e| Error::config(format!("Failed to truncate {:?}: {}", self.path, e)))?;

        use std::io::Write;
        let mut file = file;
        file.write_all(header.as_bytes())
            .and_then(|_| file.write_all(content.as_bytes()))
            .and_then(|_| file.flush())
            .map_err(|e| Error::config(format!("Failed to write {:?}: {}", self.path, e)))?;

        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PrefsStore for TomlPrefs {
    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(PrefValue::Text(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), PrefValue::Text(value.to_string()));
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(PrefValue::Bool(b)) => *b,
            _ => default,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), PrefValue::Bool(value));
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// An immutable snapshot of the launcher settings with defaults applied.
///
/// Taken fresh per operation; settings are read-mostly and changes arrive
/// only through explicit edits.
#[derive(Debug, Clone)]
pub struct LauncherSettings {
    pub editor_command: String,
    pub editor_args: String,
    pub code_assets: CodeAssetSet,
    pub terminal_command: String,
    pub terminal_args: String,
    pub generate_project_files: bool,
}

impl LauncherSettings {
    pub fn load(store: &impl PrefsStore) -> Self {
        Self {
            editor_command: store.get_string(keys::EDITOR_COMMAND, ""),
            editor_args: store.get_string(keys::EDITOR_ARGS, ""),
            code_assets: CodeAssetSet::parse(
                &store.get_string(keys::CODE_ASSETS, DEFAULT_CODE_ASSETS),
            ),
            terminal_command: store.get_string(keys::TERMINAL_COMMAND, ""),
            terminal_args: store.get_string(keys::TERMINAL_ARGS, ""),
            generate_project_files: store.get_bool(keys::GENERATE_PROJECT_FILES, true),
        }
    }

    /// True when launches should be wrapped in the configured terminal.
    pub fn wraps_in_terminal(&self) -> bool {
        !self.terminal_command.is_empty()
    }
}
