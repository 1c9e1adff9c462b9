//! # edbridge-launcher - Preferences-driven Editor Launching
//!
//! Turns stored user preferences plus a (file, line, column) request into a
//! detached external-editor process, optionally wrapped in a terminal
//! emulator.
//!
//! ## Public API
//!
//! ### Preferences (`prefs`)
//! - [`PrefsStore`] - The host's flat key/value settings API
//! - [`TomlPrefs`] / [`MemoryPrefs`] - File-backed and volatile stores
//! - [`LauncherSettings`] - Typed snapshot with defaults applied
//!
//! ### Resolution (`resolver`)
//! - [`resolve_command()`] - Bare command name to absolute executable path
//!
//! ### Command Building (`builder`)
//! - [`build_editor_command()`] - `%f`/`%l`/`%c`/`%p` substitution
//! - [`build_terminal_command()`] - `%e`/`%a` terminal wrapping
//!
//! ### Launching (`launch`)
//! - [`launch_detached()`] - Fire-and-forget spawn of a [`ProcessSpec`]
//!
//! ### Host Bridge (`host`)
//! - [`ExternalEditor`] - The callback contract exposed to the host
//! - [`EditorBridge`] - Its preferences-driven implementation
//! - [`Registry`] - Explicit host-side registration
//!
//! [`ProcessSpec`]: edbridge_core::ProcessSpec

pub mod builder;
pub mod host;
pub mod launch;
pub mod prefs;
pub mod resolver;

pub use builder::{build_editor_command, build_terminal_command};
pub use host::{
    ChangedFiles, EditorBridge, ExternalEditor, Installation, NoopSync, ProjectSync, Registry,
    INSTALLATION_NAME, INSTALLATION_PLACEHOLDER,
};
pub use launch::launch_detached;
pub use prefs::{keys, LauncherSettings, MemoryPrefs, PrefValue, PrefsStore, TomlPrefs};
pub use resolver::{default_search_path, resolve_command, resolve_command_in};
