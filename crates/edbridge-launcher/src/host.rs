//! The contract between the launcher and its embedding host.
//!
//! The host hands the launcher a file location and gets back a boolean: true
//! means an external editor was launched, false means the host should fall
//! back to its own default handling. Everything host-specific (the
//! preferences panel, project-file generation) stays on the host side of the
//! [`ProjectSync`] and [`PrefsStore`] seams.

use std::path::{Path, PathBuf};

use edbridge_core::prelude::*;

#[cfg(test)]
use mockall::automock;

use crate::builder;
use crate::launch;
use crate::prefs::{keys, LauncherSettings, PrefsStore};

/// Display name of the advertised installation.
pub const INSTALLATION_NAME: &str = "Custom";

/// Placeholder path advertised before the user configures a real command.
pub const INSTALLATION_PLACEHOLDER: &str = "/bin/false";

/// A named, located external editor the host can launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub name: String,
    pub path: PathBuf,
}

/// The five path sets of an incremental sync pass.
#[derive(Debug, Clone, Default)]
pub struct ChangedFiles {
    pub added: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
    pub moved: Vec<PathBuf>,
    pub moved_from: Vec<PathBuf>,
    pub imported: Vec<PathBuf>,
}

impl ChangedFiles {
    /// All changed paths, in field order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.added
            .iter()
            .chain(&self.deleted)
            .chain(&self.moved)
            .chain(&self.moved_from)
            .chain(&self.imported)
            .map(PathBuf::as_path)
    }
}

/// Host-provided project-file generation.
///
/// The launcher only decides *whether* to regenerate; how is the host's
/// concern (solution files, IDE project files, whatever the host emits).
#[cfg_attr(test, automock)]
pub trait ProjectSync {
    fn sync_project_files(&self);
}

/// A [`ProjectSync`] for hosts without a generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSync;

impl ProjectSync for NoopSync {
    fn sync_project_files(&self) {
        debug!("No project-file generator attached, sync skipped");
    }
}

/// The callback surface the launcher exposes to its embedding host.
pub trait ExternalEditor {
    /// The advertised installations (a single static entry).
    fn installations(&self) -> Vec<Installation>;

    /// Persist `installation_path` as the editor command.
    fn initialize(&mut self, installation_path: &str);

    /// Open `path` at `line`:`column` in the configured editor.
    ///
    /// Returns false when the file is not a code asset (expected routing,
    /// nothing logged) or when building/launching fails (one error logged).
    fn open_file(&self, path: &str, line: i32, column: i32) -> bool;

    /// Regenerate project files if the generate flag is set.
    fn sync_all(&self);

    /// Regenerate project files if the generate flag is set and any changed
    /// path is a code asset.
    fn sync_if_needed(&self, changes: &ChangedFiles);

    /// Look up an advertised installation by exact path.
    fn try_resolve_installation(&self, path: &str) -> Option<Installation>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Host-side registry of external editors.
///
/// Registration is an explicit call performed once during initialization,
/// never a side effect of construction.
#[derive(Default)]
pub struct Registry {
    editors: Vec<Box<dyn ExternalEditor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, editor: Box<dyn ExternalEditor>) {
        self.editors.push(editor);
    }

    pub fn editors(&self) -> &[Box<dyn ExternalEditor>] {
        &self.editors
    }

    /// All installations advertised by registered editors.
    pub fn installations(&self) -> Vec<Installation> {
        self.editors
            .iter()
            .flat_map(|editor| editor.installations())
            .collect()
    }

    /// First registered editor that recognizes `path` as one of its
    /// installations.
    pub fn resolve(&self, path: &str) -> Option<Installation> {
        self.editors
            .iter()
            .find_map(|editor| editor.try_resolve_installation(path))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorBridge
// ─────────────────────────────────────────────────────────────────────────────

/// The launcher: preferences in, detached editor process out.
pub struct EditorBridge<S, G> {
    prefs: S,
    generator: G,
    project_root: PathBuf,
}

impl<S: PrefsStore, G: ProjectSync> EditorBridge<S, G> {
    pub fn new(prefs: S, generator: G, project_root: impl Into<PathBuf>) -> Self {
        Self {
            prefs,
            generator,
            project_root: project_root.into(),
        }
    }

    pub fn prefs(&self) -> &S {
        &self.prefs
    }

    /// Mutable access for the host's preference-editing surface. Persistence
    /// of the underlying store stays the host's responsibility.
    pub fn prefs_mut(&mut self) -> &mut S {
        &mut self.prefs
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Snapshot the settings with defaults applied.
    pub fn settings(&self) -> LauncherSettings {
        LauncherSettings::load(&self.prefs)
    }
}

impl<S: PrefsStore, G: ProjectSync> ExternalEditor for EditorBridge<S, G> {
    fn installations(&self) -> Vec<Installation> {
        vec![Installation {
            name: INSTALLATION_NAME.to_string(),
            path: PathBuf::from(INSTALLATION_PLACEHOLDER),
        }]
    }

    fn initialize(&mut self, installation_path: &str) {
        self.prefs.set_string(keys::EDITOR_COMMAND, installation_path);
    }

    fn open_file(&self, path: &str, line: i32, column: i32) -> bool {
        let settings = self.settings();

        if !settings.code_assets.is_code_asset(path) {
            // Expected routing outcome: the host handles this file itself.
            return false;
        }

        let editor = match builder::build_editor_command(
            &settings.editor_command,
            &settings.editor_args,
            Path::new(path),
            line,
            column,
            &self.project_root,
        ) {
            Ok(spec) => spec,
            Err(e) => {
                error!("Failed to build editor command: {}", e);
                return false;
            }
        };

        let spec = if settings.wraps_in_terminal() {
            match builder::build_terminal_command(
                &settings.terminal_command,
                &settings.terminal_args,
                &editor,
            ) {
                Ok(spec) => spec,
                Err(e) => {
                    error!("Failed to build terminal command: {}", e);
                    return false;
                }
            }
        } else {
            editor
        };

        match launch::launch_detached(&spec) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to launch external editor: {}", e);
                false
            }
        }
    }

    fn sync_all(&self) {
        if self.settings().generate_project_files {
            self.generator.sync_project_files();
        }
    }

    fn sync_if_needed(&self, changes: &ChangedFiles) {
        let settings = self.settings();
        if !settings.generate_project_files {
            return;
        }

        let touched = changes
            .iter()
            .any(|path| settings.code_assets.is_code_asset(&path.to_string_lossy()));

        if touched {
            self.generator.sync_project_files();
        }
    }

    fn try_resolve_installation(&self, path: &str) -> Option<Installation> {
        self.installations()
            .into_iter()
            .find(|install| install.path == Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;

    fn bridge(prefs: MemoryPrefs) -> EditorBridge<MemoryPrefs, NoopSync> {
        EditorBridge::new(prefs, NoopSync, "/proj")
    }

    #[test]
    fn test_installations_single_static_entry() {
        let bridge = bridge(MemoryPrefs::new());
        let installs = bridge.installations();
        assert_eq!(installs.len(), 1);
        assert_eq!(installs[0].name, INSTALLATION_NAME);
        assert_eq!(installs[0].path, PathBuf::from(INSTALLATION_PLACEHOLDER));
    }

    #[test]
    fn test_try_resolve_installation() {
        let bridge = bridge(MemoryPrefs::new());
        assert!(bridge.try_resolve_installation(INSTALLATION_PLACEHOLDER).is_some());
        assert!(bridge.try_resolve_installation("/usr/bin/other").is_none());
    }

    #[test]
    fn test_initialize_persists_editor_command() {
        let mut bridge = bridge(MemoryPrefs::new());
        bridge.initialize("/usr/local/bin/myeditor");
        assert_eq!(
            bridge.prefs().get_string(keys::EDITOR_COMMAND, ""),
            "/usr/local/bin/myeditor"
        );
    }

    #[test]
    fn test_open_file_routes_non_assets_away() {
        // Default asset list; a .png is the host's problem.
        let bridge = bridge(MemoryPrefs::new());
        assert!(!bridge.open_file("textures/rock.png", 1, 1));
    }

    #[test]
    fn test_open_file_false_when_editor_unresolved() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(keys::EDITOR_COMMAND, "definitely-not-an-editor-zzz");
        let bridge = bridge(prefs);
        assert!(!bridge.open_file("/proj/Foo.cs", 10, 3));
    }

    #[test]
    fn test_open_file_false_when_no_editor_configured() {
        let bridge = bridge(MemoryPrefs::new());
        assert!(!bridge.open_file("/proj/Foo.cs", 10, 3));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_file_launches_editor() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(keys::EDITOR_COMMAND, "sh");
        prefs.set_string(keys::EDITOR_ARGS, "-c true");
        let bridge = bridge(prefs);
        assert!(bridge.open_file("/proj/Foo.cs", 10, 3));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_file_false_when_terminal_unresolved() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(keys::EDITOR_COMMAND, "sh");
        prefs.set_string(keys::EDITOR_ARGS, "-c true");
        prefs.set_string(keys::TERMINAL_COMMAND, "definitely-not-a-terminal-zzz");
        let bridge = bridge(prefs);
        assert!(!bridge.open_file("/proj/Foo.cs", 10, 3));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_file_wraps_in_terminal() {
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(keys::EDITOR_COMMAND, "sh");
        prefs.set_string(keys::EDITOR_ARGS, "-c true");
        prefs.set_string(keys::TERMINAL_COMMAND, "sh");
        prefs.set_string(keys::TERMINAL_ARGS, "-c true");
        let bridge = bridge(prefs);
        assert!(bridge.open_file("/proj/Foo.cs", 10, 3));
    }

    #[test]
    fn test_sync_all_fires_when_flag_set() {
        let mut mock = MockProjectSync::new();
        mock.expect_sync_project_files().times(1).return_const(());

        let bridge = EditorBridge::new(MemoryPrefs::new(), mock, "/proj");
        bridge.sync_all();
    }

    #[test]
    fn test_sync_all_skipped_when_flag_clear() {
        let mut mock = MockProjectSync::new();
        mock.expect_sync_project_files().times(0);

        let mut prefs = MemoryPrefs::new();
        prefs.set_bool(keys::GENERATE_PROJECT_FILES, false);

        let bridge = EditorBridge::new(prefs, mock, "/proj");
        bridge.sync_all();
    }

    #[test]
    fn test_sync_if_needed_fires_on_code_asset_change() {
        let mut mock = MockProjectSync::new();
        mock.expect_sync_project_files().times(1).return_const(());

        let bridge = EditorBridge::new(MemoryPrefs::new(), mock, "/proj");
        let changes = ChangedFiles {
            moved_from: vec![PathBuf::from("Assets/Old.cs")],
            ..Default::default()
        };
        bridge.sync_if_needed(&changes);
    }

    #[test]
    fn test_sync_if_needed_ignores_unrelated_changes() {
        let mut mock = MockProjectSync::new();
        mock.expect_sync_project_files().times(0);

        let bridge = EditorBridge::new(MemoryPrefs::new(), mock, "/proj");
        let changes = ChangedFiles {
            added: vec![PathBuf::from("textures/rock.png")],
            imported: vec![PathBuf::from("audio/theme.ogg")],
            ..Default::default()
        };
        bridge.sync_if_needed(&changes);
    }

    #[test]
    fn test_sync_if_needed_respects_flag() {
        let mut mock = MockProjectSync::new();
        mock.expect_sync_project_files().times(0);

        let mut prefs = MemoryPrefs::new();
        prefs.set_bool(keys::GENERATE_PROJECT_FILES, false);

        let bridge = EditorBridge::new(prefs, mock, "/proj");
        let changes = ChangedFiles {
            added: vec![PathBuf::from("Assets/New.cs")],
            ..Default::default()
        };
        bridge.sync_if_needed(&changes);
    }

    #[test]
    fn test_changed_files_iter_covers_all_sets() {
        let changes = ChangedFiles {
            added: vec![PathBuf::from("a")],
            deleted: vec![PathBuf::from("b")],
            moved: vec![PathBuf::from("c")],
            moved_from: vec![PathBuf::from("d")],
            imported: vec![PathBuf::from("e")],
        };
        let all: Vec<_> = changes.iter().collect();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_registry_register_and_resolve() {
        let mut registry = Registry::new();
        assert!(registry.editors().is_empty());

        registry.register(Box::new(bridge(MemoryPrefs::new())));

        assert_eq!(registry.installations().len(), 1);
        assert!(registry.resolve(INSTALLATION_PLACEHOLDER).is_some());
        assert!(registry.resolve("/usr/bin/other").is_none());
    }
}
