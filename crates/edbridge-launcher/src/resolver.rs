//! Resolution of configured command names to executable paths.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use edbridge_core::prelude::*;

/// The process search path (`PATH`), empty when unset.
pub fn default_search_path() -> OsString {
    std::env::var_os("PATH").unwrap_or_default()
}

/// Resolve `command` against the process search path.
pub fn resolve_command(command: &str) -> Result<PathBuf> {
    resolve_command_in(command, &default_search_path())
}

/// Resolve `command` to an absolute executable path.
///
/// Order: a command naming an existing file (absolute, or relative to the
/// working directory) is used as-is; otherwise each directory of
/// `search_path` is tried in order and the first match wins. An unresolvable
/// command is an error the caller must surface, never a silent skip.
pub fn resolve_command_in(command: &str, search_path: &OsStr) -> Result<PathBuf> {
    if command.is_empty() {
        return Err(Error::command_not_found("(empty command)"));
    }

    let direct = Path::new(command);
    if direct.is_file() {
        return Ok(normalize(direct));
    }

    let cwd = std::env::current_dir()?;
    which::which_in(command, Some(search_path), cwd)
        .map(|found| normalize(&found))
        .map_err(|_| Error::command_not_found(command))
}

/// Strip Windows verbatim prefixes from a canonicalized path; fall back to
/// the un-canonicalized path if the filesystem refuses.
fn normalize(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_empty_command_fails() {
        let err = resolve_command_in("", OsStr::new("")).unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
    }

    #[test]
    fn test_missing_command_fails() {
        let temp = tempdir().unwrap();
        let search: OsString = temp.path().into();
        let err = resolve_command_in("no-such-editor", &search).unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
    }

    #[test]
    fn test_direct_path_wins_over_search() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("myeditor");
        std::fs::write(&file, "").unwrap();

        // Direct existing path resolves even with an empty search path.
        let resolved = resolve_command_in(file.to_str().unwrap(), OsStr::new("")).unwrap();
        assert_eq!(
            resolved.file_name().unwrap().to_str().unwrap(),
            "myeditor"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_bare_name_found_on_search_path() {
        let temp = tempdir().unwrap();
        let expected = make_executable(temp.path(), "myeditor");

        let search: OsString = temp.path().into();
        let resolved = resolve_command_in("myeditor", &search).unwrap();
        assert_eq!(resolved, dunce::canonicalize(expected).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_command_uses_process_path() {
        // `sh` is guaranteed on any Unix search path.
        let resolved = resolve_command("sh").unwrap();
        assert!(resolved.is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_search_path_order_first_match_wins() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let expected = make_executable(first.path(), "myeditor");
        make_executable(second.path(), "myeditor");

        let search = std::env::join_paths([first.path(), second.path()]).unwrap();
        let resolved = resolve_command_in("myeditor", &search).unwrap();
        assert_eq!(resolved, dunce::canonicalize(expected).unwrap());
    }
}
