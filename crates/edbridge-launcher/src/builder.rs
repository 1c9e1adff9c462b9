//! Command building: settings + location in, [`ProcessSpec`] out.
//!
//! Two builders mirror the two launch shapes: the editor command itself, and
//! the editor command wrapped inside a terminal emulator. Both resolve their
//! executable first and substitute their argument template second; neither
//! has side effects beyond the search-path lookup.

use std::ffi::OsStr;
use std::path::Path;

use edbridge_core::prelude::*;
use edbridge_core::{template, ProcessSpec};

use crate::resolver;

/// Build the process specification that opens `file` at `line`:`column`.
///
/// Placeholders in `args_template`: `%f` file path (verbatim), `%l` line,
/// `%c` column, `%p` project root. Negative line/column values mean "no
/// specific location" and clamp to zero.
pub fn build_editor_command(
    command: &str,
    args_template: &str,
    file: &Path,
    line: i32,
    column: i32,
    project_root: &Path,
) -> Result<ProcessSpec> {
    build_editor_command_in(
        command,
        args_template,
        file,
        line,
        column,
        project_root,
        &resolver::default_search_path(),
    )
}

/// [`build_editor_command`] with an explicit search path.
pub fn build_editor_command_in(
    command: &str,
    args_template: &str,
    file: &Path,
    line: i32,
    column: i32,
    project_root: &Path,
    search_path: &OsStr,
) -> Result<ProcessSpec> {
    let program = resolver::resolve_command_in(command, search_path)?;

    let file = file.display().to_string();
    let line = line.max(0).to_string();
    let column = column.max(0).to_string();
    let root = project_root.display().to_string();

    let args = template::expand(
        args_template,
        &[
            ('f', file.as_str()),
            ('l', line.as_str()),
            ('c', column.as_str()),
            ('p', root.as_str()),
        ],
    );

    Ok(ProcessSpec::new(program, args))
}

/// Wrap an editor specification inside a terminal invocation.
///
/// Placeholders in `args_template`: `%e` resolved editor executable path,
/// `%a` substituted editor argument string.
pub fn build_terminal_command(
    command: &str,
    args_template: &str,
    editor: &ProcessSpec,
) -> Result<ProcessSpec> {
    build_terminal_command_in(command, args_template, editor, &resolver::default_search_path())
}

/// [`build_terminal_command`] with an explicit search path.
pub fn build_terminal_command_in(
    command: &str,
    args_template: &str,
    editor: &ProcessSpec,
    search_path: &OsStr,
) -> Result<ProcessSpec> {
    let program = resolver::resolve_command_in(command, search_path)?;

    let editor_program = editor.program.display().to_string();
    let args = template::expand(
        args_template,
        &[('e', editor_program.as_str()), ('a', editor.args.as_str())],
    );

    Ok(ProcessSpec::new(program, args))
}
