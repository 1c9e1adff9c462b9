//! Detached process launching.

use std::process::{Command, Stdio};

use edbridge_core::prelude::*;
use edbridge_core::ProcessSpec;

/// Launch `spec` as a detached child process.
///
/// Fire-and-forget: stdio is nulled, no handle is retained, and the exit
/// code is nobody's business. Success means the OS accepted the spawn.
pub fn launch_detached(spec: &ProcessSpec) -> Result<()> {
    let args = spec.args_vec()?;

    info!("Launching {} {}", spec.program.display(), spec.args);

    Command::new(&spec.program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::spawn(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_missing_program_is_spawn_error() {
        let spec = ProcessSpec::new("/no/such/program", "");
        let err = launch_detached(&spec).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[test]
    fn test_launch_malformed_args_is_args_error() {
        let spec = ProcessSpec::new("/no/such/program", "\"unterminated");
        let err = launch_detached(&spec).unwrap_err();
        assert!(matches!(err, Error::Args { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_succeeds() {
        let spec = ProcessSpec::new("/bin/sh", "-c true");
        launch_detached(&spec).unwrap();
    }
}
