//! Opening files with external programs
//!
//! Uses the OS-default opener (`xdg-open` on Linux, `open` on macOS,
//! `cmd /C start` on Windows) or the user's preferred visual editor.
//! Programs are spawned detached and never waited on.

use crate::error::PlatformError;
use crate::platform::{Os, PlatformId};
use dirkit_paths::truepath;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

/// Open a file with the program the OS associates with it
///
/// The path is resolved with [`truepath`] first and must exist.
pub fn startfile<P: AsRef<Path>>(fpath: P) -> Result<(), PlatformError> {
    let fpath = truepath(fpath)?;
    if !fpath.exists() {
        return Err(PlatformError::FileNotFound(fpath));
    }

    let os = PlatformId::current()
        .os()
        .ok_or(PlatformError::UnsupportedPlatform)?;

    let program = match os {
        Os::Linux => "xdg-open",
        Os::Darwin => "open",
        Os::Windows => "cmd",
    };
    let mut command = Command::new(program);
    if os == Os::Windows {
        // start treats its first quoted argument as a window title
        command.args(["/C", "start", ""]);
    }
    command.arg(&fpath);

    info!(path = %fpath.display(), program, "opening file");
    spawn_detached(command, program)
}

/// The visual editor command, from `VISUAL` with `gvim` as the default
pub fn editor_command() -> String {
    std::env::var("VISUAL").unwrap_or_else(|_| "gvim".to_string())
}

/// Open a file in the user's preferred visual editor
///
/// The editor is taken from the `VISUAL` environment variable, defaulting
/// to `gvim`. The path is resolved with [`truepath`] first and must exist.
pub fn editfile<P: AsRef<Path>>(fpath: P) -> Result<(), PlatformError> {
    let fpath = truepath(fpath)?;
    if !fpath.exists() {
        return Err(PlatformError::FileNotFound(fpath));
    }

    let editor = editor_command();
    let mut command = Command::new(&editor);
    command.arg(&fpath);

    info!(path = %fpath.display(), editor = %editor, "opening file in editor");
    spawn_detached(command, &editor)
}

fn spawn_detached(mut command: Command, program: &str) -> Result<(), PlatformError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    match command.spawn() {
        Ok(_child) => Ok(()),
        Err(source) => Err(PlatformError::Launch {
            program: program.to_string(),
            source,
        }),
    }
}
