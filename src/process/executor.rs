use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::{signal, ProcessError};
use crate::core::env::Environment;

/// Status reported for a child killed by a signal: 128 + signal number.
pub const SIGNAL_STATUS_BASE: i32 = 128;

/// Spawns resolved external commands and reaps them synchronously.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `path` with the segment's argument vector and blocks until it
    /// terminates. `argv[0]` is the command name as typed; the child gets
    /// the shell's environment copy instead of the process environment.
    pub fn spawn(
        &self,
        path: &Path,
        argv: &[String],
        env: &Environment,
    ) -> Result<i32, ProcessError> {
        let mut command = Command::new(path);
        command
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());

        let mut child = command.spawn().map_err(ProcessError::Spawn)?;

        signal::setup_signal_handlers();

        let status = child.wait().map_err(ProcessError::Wait)?;
        Ok(exit_code(status))
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => SIGNAL_STATUS_BASE + status.signal().unwrap_or(0),
    }
}

/// A regular file with any execute bit set.
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
