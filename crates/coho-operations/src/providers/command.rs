use std::path::Path;
use std::process::{self, Stdio};

use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::CommandExecutor;
use crate::types::Command;

/// Runs commands as child processes of the current one.
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, command: &Command) -> Result<String> {
        if command.is_pretend() {
            match command.dir() {
                Some(dir) => println!("Pretending to run: {command} (in {})", dir.display()),
                None => println!("Pretending to run: {command}"),
            }
            return Ok(String::new());
        }

        debug!(
            %command,
            dir = ?command.dir(),
            silent = command.is_silent(),
            "running command"
        );

        let mut process = process::Command::new(command.program());
        process.args(command.arguments());
        if let Some(dir) = command.dir() {
            process.current_dir(dir);
        }

        let dir = command.dir().map(Path::to_path_buf);
        let spawn_error = |source: std::io::Error| OperationError::CommandSpawn {
            command: command.to_string(),
            dir: dir.clone(),
            source,
        };

        if command.is_silent() {
            let output = process
                .stdin(Stdio::null())
                .output()
                .map_err(spawn_error)?;
            if !output.status.success() {
                return Err(OperationError::CommandFailed {
                    command: command.to_string(),
                    dir,
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                });
            }
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let status = process.status().map_err(spawn_error)?;
        if !status.success() {
            return Err(OperationError::CommandFailed {
                command: command.to_string(),
                dir,
                status: status.to_string(),
                stderr: String::new(),
            });
        }
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn pretend_does_not_spawn() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let command = Command::new("definitely-not-a-real-program", dir.path()).pretend(true);

        let output = SystemCommandExecutor::new().run(&command)?;

        assert!(output.is_empty());
        Ok(())
    }

    #[test]
    fn missing_program_is_spawn_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let command = Command::new("definitely-not-a-real-program", dir.path()).silent(true);

        let result = SystemCommandExecutor::new().run(&command);

        assert!(matches!(result, Err(OperationError::CommandSpawn { .. })));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn silent_command_returns_stdout() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let command = Command::new("echo", dir.path()).arg("6.1.0").silent(true);

        let output = SystemCommandExecutor::new().run(&command)?;

        assert_eq!(output.trim(), "6.1.0");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn command_without_dir_runs_in_current_dir() -> anyhow::Result<()> {
        let command = Command::in_current_dir("echo").arg("6.1.0").silent(true);

        let output = SystemCommandExecutor::new().run(&command)?;

        assert_eq!(output.trim(), "6.1.0");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_command_failed() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let command = Command::new("sh", dir.path())
            .args(["-c", "echo broken >&2; exit 3"])
            .silent(true);

        let err = SystemCommandExecutor::new()
            .run(&command)
            .expect_err("exit 3 must fail");

        match err {
            OperationError::CommandFailed { stderr, .. } => assert_eq!(stderr.trim(), "broken"),
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }
}
