use crate::Result;
use crate::types::Command;

pub trait CommandExecutor: Send + Sync {
    /// Runs `command` and returns its captured standard output.
    ///
    /// Commands marked as pretend are reported but not executed and yield an
    /// empty string. Output of non-silent commands goes to the terminal and is
    /// not captured.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or exits unsuccessfully.
    fn run(&self, command: &Command) -> Result<String>;
}
