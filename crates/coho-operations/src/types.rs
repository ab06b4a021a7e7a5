use std::fmt;
use std::path::{Path, PathBuf};

/// An external command invocation, run through a
/// [`CommandExecutor`](crate::traits::CommandExecutor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
    dir: Option<PathBuf>,
    silent: bool,
    pretend: bool,
}

impl Command {
    #[must_use]
    pub fn new(program: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: Some(dir.into()),
            silent: false,
            pretend: false,
        }
    }

    /// A command that inherits the working directory of this process.
    #[must_use]
    pub fn in_current_dir(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: None,
            silent: false,
            pretend: false,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Capture output instead of streaming it to the terminal.
    #[must_use]
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Report the command instead of running it.
    #[must_use]
    pub fn pretend(mut self, pretend: bool) -> Self {
        self.pretend = pretend;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    #[must_use]
    pub fn is_pretend(&self) -> bool {
        self.pretend
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Settings shared by every nightly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightlySettings {
    /// Registry tag the nightly is published under.
    pub tag: String,
    /// Git remote checkouts are fetched from and reset to.
    pub remote: String,
    /// Branch checkouts are reset to.
    pub branch: String,
}

impl Default for NightlySettings {
    fn default() -> Self {
        Self {
            tag: "nightly".to_string(),
            remote: "origin".to_string(),
            branch: "master".to_string(),
        }
    }
}
