use std::path::Path;
use std::process::{Command, Output};

use crate::errors::ModlensError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments and working directory.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    cwd: Option<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<String>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, ModlensError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(Path::new(dir));
        }
        cmd.output().map_err(ModlensError::from)
    }

    /// Execute the command and return its stdout, failing on a non-zero exit.
    pub fn stdout(&self) -> Result<String, ModlensError> {
        let output = self.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ModlensError::Process {
                message: format!("`{}` exited with {}: {}", self, output.status, stderr.trim()),
            });
        }
        String::from_utf8(output.stdout).map_err(|e| ModlensError::Process {
            message: format!("`{self}` produced non UTF-8 output: {e}"),
        })
    }
}

impl std::fmt::Display for CommandBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
