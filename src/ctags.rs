//! Runs Universal Ctags over C/C++ sources and returns the tag listing.
//!
//! The listing is written to stdout (`-f -`) and handed to [`crate::tags::parse`].

use anyhow::{bail, Context, Result};
use log::debug;
use std::path::PathBuf;
use std::process::Command;

/// Options that make ctags emit qualified names (`--extra=+q`) and the
/// kind/scope/signature fields (`--fields=+KSz`) the parser reads.
const CTAGS_ARGS: &[&str] = &[
    "-R",
    "--languages=c,c++",
    "--extra=+q",
    "--fields=+KSz",
    "-f",
    "-",
];

/// A ctags invocation.
#[derive(Debug, Clone)]
pub struct Ctags {
    program: String,
    excludes: Vec<String>,
    paths: Vec<PathBuf>,
}

impl Default for Ctags {
    fn default() -> Self {
        Ctags::new("ctags")
    }
}

impl Ctags {
    pub fn new(program: impl Into<String>) -> Self {
        Ctags {
            program: program.into(),
            excludes: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Skip files and directories matching `pattern` (repeatable).
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    /// Scan `path` instead of the current directory (repeatable).
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Command line arguments, without the program name.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = CTAGS_ARGS.iter().map(|a| a.to_string()).collect();
        for pattern in &self.excludes {
            args.push(format!("--exclude={}", pattern));
        }
        for path in &self.paths {
            args.push(path.to_string_lossy().into_owned());
        }
        args
    }

    /// Run ctags and return its output.
    pub fn run(&self) -> Result<String> {
        let args = self.args();
        debug!("{} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .with_context(|| format!("failed to run {}", self.program))?;

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
