//!
//! The Spack package manager driven through its command line.
//!

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use crate::process::Launcher;
use crate::process::Output;

use self::error::Error;

///
/// The Spack package manager.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spack {
    /// The `spack` executable.
    pub executable: PathBuf,
    /// The active Spack environment directory.
    pub environment: Option<PathBuf>,
}

impl Spack {
    /// The default executable name.
    pub const EXECUTABLE_NAME: &'static str = "spack";

    /// The directory holding the per-system environments.
    pub const ENVIRONMENTS_DIRECTORY: &'static str = "spack-environments";

    /// The install tree configured in created environments.
    pub const INSTALL_TREE_CONFIG: &'static str = "config:install_tree:root:opt/spack";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf) -> Self {
        Self {
            executable,
            environment: None,
        }
    }

    ///
    /// Finds `spack` in `${PATH}`. Logs a warning and returns `None` if it is absent.
    ///
    pub fn find() -> Option<Self> {
        match which::which(Self::EXECUTABLE_NAME) {
            Ok(executable) => Some(Self::new(executable)),
            Err(error) => {
                tracing::warn!(%error, "The `spack` executable not found in ${{PATH}}, skipping the installation");
                None
            }
        }
    }

    ///
    /// Sets the active environment.
    ///
    pub fn with_environment(mut self, environment: PathBuf) -> Self {
        self.environment = Some(environment);
        self
    }

    ///
    /// Installs a package spec.
    ///
    pub fn install(&self, launcher: &impl Launcher, spec: &str) -> Result<Output, Error> {
        self.checked(launcher, &["install", spec])
    }

    ///
    /// Loads a package spec.
    ///
    pub fn load(&self, launcher: &impl Launcher, spec: &str) -> Result<Output, Error> {
        self.checked(launcher, &["load", spec])
    }

    ///
    /// Returns the installation prefix of a package spec.
    ///
    pub fn locate(&self, launcher: &impl Launcher, spec: &str) -> Result<PathBuf, Error> {
        let output = self.checked(launcher, &["location", "-i", spec])?;
        output
            .stdout
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| Error::LocationMissing {
                spec: spec.to_owned(),
            })
    }

    ///
    /// Selects the Spack environment of `system`.
    ///
    /// The `BENCHMARK_SPACK_ENV` variable takes precedence. Otherwise the environment provided
    /// in `<root>/spack-environments/<system>` is used, and created if it does not exist.
    ///
    pub fn identify_environment(
        &self,
        launcher: &impl Launcher,
        system: &str,
        root: &Path,
    ) -> Result<PathBuf, Error> {
        let preset = std::env::var(perflog_analyzer::SPACK_ENVIRONMENT_VARIABLE)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        self.identify_environment_with(launcher, preset, system, root)
    }

    ///
    /// Selects the Spack environment of `system` given the preset environment, if any.
    ///
    pub fn identify_environment_with(
        &self,
        launcher: &impl Launcher,
        preset: Option<PathBuf>,
        system: &str,
        root: &Path,
    ) -> Result<PathBuf, Error> {
        if let Some(preset) = preset {
            return Ok(preset);
        }
        let path = root.join(Self::ENVIRONMENTS_DIRECTORY).join(system);
        if path.is_dir() {
            return Ok(path);
        }

        let path_string = path.to_string_lossy().to_string();
        for arguments in [
            vec!["env", "create", "-d", path_string.as_str()],
            vec![
                "-e",
                path_string.as_str(),
                "config",
                "add",
                Self::INSTALL_TREE_CONFIG,
            ],
        ] {
            let output = self.launch(launcher, arguments.as_slice())?;
            if !output.success {
                return Err(Error::EnvironmentCreation {
                    path,
                    stderr: output.stderr.join("\n"),
                });
            }
        }
        tracing::info!(path = %path.display(), "Spack environment successfully created");
        Ok(path)
    }

    ///
    /// Runs a Spack command in the active environment, failing on a non-zero exit.
    ///
    fn checked(&self, launcher: &impl Launcher, arguments: &[&str]) -> Result<Output, Error> {
        let arguments = self.with_environment_arguments(arguments);
        let references: Vec<&str> = arguments.iter().map(String::as_str).collect();
        let output = self.launch(launcher, references.as_slice())?;
        if !output.success {
            return Err(Error::Failed {
                command: self.command_line(references.as_slice()),
                stderr: output.stderr.join("\n"),
            });
        }
        Ok(output)
    }

    ///
    /// Runs a Spack command as is.
    ///
    fn launch(&self, launcher: &impl Launcher, arguments: &[&str]) -> Result<Output, Error> {
        let executable = self.executable.to_string_lossy();
        let arguments: Vec<String> = arguments.iter().map(|argument| (*argument).to_owned()).collect();
        launcher
            .launch(&executable, arguments.as_slice(), &BTreeMap::new())
            .map_err(|error| Error::Launch {
                command: self.command_line(
                    arguments
                        .iter()
                        .map(String::as_str)
                        .collect::<Vec<&str>>()
                        .as_slice(),
                ),
                error,
            })
    }

    ///
    /// Prefixes the arguments with the active environment.
    ///
    fn with_environment_arguments(&self, arguments: &[&str]) -> Vec<String> {
        let mut result = Vec::with_capacity(arguments.len() + 2);
        if let Some(environment) = self.environment.as_ref() {
            result.push("-e".to_owned());
            result.push(environment.to_string_lossy().to_string());
        }
        result.extend(arguments.iter().map(|argument| (*argument).to_owned()));
        result
    }

    ///
    /// Formats a command line for error messages.
    ///
    fn command_line(&self, arguments: &[&str]) -> String {
        format!("{} {}", self.executable.to_string_lossy(), arguments.join(" "))
    }
}
