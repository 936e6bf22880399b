//!
//! Subprocess execution.
//!

use std::collections::BTreeMap;

///
/// The captured result of a finished subprocess.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Output {
    /// The process identifier.
    pub pid: u32,
    /// Whether the process exited successfully.
    pub success: bool,
    /// The exit code, if the process was not terminated by a signal.
    pub code: Option<i32>,
    /// The standard output lines.
    pub stdout: Vec<String>,
    /// The standard error lines.
    pub stderr: Vec<String>,
}

///
/// Launches external programs.
///
pub trait Launcher {
    ///
    /// Runs `program` to completion with extra environment variables.
    ///
    /// A spawn failure is an error. A non-zero exit is not, it is reported in the output.
    ///
    fn launch(
        &self,
        program: &str,
        arguments: &[String],
        environment: &BTreeMap<String, String>,
    ) -> std::io::Result<Output>;
}

///
/// Launches programs as child processes of the runner.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Subprocess;

impl Launcher for Subprocess {
    fn launch(
        &self,
        program: &str,
        arguments: &[String],
        environment: &BTreeMap<String, String>,
    ) -> std::io::Result<Output> {
        run(program, arguments, environment)
    }
}

///
/// Runs `program` and captures its output lines once it exits.
///
pub fn run(
    program: &str,
    arguments: &[String],
    environment: &BTreeMap<String, String>,
) -> std::io::Result<Output> {
    let mut command = std::process::Command::new(program);
    command.args(arguments);
    command.envs(environment);
    command.stdin(std::process::Stdio::null());
    command.stdout(std::process::Stdio::piped());
    command.stderr(std::process::Stdio::piped());

    tracing::debug!(program, ?arguments, "Spawning subprocess");
    let process = command.spawn()?;
    let pid = process.id();
    let output = process.wait_with_output()?;

    Ok(Output {
        pid,
        success: output.status.success(),
        code: output.status.code(),
        stdout: lines(output.stdout.as_slice()),
        stderr: lines(output.stderr.as_slice()),
    })
}

///
/// Splits captured bytes into lines.
///
fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::run;

    #[test]
    fn captures_output_and_status() {
        let output = run(
            "sh",
            &[
                "-c".to_owned(),
                "echo one; echo two; echo $GREETING >&2; exit 3".to_owned(),
            ],
            &BTreeMap::from([("GREETING".to_owned(), "hello".to_owned())]),
        )
        .expect("Spawned");

        assert_eq!(output.stdout, vec!["one", "two"]);
        assert_eq!(output.stderr, vec!["hello"]);
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
    }

    #[test]
    fn spawn_failure_is_an_error() {
        assert!(run("definitely-not-an-executable-42", &[], &BTreeMap::new()).is_err());
    }
}
