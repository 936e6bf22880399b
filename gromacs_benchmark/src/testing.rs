//!
//! A scripted launcher for unit tests.
//!

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::VecDeque;

use crate::process::Launcher;
use crate::process::Output;

///
/// A single recorded launch.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub arguments: Vec<String>,
    pub environment: BTreeMap<String, String>,
}

impl Call {
    ///
    /// The program and arguments joined by spaces.
    ///
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.arguments.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

///
/// Replays queued outputs and records every launch.
///
/// Once the queue is exhausted, every launch succeeds with empty output.
///
#[derive(Debug, Default)]
pub struct FakeLauncher {
    pub calls: RefCell<Vec<Call>>,
    pub outputs: RefCell<VecDeque<std::io::Result<Output>>>,
}

impl FakeLauncher {
    pub fn with_outputs(outputs: Vec<std::io::Result<Output>>) -> Self {
        Self {
            calls: RefCell::new(vec![]),
            outputs: RefCell::new(outputs.into()),
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(Call::command_line).collect()
    }
}

impl Launcher for FakeLauncher {
    fn launch(
        &self,
        program: &str,
        arguments: &[String],
        environment: &BTreeMap<String, String>,
    ) -> std::io::Result<Output> {
        self.calls.borrow_mut().push(Call {
            program: program.to_owned(),
            arguments: arguments.to_vec(),
            environment: environment.clone(),
        });
        self.outputs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(success(vec![], vec![])))
    }
}

///
/// A successful output with the given lines.
///
pub fn success(stdout: Vec<&str>, stderr: Vec<&str>) -> Output {
    Output {
        pid: 4242,
        success: true,
        code: Some(0),
        stdout: stdout.into_iter().map(str::to_owned).collect(),
        stderr: stderr.into_iter().map(str::to_owned).collect(),
    }
}

///
/// A failed output with the given standard error lines.
///
pub fn failure(stderr: Vec<&str>) -> Output {
    Output {
        pid: 4242,
        success: false,
        code: Some(1),
        stdout: vec![],
        stderr: stderr.into_iter().map(str::to_owned).collect(),
    }
}
