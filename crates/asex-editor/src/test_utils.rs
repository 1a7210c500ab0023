//! Test utilities for editor invocation
//!
//! Provides [`RecordingRunner`], a [`CommandRunner`] that never spawns a
//! process. It records each call and answers with scripted exit codes.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use asex_core::Result;

use crate::runner::{CommandRunner, RunStatus};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Fake runner replaying exit codes in order.
///
/// Once the scripted codes run out, every further call exits with 0.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    exit_codes: Mutex<VecDeque<i32>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRunner {
    /// A runner where every call succeeds
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// A runner answering the first calls with `codes`, in order
    pub fn with_exit_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        Self {
            exit_codes: Mutex::new(codes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the calls made so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Asset source files passed as the final argument, in call order
    pub fn sources(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| call.args.last().cloned())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<RunStatus> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                program: program.to_path_buf(),
                args: args.to_vec(),
                cwd: cwd.to_path_buf(),
            });
        }
        let code = self
            .exit_codes
            .lock()
            .ok()
            .and_then(|mut codes| codes.pop_front())
            .unwrap_or(0);
        Ok(RunStatus::from_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_codes_then_succeeds() {
        let runner = RecordingRunner::with_exit_codes([0, 1]);
        let cwd = Path::new("/graphics");
        let program = Path::new("/opt/aseprite");

        let first = runner.run(program, &[], cwd).await.unwrap();
        let second = runner.run(program, &[], cwd).await.unwrap();
        let third = runner.run(program, &[], cwd).await.unwrap();

        assert!(first.is_success());
        assert_eq!(second.code, Some(1));
        assert!(third.is_success());
        assert_eq!(runner.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_sources_are_last_arguments() {
        let runner = RecordingRunner::succeeding();
        let args = vec!["-b".to_string(), "splash.aseprite".to_string()];
        runner
            .run(Path::new("aseprite"), &args, Path::new("."))
            .await
            .unwrap();
        assert_eq!(runner.sources(), vec!["splash.aseprite"]);
    }
}
