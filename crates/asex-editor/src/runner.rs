//! The "run external command" capability
//!
//! Every child process goes through [`CommandRunner`], so the driver can be
//! exercised with a fake that records calls instead of spawning Aseprite.

use std::path::Path;

use tokio::process::Command;

use asex_core::prelude::*;

/// Outcome of one external command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code; `None` if the process was terminated by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success() -> Self {
        Self::from_code(0)
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for RunStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs an executable to completion in a given working directory
#[trait_variant::make(CommandRunner: Send)]
pub trait LocalCommandRunner {
    /// Run `program` with `args` inside `cwd` and wait for it to exit
    async fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<RunStatus>;
}

/// Spawns real child processes; stdout and stderr are inherited
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &Path, args: &[String], cwd: &Path) -> Result<RunStatus> {
        info!(
            "Running {} {} (cwd: {})",
            program.display(),
            args.join(" "),
            cwd.display()
        );

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::editor_unavailable(program)
                } else {
                    Error::ProcessSpawn {
                        reason: e.to_string(),
                    }
                }
            })?;

        debug!("{} exited with {:?}", program.display(), status.code());
        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandRunner, RunStatus, SystemRunner};
    use asex_core::Error;
    use std::path::Path;

    #[test]
    fn test_run_status_success() {
        assert!(RunStatus::success().is_success());
        assert!(!RunStatus::from_code(1).is_success());
        assert!(!RunStatus { code: None }.is_success());
    }

    #[tokio::test]
    async fn test_system_runner_missing_program() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("no-such-aseprite");
        let err = SystemRunner
            .run(&missing, &[], temp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EditorUnavailable { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_missing_interpreter() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let script = temp.path().join("aseprite-wrapper");
        std::fs::write(&script, "#!/no/such/interpreter
").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = SystemRunner
            .run(&script, &[], temp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EditorUnavailable { .. }));
        assert!(err.to_string().contains("interpreter"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_reports_exit_code() {
        let temp = tempfile::tempdir().unwrap();
        let status = SystemRunner
            .run(
                Path::new("/bin/sh"),
                &["-c".to_string(), "exit 3".to_string()],
                temp.path(),
            )
            .await
            .unwrap();
        assert_eq!(status.code, Some(3));
    }
}
