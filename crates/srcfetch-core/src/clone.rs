use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum CloneError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("clone exited with status {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
    #[error("clone timed out after {after:?}: {stderr}")]
    TimedOut { after: Duration, stderr: String },
    #[error("clone i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Clone collaborator: performs one clone synchronously into the given
/// destination. Non-zero exit surfaces as a failure carrying the captured
/// diagnostic output.
pub trait CloneRunner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), CloneError>;
}

/// Shells out to `git clone <url> <dest>` with captured output. A timeout
/// may be imposed; the child is killed once the deadline passes.
pub struct GitCli {
    program: OsString,
    timeout: Option<Duration>,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
            timeout: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl CloneRunner for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), CloneError> {
        let mut child = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CloneError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        // Pipes are drained off-thread so a chatty clone cannot fill the
        // buffer and stall the wait loop.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match self.timeout {
            None => child.wait()?,
            Some(limit) => {
                let started = Instant::now();
                loop {
                    if let Some(status) = child.try_wait()? {
                        break status;
                    }
                    if started.elapsed() >= limit {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = join_output(stdout);
                        return Err(CloneError::TimedOut {
                            after: limit,
                            stderr: join_output(stderr),
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        };

        let stdout = join_output(stdout);
        let stderr = join_output(stderr);
        debug!(
            status = ?status.code(),
            stdout = %stdout.trim(),
            stderr = %stderr.trim(),
            "git clone finished"
        );
        if status.success() {
            Ok(())
        } else {
            Err(CloneError::Failed {
                code: status.code(),
                stderr,
            })
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_output(handle: JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn fake_git(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("fake-git");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn spawn_failure_reports_program() {
        let tmp = TempDir::new().unwrap();
        let cli = GitCli::new().with_program(tmp.path().join("missing-tool"));
        let err = cli
            .clone_repo("https://example.com/repo.git", &tmp.path().join("dest"))
            .unwrap_err();
        match err {
            CloneError::Spawn { program, .. } => assert!(program.contains("missing-tool")),
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn success_exit_is_ok() {
        let tmp = TempDir::new().unwrap();
        let program = fake_git(tmp.path(), "exit 0");
        let cli = GitCli::new().with_program(program);
        cli.clone_repo("https://example.com/repo.git", &tmp.path().join("dest"))
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_captures_stderr() {
        let tmp = TempDir::new().unwrap();
        let program = fake_git(tmp.path(), "echo boom >&2; exit 128");
        let cli = GitCli::new().with_program(program);
        let err = cli
            .clone_repo("https://example.com/repo.git", &tmp.path().join("dest"))
            .unwrap_err();
        match err {
            CloneError::Failed { code, stderr } => {
                assert_eq!(code, Some(128));
                assert!(stderr.contains("boom"));
            }
            other => panic!("expected exit failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_stuck_clone() {
        let tmp = TempDir::new().unwrap();
        let program = fake_git(tmp.path(), "sleep 5");
        let cli = GitCli::new()
            .with_program(program)
            .with_timeout(Duration::from_millis(200));
        let started = Instant::now();
        let err = cli
            .clone_repo("https://example.com/repo.git", &tmp.path().join("dest"))
            .unwrap_err();
        assert!(matches!(err, CloneError::TimedOut { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
