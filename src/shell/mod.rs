//! Bounded subprocess execution for tool probes.
//!
//! Probe commands run through the user's shell so version managers
//! activated in shell profiles (nvm, volta, mise) are on PATH. Only
//! standard output is captured; the error stream is discarded because
//! version banners routinely write noise there.

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{PacksyncError, Result};

/// Poll interval while waiting for a probed process to exit.
const WAIT_POLL: Duration = Duration::from_millis(25);

/// Run `command` through the shell and capture its standard output.
///
/// The process is killed once `timeout` elapses. Stdin and stderr are
/// attached to the null device. A non-zero exit status is an error; the
/// caller decides whether that is fatal or merely "tool unavailable".
pub fn capture_stdout(command: &str, timeout: Duration) -> Result<String> {
    let shell = detect_shell();

    let mut child = Command::new(&shell)
        .arg(shell_flag())
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| PacksyncError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    // Drain stdout on a separate thread so a chatty process can't fill the
    // pipe and deadlock against our wait loop.
    let mut stdout = child.stdout.take().ok_or_else(|| PacksyncError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;
    let (tx, rx) = mpsc::channel();
    let reader = thread::spawn(move || {
        let mut buffer = String::new();
        let _ = stdout.read_to_string(&mut buffer);
        let _ = tx.send(buffer);
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                tracing::debug!(command, "probe timed out, killing process");
                let _ = child.kill();
                let _ = child.wait();
                let _ = reader.join();
                return Err(PacksyncError::CommandTimeout {
                    command: command.to_string(),
                    seconds: timeout.as_secs(),
                });
            }
            None => thread::sleep(WAIT_POLL),
        }
    };

    let output = rx.recv().unwrap_or_default();
    let _ = reader.join();

    if status.success() {
        Ok(output)
    } else {
        Err(PacksyncError::CommandFailed {
            command: command.to_string(),
            code: status.code(),
        })
    }
}

/// Detect the current shell executable.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Flag that passes a command string to the shell.
///
/// Uses `-lc` (login, non-interactive) on Unix so profile-managed PATH
/// entries are visible without the job-control errors `-i` causes when
/// there is no TTY.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn captures_stdout_of_successful_command() {
        let out = capture_stdout("echo hello", TEST_TIMEOUT).unwrap();
        assert!(out.contains("hello"));
    }

    #[test]
    fn nonzero_exit_is_command_failed() {
        let err = capture_stdout("exit 3", TEST_TIMEOUT).unwrap_err();
        match err {
            PacksyncError::CommandFailed { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stderr_is_discarded() {
        let out = capture_stdout("echo visible; echo hidden 1>&2", TEST_TIMEOUT).unwrap();
        assert!(out.contains("visible"));
        assert!(!out.contains("hidden"));
    }

    #[cfg(unix)]
    #[test]
    fn slow_command_times_out() {
        let err = capture_stdout("sleep 5", Duration::from_millis(300)).unwrap_err();
        assert!(matches!(err, PacksyncError::CommandTimeout { .. }));
    }

    #[test]
    fn detect_shell_returns_something() {
        assert!(!detect_shell().is_empty());
    }
}
