//! Subprocess execution with a deadline.

use crate::error::{Result, VerifyError};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of a finished subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the process exited with status 0.
    pub success: bool,
}

/// Run `program` with `args` and extra environment, capturing both streams.
///
/// The child is killed if it is still running after `timeout`. `label` is
/// only used in errors and logs.
pub fn run_with_timeout(
    label: &str,
    program: &Path,
    args: &[&str],
    env: &[(&str, String)],
    timeout: Duration,
) -> Result<ProcessOutput> {
    tracing::debug!("Running probe: {}", label);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().map_err(|e| VerifyError::ProbeFailed {
        command: label.to_string(),
        message: e.to_string(),
    })?;

    // Pipes are drained on their own threads so a chatty child cannot
    // block on a full pipe while we poll for exit.
    let (tx, rx) = mpsc::channel();
    let mut pending = 0;
    if let Some(out) = child.stdout.take() {
        drain(out, Stream::Stdout, tx.clone());
        pending += 1;
    }
    if let Some(err) = child.stderr.take() {
        drain(err, Stream::Stderr, tx.clone());
        pending += 1;
    }
    drop(tx);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                reap(&mut child);
                return Err(e.into());
            }
        }
        if Instant::now() >= deadline {
            reap(&mut child);
            return Err(timed_out(label, timeout));
        }
        thread::sleep(POLL_INTERVAL);
    };

    // A background grandchild can hold the pipes open after the child
    // exits, so collecting output is bound by the same deadline.
    let mut stdout = String::new();
    let mut stderr = String::new();
    while pending > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, text)) => stdout = text,
            Ok((Stream::Stderr, text)) => stderr = text,
            Err(RecvTimeoutError::Timeout) => return Err(timed_out(label, timeout)),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        pending -= 1;
    }

    tracing::debug!("Probe finished: {} (exit {:?})", label, status.code());

    Ok(ProcessOutput {
        exit_code: status.code(),
        stdout,
        stderr,
        success: status.success(),
    })
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn drain<R: Read + Send + 'static>(mut reader: R, stream: Stream, tx: Sender<(Stream, String)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).to_string()));
    });
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn timed_out(label: &str, timeout: Duration) -> VerifyError {
    tracing::warn!("Probe timed out: {}", label);
    VerifyError::ProbeTimedOut {
        command: label.to_string(),
        seconds: timeout.as_secs(),
    }
}
