//! Plugin process execution with a timeout.

use std::io::{Read, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Why a plugin invocation failed.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("failed to start: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    Failed { code: Option<i32>, stderr: String },

    #[error("{0}")]
    InvalidResponse(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Read `pipe` to the end on its own thread and send the buffer to `tx`.
fn spawn_reader(
    stream: Stream,
    mut pipe: impl Read + Send + 'static,
    tx: Sender<(Stream, String)>,
) {
    thread::spawn(move || {
        let mut buf = String::new();
        let _ = pipe.read_to_string(&mut buf);
        let _ = tx.send((stream, buf));
    });
}

/// Run `<program> <subcommand>`, optionally feeding `input` on stdin, and
/// return its stdout.
///
/// The child is killed once `timeout` elapses, and the whole call, including
/// collecting output, never takes longer than `timeout`. Output readers run
/// on their own threads so a chatty plugin cannot fill a pipe and stall.
pub fn invoke(
    program: &Path,
    subcommand: &str,
    input: Option<Vec<u8>>,
    timeout: Duration,
) -> Result<String, PluginError> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.arg(subcommand);
    cmd.stdin(if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    });
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(PluginError::Spawn)?;

    if let (Some(mut stdin), Some(bytes)) = (child.stdin.take(), input) {
        // A plugin may exit without reading its input; the broken pipe is
        // not an error on our side.
        thread::spawn(move || {
            let _ = stdin.write_all(&bytes);
        });
    }

    let (tx, rx) = mpsc::channel();
    if let Some(out) = child.stdout.take() {
        spawn_reader(Stream::Stdout, out, tx.clone());
    }
    if let Some(err) = child.stderr.take() {
        spawn_reader(Stream::Stderr, err, tx.clone());
    }
    drop(tx);

    let deadline = start + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                tracing::debug!("Plugin {} timed out", program.display());
                // Reader threads are detached; grandchildren may still hold
                // the pipes open.
                return Err(PluginError::Timeout(timeout));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(PluginError::Spawn(e));
            }
        }
    };

    // The child has exited, but a background process it started can keep
    // the pipes open. Output must still arrive before the deadline.
    let mut stdout = String::new();
    let mut stderr = String::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, buf)) => stdout = buf,
            Ok((Stream::Stderr, buf)) => stderr = buf,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                tracing::debug!(
                    "Plugin {} exited but its output stayed open",
                    program.display()
                );
                return Err(PluginError::Timeout(timeout));
            }
        }
    }

    tracing::debug!(
        "Plugin {} {} finished in {:?}",
        program.display(),
        subcommand,
        start.elapsed()
    );

    if status.success() {
        Ok(stdout)
    } else {
        Err(PluginError::Failed {
            code: status.code(),
            stderr: stderr.trim().to_string(),
        })
    }
}
