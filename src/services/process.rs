//! External scaffolding tool execution.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use crate::domain::AppError;

/// Run `program` with `args`, relaying its output live.
///
/// stdout and stderr are drained on dedicated threads while this thread waits
/// on the child, so a filled pipe can never stall either side. Both drains
/// are joined before the exit status is turned into a result, which makes the
/// captured output complete by the time a failure is reported.
pub fn run(program: &str, args: &[String]) -> Result<(), AppError> {
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout_drain = child.stdout.take().map(|stream| spawn_drain(stream, false));
    let stderr_drain = child.stderr.take().map(|stream| spawn_drain(stream, true));

    let status = child.wait()?;

    let mut output = String::new();
    for drain in [stdout_drain, stderr_drain].into_iter().flatten() {
        output.push_str(&drain.join().unwrap_or_default());
    }

    if status.success() {
        return Ok(());
    }

    Err(AppError::ExternalTool {
        command: program.to_string(),
        status: status.code().unwrap_or(-1),
        output,
    })
}

fn spawn_drain<R: Read + Send + 'static>(stream: R, to_stderr: bool) -> JoinHandle<String> {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        let mut captured = String::new();
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if to_stderr {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
            captured.push_str(&line);
            captured.push('\n');
        }
        captured
    })
}
