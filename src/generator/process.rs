use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::host::GeneratorProcess;
use crate::models::ProcessOutput;

/// Runs the generator as a child process and waits for it to exit.
///
/// No timeout is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuicktypeProcess;

impl GeneratorProcess for QuicktypeProcess {
    fn run(&self, executable: &Path, args: &[String]) -> io::Result<ProcessOutput> {
        debug!(executable = %executable.display(), ?args, "spawning generator");

        let output = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
