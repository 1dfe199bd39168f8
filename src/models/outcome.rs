/// Raw result of running the generator process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// What the generator produced, consumed exactly once by the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Generated source text, inserted verbatim
    Success(String),
    /// Diagnostic text from the generator's stderr
    Failure(String),
}

impl From<ProcessOutput> for GenerationOutcome {
    fn from(output: ProcessOutput) -> Self {
        match output.exit_code {
            Some(0) => GenerationOutcome::Success(output.stdout),
            _ => GenerationOutcome::Failure(output.stderr),
        }
    }
}
