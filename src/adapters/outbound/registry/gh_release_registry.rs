use crate::ports::outbound::{ReleaseQueryOutcome, ReleaseRegistry};
use crate::provider_project::domain::RepositorySlug;
use async_trait::async_trait;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// GhReleaseRegistry adapter querying GitHub releases through the `gh` CLI
///
/// Runs `gh release list -L 10000000 -R <repository>` and looks for a tag
/// containing `v1.` in its output. The filtering happens here rather than in
/// a shell pipeline, so the repository slug never reaches a shell.
///
/// # Failure handling
/// - `gh` missing or not executable, non-zero exit, killed by a signal and
///   exceeding the timeout all map to [`ReleaseQueryOutcome::Failed`]
/// - The child process is killed when the timeout drops it
pub struct GhReleaseRegistry {
    program: String,
    timeout: Duration,
}

impl GhReleaseRegistry {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
    const RELEASE_LIMIT: &'static str = "10000000";
    const MAJOR_V1_PATTERN: &'static str = "v1.";

    /// Creates a registry using `gh` from `PATH` and the default timeout
    pub fn new() -> Self {
        Self {
            program: "gh".to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Uses a different executable in place of `gh`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn command_args(repository: &RepositorySlug) -> Vec<String> {
        vec![
            "release".to_string(),
            "list".to_string(),
            "-L".to_string(),
            Self::RELEASE_LIMIT.to_string(),
            "-R".to_string(),
            repository.to_string(),
        ]
    }

    /// Interprets the finished `gh release list` process
    fn interpret(output: &Output) -> ReleaseQueryOutcome {
        match output.status.code() {
            Some(0) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if stdout
                    .lines()
                    .any(|line| line.contains(Self::MAJOR_V1_PATTERN))
                {
                    ReleaseQueryOutcome::Found
                } else {
                    ReleaseQueryOutcome::NotFound
                }
            }
            Some(code) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                ReleaseQueryOutcome::Failed(format!(
                    "gh exited with status {}: {}",
                    code,
                    stderr.trim()
                ))
            }
            None => ReleaseQueryOutcome::Failed("gh was terminated by a signal".to_string()),
        }
    }
}

impl Default for GhReleaseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReleaseRegistry for GhReleaseRegistry {
    async fn query_major_v1_release(&self, repository: &RepositorySlug) -> ReleaseQueryOutcome {
        let args = Self::command_args(repository);
        tracing::debug!(program = %self.program, ?args, "querying release registry");

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let outcome = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => ReleaseQueryOutcome::Failed(format!(
                "gh did not finish within {} second(s)",
                self.timeout.as_secs_f32()
            )),
            Ok(Err(e)) => {
                ReleaseQueryOutcome::Failed(format!("failed to run {}: {}", self.program, e))
            }
            Ok(Ok(output)) => Self::interpret(&output),
        };

        tracing::debug!(repository = %repository, ?outcome, "release registry answered");
        outcome
    }
}
