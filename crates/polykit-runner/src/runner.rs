//! Git and script execution for the external algorithm.
//!
//! Every operation exists as an `async fn` and as a `spawn_*` variant that
//! runs on the tokio runtime and reports once through a oneshot channel.
//! The `spawn_*` variants must be called from within a runtime.

use std::ffi::OsStr;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::process::Command;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use polykit_settings::RunnerSettings;

use crate::branches::parse_branch_list;
use crate::error::{JobKind, RunnerError, RunnerResult};
use crate::params::AlgorithmParams;
use crate::script::{render_driver_script, SCRIPT_PREFIX};

/// Single completion signal of a background job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerOutcome<T = String> {
    Completed(T),
    Failed(String),
}

impl<T> From<RunnerResult<T>> for RunnerOutcome<T> {
    fn from(result: RunnerResult<T>) -> Self {
        match result {
            Ok(value) => RunnerOutcome::Completed(value),
            Err(e) => RunnerOutcome::Failed(e.to_string()),
        }
    }
}

/// Slot holding the handle of the one running job of a kind.
#[derive(Debug, Clone, Default)]
struct JobSlot {
    handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl JobSlot {
    fn is_running(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn start<F>(&self, kind: JobKind, job: F) -> RunnerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut guard = self.handle.lock();
        if guard.as_ref().is_some_and(|handle| !handle.is_finished()) {
            tracing::warn!("{} thread already running", kind);
            return Err(RunnerError::Busy(kind));
        }
        *guard = Some(tokio::spawn(job));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AlgorithmRunner {
    repository_path: PathBuf,
    script_path: PathBuf,
    python: String,
    branch_loader: JobSlot,
    branch_changer: JobSlot,
    executor: JobSlot,
}

impl AlgorithmRunner {
    pub fn new(settings: &RunnerSettings) -> Self {
        Self::with_paths(
            settings.repository_path(),
            settings.script_path(),
            settings.python.clone(),
        )
    }

    pub fn with_paths(
        repository_path: impl Into<PathBuf>,
        script_path: impl Into<PathBuf>,
        python: impl Into<String>,
    ) -> Self {
        let runner = Self {
            repository_path: repository_path.into(),
            script_path: script_path.into(),
            python: python.into(),
            branch_loader: JobSlot::default(),
            branch_changer: JobSlot::default(),
            executor: JobSlot::default(),
        };
        tracing::debug!(
            "Initialized algorithm runner for repository {}",
            runner.repository_path.display()
        );
        runner
    }

    pub fn repository_path(&self) -> &Path {
        &self.repository_path
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    pub fn is_running(&self, kind: JobKind) -> bool {
        self.slot(kind).is_running()
    }

    /// Branches of the algorithm repository, sorted and de-duplicated.
    pub async fn list_branches(&self) -> RunnerResult<Vec<String>> {
        tracing::debug!("Loading branches from {}", self.repository_path.display());
        let output = run_command("git", ["branch", "-a"], &self.repository_path).await?;
        let branches = parse_branch_list(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!("Loaded {} branches", branches.len());
        Ok(branches)
    }

    /// Checks out `branch` and returns its name.
    pub async fn checkout_branch(&self, branch: &str) -> RunnerResult<String> {
        tracing::debug!("Changing branch to: {}", branch);
        run_command("git", ["checkout", branch], &self.repository_path).await?;
        tracing::debug!("Successfully changed to branch: {}", branch);
        Ok(branch.to_string())
    }

    /// Runs the algorithm and returns its stdout, followed by stderr when
    /// the script wrote any.
    pub async fn execute(&self, params: &AlgorithmParams) -> RunnerResult<String> {
        tracing::debug!(
            "Executing algorithm with {} obstacles",
            params.obstacle_count()
        );
        let script = render_driver_script(params)?;

        // Removed when dropped, after the interpreter has exited.
        let mut file = tempfile::Builder::new()
            .prefix(SCRIPT_PREFIX)
            .suffix(".py")
            .tempfile_in(&self.script_path)?;
        file.write_all(script.as_bytes())?;
        file.flush()?;
        tracing::debug!("Created execution script: {}", file.path().display());

        let output = run_command(&self.python, [file.path()], &self.script_path).await?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            text.push_str("\nStderr: ");
            text.push_str(&stderr);
        }
        tracing::debug!("Algorithm execution completed successfully");
        Ok(text)
    }

    pub fn spawn_list_branches(
        &self,
    ) -> RunnerResult<oneshot::Receiver<RunnerOutcome<Vec<String>>>> {
        let runner = self.clone();
        self.spawn(JobKind::ListBranches, async move {
            runner.list_branches().await
        })
    }

    pub fn spawn_checkout_branch(
        &self,
        branch: impl Into<String>,
    ) -> RunnerResult<oneshot::Receiver<RunnerOutcome>> {
        let runner = self.clone();
        let branch = branch.into();
        self.spawn(JobKind::Checkout, async move {
            runner.checkout_branch(&branch).await
        })
    }

    pub fn spawn_execute(
        &self,
        params: AlgorithmParams,
    ) -> RunnerResult<oneshot::Receiver<RunnerOutcome>> {
        let runner = self.clone();
        self.spawn(JobKind::Execute, async move { runner.execute(&params).await })
    }

    fn spawn<T, F>(&self, kind: JobKind, job: F) -> RunnerResult<oneshot::Receiver<RunnerOutcome<T>>>
    where
        T: Send + 'static,
        F: Future<Output = RunnerResult<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.slot(kind).start(kind, async move {
            let result = job.await;
            if let Err(e) = &result {
                tracing::error!("{} error: {}", kind, e);
            }
            // The receiver may have been dropped by a host that lost interest.
            tx.send(RunnerOutcome::from(result)).ok();
        })?;
        Ok(rx)
    }

    fn slot(&self, kind: JobKind) -> &JobSlot {
        match kind {
            JobKind::ListBranches => &self.branch_loader,
            JobKind::Checkout => &self.branch_changer,
            JobKind::Execute => &self.executor,
        }
    }
}

/// Awaits a spawned job's outcome, mapping a vanished task to a failure.
pub async fn wait_for<T>(receiver: oneshot::Receiver<RunnerOutcome<T>>) -> RunnerOutcome<T> {
    receiver
        .await
        .unwrap_or_else(|_| RunnerOutcome::Failed(RunnerError::TaskDropped.to_string()))
}

async fn run_command<I, S>(program: &str, args: I, cwd: &Path) -> RunnerResult<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let command_line = std::iter::once(program.to_string())
        .chain(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()))
        .collect::<Vec<_>>()
        .join(" ");

    let output = Command::new(program)
        .args(&args)
        .current_dir(cwd)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| RunnerError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RunnerError::CommandFailed {
            command: command_line,
            code: output.status.code(),
            stderr,
        });
    }
    Ok(output)
}
