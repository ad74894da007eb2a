//! Demo runner: executes registered demos one at a time, each isolated on a
//! blocking thread and bounded by a wall-time budget.
//!
//! Demos run strictly in sequence (never in parallel) so the collected
//! transcript order is reproducible. The only suspension point is the
//! timeout boundary: a demo that overruns its budget is abandoned on its
//! blocking thread (leaked for process lifetime, never accumulated across
//! runs) and the runner moves on.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::demo::{Demo, DemoResult};
use crate::registry::{DemoRegistry, RegistryError};

/// Error string recorded when a demo overruns its budget.
const TIMEOUT_ERROR: &str = "timeout";

/// Configuration for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Wall time limit per demo.
    pub timeout: Duration,
    /// Halt the run at the first failing demo.
    pub stop_on_failure: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(1000),
            stop_on_failure: false,
        }
    }
}

/// Execution state of a single demo.
///
/// Enforces the valid transition graph:
///
/// ```text
/// pending -> running
/// running -> succeeded
/// running -> failed
/// running -> timed_out
/// ```
///
/// Terminal states are final; there are no retries at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    Pending,
    Running,
    Succeeded,
    Failed,
    TimedOut,
}

impl ExecState {
    /// Check whether a transition from `from` to `to` is a valid edge in
    /// the state graph.
    pub fn is_valid_transition(from: ExecState, to: ExecState) -> bool {
        matches!(
            (from, to),
            (ExecState::Pending, ExecState::Running)
                | (ExecState::Running, ExecState::Succeeded)
                | (ExecState::Running, ExecState::Failed)
                | (ExecState::Running, ExecState::TimedOut)
        )
    }

    /// `true` for the three terminal states.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::TimedOut)
    }
}

impl fmt::Display for ExecState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::TimedOut => "timed_out",
        };
        f.write_str(s)
    }
}

/// Aggregate result of executing a set of demos.
///
/// Built incrementally by the runner, finalized when the run ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Demos attempted. With `stop_on_failure` this can be fewer than the
    /// registry holds.
    pub total: usize,
    /// Demos that finished with a success status.
    pub succeeded: usize,
    /// Demos that failed, panicked, or timed out.
    pub failed: usize,
    /// `true` if the run was cancelled before all selected demos ran.
    pub interrupted: bool,
    /// Per-demo results, in execution order.
    pub results: Vec<(String, DemoResult)>,
}

impl RunSummary {
    fn record(&mut self, name: String, result: DemoResult) {
        self.total += 1;
        if result.status.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.results.push((name, result));
    }
}

/// Run every registered demo in registration order.
pub async fn run_all(
    registry: &DemoRegistry,
    options: &RunOptions,
    cancel: CancellationToken,
) -> RunSummary {
    let demos: Vec<Arc<dyn Demo>> = registry.list().to_vec();
    run_demos(demos, options, cancel).await
}

/// Run a named subset of demos, in the order the names are given.
///
/// Every name is resolved before anything runs: one unknown name fails the
/// whole call with [`RegistryError::NotFound`] and no demo executes.
pub async fn run_selected(
    registry: &DemoRegistry,
    names: &[String],
    options: &RunOptions,
    cancel: CancellationToken,
) -> Result<RunSummary, RegistryError> {
    let mut demos = Vec::with_capacity(names.len());
    for name in names {
        demos.push(registry.get(name)?);
    }
    Ok(run_demos(demos, options, cancel).await)
}

/// Drive a sequence of demos to completion.
async fn run_demos(
    demos: Vec<Arc<dyn Demo>>,
    options: &RunOptions,
    cancel: CancellationToken,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for demo in demos {
        if cancel.is_cancelled() {
            tracing::info!("run cancelled, skipping remaining demos");
            summary.interrupted = true;
            break;
        }

        let name = demo.name().to_string();
        let mut state = ExecState::Pending;
        let started = Instant::now();

        debug_assert!(ExecState::is_valid_transition(state, ExecState::Running));
        state = ExecState::Running;
        tracing::debug!(demo = %name, state = %state, "starting demo");

        // Isolation boundary: the demo body runs on a blocking thread so a
        // hung demo cannot stall the runner past its budget. If the timeout
        // fires, the thread is abandoned, not cancelled.
        let handle = tokio::task::spawn_blocking(move || demo.run());

        let joined = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(demo = %name, "run cancelled mid-demo, abandoning it");
                summary.interrupted = true;
                break;
            }
            joined = tokio::time::timeout(options.timeout, handle) => joined,
        };

        let (terminal, result) = match joined {
            Ok(Ok(result)) => {
                if result.status.is_success() {
                    (ExecState::Succeeded, result)
                } else {
                    (ExecState::Failed, result)
                }
            }
            Ok(Err(join_err)) => {
                // The demo panicked. Downgrade to a failure so one broken
                // demo never prevents the others from running.
                let message = panic_message(join_err);
                tracing::warn!(demo = %name, error = %message, "demo panicked");
                (ExecState::Failed, DemoResult::failure(vec![], message))
            }
            Err(_elapsed) => {
                // No partial transcript: the event list never crossed the
                // join boundary.
                tracing::warn!(demo = %name, timeout_ms = options.timeout.as_millis() as u64, "demo timed out");
                (ExecState::TimedOut, DemoResult::failure(vec![], TIMEOUT_ERROR))
            }
        };

        debug_assert!(ExecState::is_valid_transition(state, terminal));
        state = terminal;
        tracing::info!(
            demo = %name,
            state = %state,
            status = %result.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "demo finished"
        );

        let failed = !result.status.is_success();
        summary.record(name, result);

        if failed && options.stop_on_failure {
            tracing::warn!("halting run: stop-on-failure is set");
            break;
        }
    }

    summary
}

/// Extract a human-readable message from a panicked blocking task.
fn panic_message(err: tokio::task::JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => {
            if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "demo panicked with a non-string payload".to_string()
            }
        }
        Err(err) => format!("demo task aborted: {err}"),
    }
}
