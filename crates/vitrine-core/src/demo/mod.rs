//! The `Demo` trait -- the contract every pattern demonstration implements.
//!
//! A demo is a pure-ish routine: no external input beyond its own fixed
//! sample data, and a single [`DemoResult`] out. Anything a console
//! demonstration would have printed is captured as ordered event strings
//! instead, so runs are deterministic and testable.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A named, self-contained pattern demonstration.
///
/// # Object Safety
///
/// This trait is object-safe so demos can be stored as `Arc<dyn Demo>` in
/// the [`crate::registry::DemoRegistry`].
///
/// # Contract
///
/// `run` must not panic: any internal fault should be caught and reported
/// as a `Failure` result. The runner still survives a panicking demo (it
/// downgrades the panic to a failure), but a well-behaved demo never relies
/// on that.
pub trait Demo: Send + Sync {
    /// Unique registry key, kebab-case (e.g. "factory-method").
    fn name(&self) -> &str;

    /// One-line human-readable description.
    fn description(&self) -> &str;

    /// Execute the demonstration and return its transcript.
    ///
    /// Must be repeatable: the same demo returns equal events and status
    /// on every invocation.
    fn run(&self) -> DemoResult;
}

// Compile-time assertion: Demo must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn Demo) {}
};

/// Final status of a single demo execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoStatus {
    Success,
    Failure,
}

impl DemoStatus {
    /// `true` for [`DemoStatus::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for DemoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Failure => "failure",
        };
        f.write_str(s)
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, thiserror::Error)]
#[error("unknown demo status: {0:?}")]
pub struct DemoStatusParseError(String);

impl FromStr for DemoStatus {
    type Err = DemoStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(DemoStatusParseError(other.to_string())),
        }
    }
}

/// The outcome of one demo execution: transcript, status, optional error.
///
/// Produced once per execution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoResult {
    /// Observable events in the exact order the demo produced them.
    pub events: Vec<String>,
    /// Final status.
    pub status: DemoStatus,
    /// Failure detail; `None` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DemoResult {
    /// A successful result carrying the given transcript.
    pub fn success(events: Vec<String>) -> Self {
        Self {
            events,
            status: DemoStatus::Success,
            error: None,
        }
    }

    /// A failed result carrying the transcript up to the fault.
    pub fn failure(events: Vec<String>, error: impl Into<String>) -> Self {
        Self {
            events,
            status: DemoStatus::Failure,
            error: Some(error.into()),
        }
    }
}

/// Ordered event recorder demos use while executing.
///
/// Replaces the print statements of a console demonstration: each call to
/// [`EventLog::record`] appends one line, and [`EventLog::finish`] hands the
/// transcript back in recording order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<String>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event line.
    pub fn record(&mut self, event: impl Into<String>) {
        self.events.push(event.into());
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the log and return the transcript in recording order.
    pub fn finish(self) -> Vec<String> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A trivial demo used only to prove the trait can be implemented and
    /// used as `dyn Demo`.
    struct NoopDemo;

    impl Demo for NoopDemo {
        fn name(&self) -> &str {
            "noop"
        }

        fn description(&self) -> &str {
            "Does nothing."
        }

        fn run(&self) -> DemoResult {
            DemoResult::success(vec![])
        }
    }

    #[test]
    fn demo_is_object_safe() {
        // If this compiles, the trait is object-safe.
        let demo: Box<dyn Demo> = Box::new(NoopDemo);
        assert_eq!(demo.name(), "noop");
        assert_eq!(demo.run().status, DemoStatus::Success);
    }

    #[test]
    fn event_log_preserves_order() {
        let mut log = EventLog::new();
        log.record("first");
        log.record(String::from("second"));
        log.record("third");
        assert_eq!(log.len(), 3);
        assert_eq!(log.finish(), vec!["first", "second", "third"]);
    }

    #[test]
    fn event_log_starts_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.finish().is_empty());
    }

    #[test]
    fn status_display_round_trips() {
        for status in [DemoStatus::Success, DemoStatus::Failure] {
            let parsed: DemoStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_parse_rejects_unknown() {
        let err = "exploded".parse::<DemoStatus>().unwrap_err();
        assert!(err.to_string().contains("exploded"));
    }

    #[test]
    fn result_constructors() {
        let ok = DemoResult::success(vec!["a".to_string()]);
        assert_eq!(ok.status, DemoStatus::Success);
        assert!(ok.error.is_none());

        let bad = DemoResult::failure(vec![], "boom");
        assert_eq!(bad.status, DemoStatus::Failure);
        assert_eq!(bad.error.as_deref(), Some("boom"));
    }
}
