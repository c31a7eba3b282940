#![forbid(unsafe_code)]

//! Fault reporting collaborators.
//!
//! A [`FaultBoundary`](crate::FaultBoundary) never owns a reporting
//! pipeline; it is handed a [`FaultSink`] at construction and calls it at
//! most once per contained failure. Sinks must tolerate being shared
//! across independent boundaries, and a sink that panics is the sink's
//! own problem: the boundary swallows it and still renders the fallback.
//!
//! [`JsonlFaultSink`] is the production sink: one JSON line per fault,
//! writes serialized behind a mutex so interleaving from sibling
//! boundaries cannot tear a line.

use crate::boundary::RenderFault;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, Once};

/// Diagnostic metadata captured at the moment of interception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultMetadata {
    /// Textual trace of the components active when the panic was raised,
    /// innermost first, one `    at Name` line each. Never empty: the
    /// boundary itself is always on the path.
    pub component_stack: String,
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

/// External collaborator that receives contained render failures.
///
/// Implementations must not panic; if one does anyway, the boundary
/// swallows the panic so reporting can never suppress the fallback.
pub trait FaultSink: Send + Sync {
    /// Receive a fault and its metadata. Called at most once per
    /// Healthy→Faulted transition of any one boundary.
    fn report(&self, fault: &RenderFault, metadata: &FaultMetadata);
}

/// Sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FaultSink for NullSink {
    fn report(&self, _fault: &RenderFault, _metadata: &FaultMetadata) {}
}

/// One report as recorded by [`MemorySink`].
#[derive(Debug, Clone)]
pub struct RecordedFault {
    /// Extracted panic message.
    pub message: String,
    /// The original payload when it was a `&'static str` (the common
    /// literal-panic case), preserved so callers can verify identity.
    pub static_payload: Option<&'static str>,
    /// Metadata as delivered.
    pub metadata: FaultMetadata,
}

/// In-memory sink for tests and inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<RecordedFault>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.lock().expect("memory sink lock poisoned").len()
    }

    /// Whether no report has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all recorded reports.
    #[must_use]
    pub fn reports(&self) -> Vec<RecordedFault> {
        self.reports
            .lock()
            .expect("memory sink lock poisoned")
            .clone()
    }
}

impl FaultSink for MemorySink {
    fn report(&self, fault: &RenderFault, metadata: &FaultMetadata) {
        let recorded = RecordedFault {
            message: fault.message().to_string(),
            static_payload: fault.downcast_ref::<&'static str>().copied(),
            metadata: metadata.clone(),
        };
        self.reports
            .lock()
            .expect("memory sink lock poisoned")
            .push(recorded);
    }
}

#[derive(Serialize)]
struct FaultLine<'a> {
    event: &'static str,
    message: &'a str,
    component_stack: &'a str,
    timestamp_ms: u64,
}

/// Shared, line-oriented JSONL sink for fault reports.
///
/// Ordering is deterministic with respect to call order because writes
/// are serialized behind a mutex; flushing after every line keeps e2e
/// captures complete even on abnormal exit.
#[derive(Clone)]
pub struct JsonlFaultSink {
    writer: Arc<Mutex<BufWriter<Box<dyn Write + Send>>>>,
}

impl JsonlFaultSink {
    /// Sink writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(io::stdout()))
    }

    /// Sink appending to a file at the given path.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(Box::new(file)))
    }

    fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(BufWriter::new(writer))),
        }
    }

    fn write_line(&self, fault: &RenderFault, metadata: &FaultMetadata) -> io::Result<()> {
        let line = serde_json::to_string(&FaultLine {
            event: "render_fault",
            message: fault.message(),
            component_stack: &metadata.component_stack,
            timestamp_ms: metadata.timestamp_ms,
        })?;
        let mut writer = self.writer.lock().expect("jsonl sink lock poisoned");
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl FaultSink for JsonlFaultSink {
    fn report(&self, fault: &RenderFault, metadata: &FaultMetadata) {
        // Reporting is best-effort: an IO failure must never reach the
        // boundary's render path.
        if let Err(err) = self.write_line(fault, metadata) {
            tracing::warn!(error = %err, "fault sink write failed");
        }
    }
}

/// Route panic output through `tracing` instead of stderr.
///
/// Contained panics still run the process-wide panic hook before the
/// boundary catches them; the default hook would spray a backtrace
/// banner for every detonation. Tests and demos that trigger faults on
/// purpose install this hook once to keep output readable. Idempotent.
pub fn install_panic_capture_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|l| format!("{}:{}", l.file(), l.line()))
                .unwrap_or_else(|| "<unknown>".to_string());
            tracing::debug!(%location, "panic raised (possibly contained)");
        }));
    });
}
