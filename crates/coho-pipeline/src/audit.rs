use std::time::{Duration, Instant};

/// Status of a step in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepStatus {
    /// Step has started and not finished yet.
    Running,
    /// Step executed successfully.
    Executed,
    /// Step failed and aborted the pipeline.
    Failed,
}

/// Record of a step's execution.
#[derive(Debug)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    pub started_at: Instant,
    pub completed_at: Option<Instant>,
}

impl StepRecord {
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.completed_at
            .map(|done| done.saturating_duration_since(self.started_at))
    }
}

/// Audit log of the steps a pipeline ran.
///
/// Steps after a failure never start, so they have no record.
#[derive(Debug, Default)]
pub struct PipelineAuditLog {
    records: Vec<StepRecord>,
}

impl PipelineAuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_start(&mut self, name: &str) {
        self.records.push(StepRecord {
            name: name.to_string(),
            status: StepStatus::Running,
            started_at: Instant::now(),
            completed_at: None,
        });
    }

    pub(crate) fn record_success(&mut self) {
        self.finish_last(StepStatus::Executed);
    }

    pub(crate) fn record_failure(&mut self) {
        self.finish_last(StepStatus::Failed);
    }

    fn finish_last(&mut self, status: StepStatus) {
        if let Some(record) = self.records.last_mut() {
            record.status = status;
            record.completed_at = Some(Instant::now());
        }
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    #[must_use]
    pub fn failed_step(&self) -> Option<&StepRecord> {
        self.records
            .iter()
            .find(|record| record.status == StepStatus::Failed)
    }

    /// One line per step, for display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for record in &self.records {
            let status = match record.status {
                StepStatus::Running => "…",
                StepStatus::Executed => "✓",
                StepStatus::Failed => "✗",
            };
            match record.duration() {
                Some(duration) => lines.push(format!(
                    "{status} {} ({:.1}s)",
                    record.name,
                    duration.as_secs_f64()
                )),
                None => lines.push(format!("{status} {}", record.name)),
            }
        }
        lines.join("\n")
    }
}
