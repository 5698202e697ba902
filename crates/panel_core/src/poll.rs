/// Fixed period between status fetches on the progress view.
pub const POLL_PERIOD_MS: u32 = 2000;

/// Grace period between a completed batch and navigation to the results view.
pub const RESULTS_REDIRECT_DELAY_MS: u32 = 1000;

/// Batch status as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    #[default]
    Pending,
    Processing,
    Completed,
    Error,
    /// Any status label this layer does not recognize.
    Unknown,
}

impl BatchPhase {
    /// Maps the server's status label onto a phase. Unrecognized labels are
    /// kept non-terminal so the poll loop keeps going.
    pub fn from_label(label: &str) -> Self {
        match label {
            "pending" => BatchPhase::Pending,
            "processing" => BatchPhase::Processing,
            "completed" => BatchPhase::Completed,
            "error" => BatchPhase::Error,
            _ => BatchPhase::Unknown,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BatchPhase::Completed | BatchPhase::Error)
    }
}

/// Poller lifecycle. The timer is armed exactly while in `Polling` and is
/// cancelled exactly once, on the transition into `Done` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    #[default]
    Idle,
    Polling,
    Done,
    Failed,
}

/// The latest polled state of batch processing. Each poll response fully
/// replaces the previous snapshot; there is no merge or diff step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressSnapshot {
    pub status: BatchPhase,
    pub progress: f64,
    pub current_file: u32,
    pub total_files: u32,
    pub current_filename: String,
    pub completed_files: Vec<String>,
    pub errors: Vec<String>,
}
