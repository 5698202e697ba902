use crate::state::Theme;

/// Side effects requested by the reducer, executed by the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the theme preference to client-local storage.
    PersistTheme(Theme),
    /// Record the upload timestamp in client-local storage.
    PersistUploadTime,
    /// Issue one status fetch.
    FetchStatus,
    /// Arm the recurring poll timer.
    StartPolling { period_ms: u32 },
    /// Cancel the recurring poll timer.
    StopPolling,
    /// Navigate to the results view after a grace period.
    NavigateToResults { delay_ms: u32 },
    /// Force a full page reload.
    ReloadPage,
    /// Reset the file input control.
    ResetFileInput,
    /// Write text to the platform clipboard.
    CopyToClipboard { text: String },
    /// Click the first CSV download link on the page.
    TriggerCsvDownload,
    /// Dismiss the alert with this sequence number after the delay.
    ScheduleAlertDismiss { seq: u64, delay_ms: u32 },
}
