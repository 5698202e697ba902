//! Panel core: pure page-controller state machine and view-model helpers.
mod effect;
mod intake;
mod msg;
mod poll;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use intake::{
    file_extension, format_file_size, validate_audio_file, FileEntry, FileMeta,
    ALLOWED_EXTENSIONS, DEFAULT_MAX_FILES, MAX_FILE_BYTES,
};
pub use msg::Msg;
pub use poll::{
    BatchPhase, PollPhase, ProgressSnapshot, POLL_PERIOD_MS, RESULTS_REDIRECT_DELAY_MS,
};
pub use state::{Alert, AlertKind, AppState, PageKind, Theme, ALERT_DISMISS_MS};
pub use update::update;
pub use view_model::{
    FileRowView, FileSummaryView, IntakeStatus, PageViewModel, ProgressView,
};
