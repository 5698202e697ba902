use crate::intake::FileMeta;
use crate::poll::ProgressSnapshot;
use crate::state::{PageKind, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page booted; carries everything the shell read from the host document.
    PageLoaded {
        page: PageKind,
        stored_theme: Option<Theme>,
        max_files: Option<usize>,
    },
    /// User clicked the theme toggle.
    ThemeToggleClicked,
    /// Selection changed, via the file picker or a drop (single code path).
    FilesChosen(Vec<FileMeta>),
    /// Upload form submitted.
    UploadSubmitted,
    /// The recurring poll timer fired.
    PollTick,
    /// A status fetch resolved with a payload.
    StatusReceived(ProgressSnapshot),
    /// A status fetch failed (network or malformed payload).
    StatusFetchFailed(String),
    /// Per-item details toggle clicked.
    DetailToggled { item_id: String },
    /// User confirmed the clear prompt.
    ClearConfirmed,
    /// User declined the clear prompt.
    ClearDeclined,
    /// A download control was clicked; target is the link destination.
    DownloadClicked { target: String },
    /// A feature value was clicked for copying.
    CopyRequested { text: String },
    /// An alert banner reached its dismiss deadline.
    AlertTimedOut { seq: u64 },
    /// Escape pressed anywhere on the page.
    EscapePressed,
    /// Ctrl/Cmd+D pressed.
    CsvShortcutPressed,
    /// Ctrl/Cmd+R pressed.
    ReloadShortcutPressed,
    /// Fallback for placeholder wiring.
    NoOp,
}
