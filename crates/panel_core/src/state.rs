use std::collections::BTreeSet;

use crate::intake::{FileEntry, FileMeta, DEFAULT_MAX_FILES};
use crate::poll::{PollPhase, ProgressSnapshot};
use crate::view_model::{progress_view, summary_view, PageViewModel};

/// How long an alert banner stays up before it is dismissed.
pub const ALERT_DISMISS_MS: u32 = 5000;

/// Light/dark preference, persisted under the `theme` storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The value written to storage and to the root `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Which host page this controller booted on. Features whose page (or DOM
/// dependency) is absent stay inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    Upload,
    Progress,
    Results,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient banner. Only the newest alert is retained; the sequence
/// number lets a delayed dismissal recognize it has gone stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub seq: u64,
    pub kind: AlertKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    page: PageKind,
    theme: Theme,
    max_files: usize,
    files: Vec<FileEntry>,
    poll: PollPhase,
    snapshot: Option<ProgressSnapshot>,
    open_details: BTreeSet<String>,
    alert: Option<Alert>,
    next_alert_seq: u64,
    clearing: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: PageKind::default(),
            theme: Theme::default(),
            max_files: DEFAULT_MAX_FILES,
            files: Vec::new(),
            poll: PollPhase::default(),
            snapshot: None,
            open_details: BTreeSet::new(),
            alert: None,
            next_alert_seq: 1,
            clearing: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        let summary = summary_view(&self.files, self.max_files);
        let upload_enabled = summary
            .as_ref()
            .map(|s| s.valid_count > 0 && s.valid_count <= self.max_files)
            .unwrap_or(false);
        PageViewModel {
            page: self.page,
            theme: self.theme,
            summary,
            upload_enabled,
            progress: self.snapshot.as_ref().map(progress_view),
            open_details: self.open_details.iter().cloned().collect(),
            alert: self.alert.clone(),
            clearing: self.clearing,
            dirty: self.dirty,
        }
    }

    /// Hands the render flag to the shell; cleared until the next mutation.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn poll_phase(&self) -> PollPhase {
        self.poll
    }

    pub(crate) fn boot(
        &mut self,
        page: PageKind,
        stored_theme: Option<Theme>,
        max_files: Option<usize>,
    ) {
        self.page = page;
        self.theme = stored_theme.unwrap_or_default();
        if let Some(max) = max_files {
            self.max_files = max;
        }
        self.dirty = true;
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.dirty = true;
        self.theme
    }

    pub(crate) fn set_files(&mut self, files: Vec<FileMeta>) {
        self.files = files.into_iter().map(FileEntry::classify).collect();
        self.dirty = true;
    }

    pub(crate) fn clear_files(&mut self) -> bool {
        if self.files.is_empty() {
            return false;
        }
        self.files.clear();
        self.dirty = true;
        true
    }

    pub(crate) fn upload_allowed(&self) -> bool {
        let valid = self.files.iter().filter(|f| f.valid).count();
        valid > 0 && valid <= self.max_files
    }

    pub(crate) fn start_polling(&mut self) {
        self.poll = PollPhase::Polling;
        self.dirty = true;
    }

    pub(crate) fn finish_polling(&mut self, terminal: PollPhase) {
        debug_assert!(matches!(terminal, PollPhase::Done | PollPhase::Failed));
        self.poll = terminal;
        self.dirty = true;
    }

    pub(crate) fn apply_snapshot(&mut self, snapshot: ProgressSnapshot) {
        self.snapshot = Some(snapshot);
        self.dirty = true;
    }

    /// Returns whether the panel is now open.
    pub(crate) fn toggle_detail(&mut self, item_id: &str) -> bool {
        let opened = if self.open_details.remove(item_id) {
            false
        } else {
            self.open_details.insert(item_id.to_string());
            true
        };
        self.dirty = true;
        opened
    }

    pub(crate) fn close_all_details(&mut self) -> bool {
        if self.open_details.is_empty() {
            return false;
        }
        self.open_details.clear();
        self.dirty = true;
        true
    }

    /// Replaces any current alert with a newer one and returns its sequence
    /// number for the dismiss timer.
    pub(crate) fn push_alert(&mut self, kind: AlertKind, text: String) -> u64 {
        let seq = self.next_alert_seq;
        self.next_alert_seq += 1;
        self.alert = Some(Alert { seq, kind, text });
        self.dirty = true;
        seq
    }

    /// Clears the alert only if the deadline belongs to the alert still on
    /// screen; a stale seq means a newer alert replaced it in the meantime.
    pub(crate) fn expire_alert(&mut self, seq: u64) -> bool {
        match &self.alert {
            Some(alert) if alert.seq == seq => {
                self.alert = None;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn begin_clearing(&mut self) {
        self.clearing = true;
        self.dirty = true;
    }
}
