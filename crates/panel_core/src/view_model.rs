use crate::intake::{format_file_size, FileEntry};
use crate::poll::{BatchPhase, ProgressSnapshot};
use crate::state::{Alert, PageKind, Theme};

/// Overall verdict on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStatus {
    Ready,
    TooMany,
    NoneValid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRowView {
    pub name: String,
    pub size_label: String,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummaryView {
    pub status: IntakeStatus,
    pub rows: Vec<FileRowView>,
    pub valid_count: usize,
    pub total_count: usize,
    pub total_size_label: String,
    pub max_files: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub phase: BatchPhase,
    /// Bar width, clamped to 0..=100.
    pub percent: f64,
    pub current_file: u32,
    pub total_files: u32,
    pub current_filename: String,
    pub completed_files: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel {
    pub page: PageKind,
    pub theme: Theme,
    /// `None` hides the summary block entirely (empty selection).
    pub summary: Option<FileSummaryView>,
    pub upload_enabled: bool,
    pub progress: Option<ProgressView>,
    pub open_details: Vec<String>,
    pub alert: Option<Alert>,
    pub clearing: bool,
    pub dirty: bool,
}

pub(crate) fn summary_view(files: &[FileEntry], max_files: usize) -> Option<FileSummaryView> {
    if files.is_empty() {
        return None;
    }
    let valid_count = files.iter().filter(|f| f.valid).count();
    // Totals cover every selected file, invalid ones included.
    let total_bytes: u64 = files.iter().map(|f| f.meta.size).sum();
    let status = if valid_count == 0 {
        IntakeStatus::NoneValid
    } else if valid_count > max_files {
        IntakeStatus::TooMany
    } else {
        IntakeStatus::Ready
    };
    let rows = files
        .iter()
        .map(|f| FileRowView {
            name: f.meta.name.clone(),
            size_label: format_file_size(f.meta.size),
            valid: f.valid,
        })
        .collect();
    Some(FileSummaryView {
        status,
        rows,
        valid_count,
        total_count: files.len(),
        total_size_label: format_file_size(total_bytes),
        max_files,
    })
}

pub(crate) fn progress_view(snapshot: &ProgressSnapshot) -> ProgressView {
    ProgressView {
        phase: snapshot.status,
        percent: snapshot.progress.clamp(0.0, 100.0),
        current_file: snapshot.current_file,
        total_files: snapshot.total_files,
        current_filename: snapshot.current_filename.clone(),
        completed_files: snapshot.completed_files.clone(),
        errors: snapshot.errors.clone(),
    }
}
