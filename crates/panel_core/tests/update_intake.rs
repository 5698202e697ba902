use std::sync::Once;

use panel_core::{
    format_file_size, update, validate_audio_file, AppState, Effect, FileMeta, IntakeStatus,
    Msg, PageKind, MAX_FILE_BYTES,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn boot_upload(max_files: Option<usize>) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::PageLoaded {
            page: PageKind::Upload,
            stored_theme: None,
            max_files,
        },
    );
    state
}

fn choose(state: AppState, files: Vec<FileMeta>) -> AppState {
    let (state, _) = update(state, Msg::FilesChosen(files));
    state
}

#[test]
fn accepts_known_audio_extensions_case_insensitively() {
    for name in ["a.wav", "b.MP3", "c.FlAc", "d.m4a", "e.ogg"] {
        assert!(
            validate_audio_file(&FileMeta::new(name, 1024)),
            "{name} should be accepted"
        );
    }
}

#[test]
fn rejects_unknown_extensions_and_missing_extension() {
    for name in ["notes.txt", "archive.zip", "motor.wav.exe", "README"] {
        assert!(
            !validate_audio_file(&FileMeta::new(name, 1024)),
            "{name} should be rejected"
        );
    }
}

#[test]
fn rejects_files_over_the_size_cap() {
    assert!(validate_audio_file(&FileMeta::new("ok.wav", MAX_FILE_BYTES)));
    assert!(!validate_audio_file(&FileMeta::new(
        "big.wav",
        MAX_FILE_BYTES + 1
    )));
}

#[test]
fn size_labels_match_expected_rendering() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(500), "500 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1500), "1.46 KB");
    assert_eq!(format_file_size(1_048_576), "1 MB");
    assert_eq!(format_file_size(1_073_741_824), "1 GB");
}

#[test]
fn empty_selection_hides_summary_and_disables_upload() {
    init_logging();
    let state = boot_upload(None);
    let view = state.view();

    assert!(view.summary.is_none());
    assert!(!view.upload_enabled);
}

#[test]
fn mixed_selection_counts_valid_rows_and_totals_all_sizes() {
    init_logging();
    let state = boot_upload(None);
    let state = choose(
        state,
        vec![
            FileMeta::new("bearing.wav", 2048),
            FileMeta::new("notes.txt", 1024),
            FileMeta::new("rotor.mp3", 1024),
        ],
    );
    let view = state.view();
    let summary = view.summary.expect("summary shown");

    assert_eq!(summary.status, IntakeStatus::Ready);
    assert_eq!(summary.valid_count, 2);
    assert_eq!(summary.total_count, 3);
    // Totals cover invalid files too: 2048 + 1024 + 1024 = 4096.
    assert_eq!(summary.total_size_label, "4 KB");
    let markers: Vec<bool> = summary.rows.iter().map(|r| r.valid).collect();
    assert_eq!(markers, vec![true, false, true]);
    assert!(view.upload_enabled);
}

#[test]
fn upload_disabled_when_no_file_is_valid() {
    init_logging();
    let state = boot_upload(None);
    let state = choose(state, vec![FileMeta::new("readme.txt", 64)]);
    let view = state.view();

    assert_eq!(view.summary.expect("summary").status, IntakeStatus::NoneValid);
    assert!(!view.upload_enabled);
}

#[test]
fn upload_disabled_when_valid_count_exceeds_host_maximum() {
    init_logging();
    let state = boot_upload(Some(2));
    let state = choose(
        state,
        vec![
            FileMeta::new("a.wav", 10),
            FileMeta::new("b.wav", 10),
            FileMeta::new("c.wav", 10),
        ],
    );
    let view = state.view();

    assert_eq!(view.summary.expect("summary").status, IntakeStatus::TooMany);
    assert!(!view.upload_enabled);
}

#[test]
fn reselection_replaces_the_previous_set() {
    init_logging();
    let state = boot_upload(None);
    let state = choose(state, vec![FileMeta::new("a.wav", 10)]);
    let state = choose(state, vec![FileMeta::new("b.txt", 10)]);
    let view = state.view();
    let summary = view.summary.expect("summary");

    assert_eq!(summary.total_count, 1);
    assert_eq!(summary.rows[0].name, "b.txt");
    assert!(!view.upload_enabled);
}

#[test]
fn dropped_files_flow_through_the_same_selection_path() {
    init_logging();
    // The drop adapter assigns the dropped list to the file input and then
    // raises the same FilesChosen message the picker raises; the reducer
    // outcome is identical for both entry methods.
    let picked = choose(boot_upload(None), vec![FileMeta::new("a.wav", 10)]);
    let dropped = choose(boot_upload(None), vec![FileMeta::new("a.wav", 10)]);

    assert_eq!(picked.view(), dropped.view());
}

#[test]
fn upload_submission_records_timestamp_only_when_allowed() {
    init_logging();
    let state = boot_upload(None);
    let (state, effects) = update(state, Msg::UploadSubmitted);
    assert!(effects.is_empty());

    let state = choose(state, vec![FileMeta::new("a.wav", 10)]);
    let (_state, effects) = update(state, Msg::UploadSubmitted);
    assert_eq!(effects, vec![Effect::PersistUploadTime]);
}
