use std::sync::Once;

use panel_core::{
    update, AlertKind, AppState, Effect, FileMeta, Msg, PageKind, Theme, ALERT_DISMISS_MS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn boot(page: PageKind, stored_theme: Option<Theme>) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::PageLoaded {
            page,
            stored_theme,
            max_files: None,
        },
    );
    state
}

#[test]
fn stored_theme_is_adopted_and_defaults_to_light() {
    init_logging();
    assert_eq!(boot(PageKind::Upload, None).theme(), Theme::Light);
    assert_eq!(
        boot(PageKind::Upload, Some(Theme::Dark)).theme(),
        Theme::Dark
    );
}

#[test]
fn theme_toggled_twice_returns_to_the_original_preference() {
    init_logging();
    let state = boot(PageKind::Upload, None);

    let (state, effects) = update(state, Msg::ThemeToggleClicked);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Dark)]);

    let (state, effects) = update(state, Msg::ThemeToggleClicked);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Light)]);
}

#[test]
fn detail_toggle_tracks_open_panels_per_item() {
    init_logging();
    let state = boot(PageKind::Results, None);

    let (state, _) = update(
        state,
        Msg::DetailToggled {
            item_id: "motor_a".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::DetailToggled {
            item_id: "motor_b".to_string(),
        },
    );
    assert_eq!(state.view().open_details, vec!["motor_a", "motor_b"]);

    let (state, _) = update(
        state,
        Msg::DetailToggled {
            item_id: "motor_a".to_string(),
        },
    );
    assert_eq!(state.view().open_details, vec!["motor_b"]);
}

#[test]
fn declined_clear_changes_nothing() {
    init_logging();
    let state = boot(PageKind::Results, None);
    let before = state.view();

    let (state, effects) = update(state, Msg::ClearDeclined);
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
}

#[test]
fn confirmed_clear_shows_the_loading_indicator() {
    init_logging();
    let state = boot(PageKind::Results, None);

    let (state, effects) = update(state, Msg::ClearConfirmed);
    assert!(effects.is_empty());
    assert!(state.view().clearing);
}

#[test]
fn download_click_labels_the_format_from_the_target() {
    init_logging();
    let cases = [
        ("/download/csv", "CSV"),
        ("/download/features.json", "JSON"),
        ("/download/spectrograms.zip", "ZIP"),
        ("/download/everything", "file"),
    ];
    for (target, label) in cases {
        let state = boot(PageKind::Results, None);
        let (state, effects) = update(
            state,
            Msg::DownloadClicked {
                target: target.to_string(),
            },
        );
        let alert = state.view().alert.expect("alert shown");
        assert_eq!(alert.kind, AlertKind::Info);
        assert!(
            alert.text.contains(label),
            "target {target} should announce {label}, got: {}",
            alert.text
        );
        assert_eq!(
            effects,
            vec![Effect::ScheduleAlertDismiss {
                seq: alert.seq,
                delay_ms: ALERT_DISMISS_MS
            }]
        );
    }
}

#[test]
fn copy_request_trims_text_and_announces_success() {
    init_logging();
    let state = boot(PageKind::Results, None);

    let (state, effects) = update(
        state,
        Msg::CopyRequested {
            text: "  412.5 Hz  ".to_string(),
        },
    );
    let alert = state.view().alert.expect("alert shown");
    assert_eq!(alert.kind, AlertKind::Success);
    assert_eq!(
        effects,
        vec![
            Effect::CopyToClipboard {
                text: "412.5 Hz".to_string()
            },
            Effect::ScheduleAlertDismiss {
                seq: alert.seq,
                delay_ms: ALERT_DISMISS_MS
            },
        ]
    );
}

#[test]
fn newest_alert_wins_and_stale_dismissals_are_ignored() {
    init_logging();
    let state = boot(PageKind::Results, None);

    let (state, _) = update(
        state,
        Msg::DownloadClicked {
            target: "/download/csv".to_string(),
        },
    );
    let first_seq = state.view().alert.expect("first alert").seq;

    let (state, _) = update(
        state,
        Msg::CopyRequested {
            text: "42".to_string(),
        },
    );
    let second = state.view().alert.expect("second alert");
    assert_ne!(second.seq, first_seq);
    assert_eq!(second.kind, AlertKind::Success);

    // The first alert's dismiss deadline fires after it was replaced.
    let (state, effects) = update(state, Msg::AlertTimedOut { seq: first_seq });
    assert!(effects.is_empty());
    assert!(state.view().alert.is_some());

    let (state, _) = update(state, Msg::AlertTimedOut { seq: second.seq });
    assert!(state.view().alert.is_none());
}

#[test]
fn escape_clears_selection_and_closes_panels() {
    init_logging();
    let state = boot(PageKind::Upload, None);
    let (state, _) = update(
        state,
        Msg::FilesChosen(vec![FileMeta::new("bearing.wav", 64)]),
    );
    let (state, _) = update(
        state,
        Msg::DetailToggled {
            item_id: "motor_a".to_string(),
        },
    );

    let (state, effects) = update(state, Msg::EscapePressed);
    let view = state.view();
    assert!(view.summary.is_none());
    assert!(view.open_details.is_empty());
    assert!(!view.upload_enabled);
    assert_eq!(effects, vec![Effect::ResetFileInput]);

    // Nothing left to clear: Escape becomes a no-op.
    let (_, effects) = update(state, Msg::EscapePressed);
    assert!(effects.is_empty());
}

#[test]
fn csv_shortcut_requests_the_first_csv_link() {
    init_logging();
    let state = boot(PageKind::Results, None);
    let (_, effects) = update(state, Msg::CsvShortcutPressed);

    assert_eq!(effects, vec![Effect::TriggerCsvDownload]);
}

#[test]
fn reload_shortcut_is_progress_view_only() {
    init_logging();
    let state = boot(PageKind::Progress, None);
    let (_, effects) = update(state, Msg::ReloadShortcutPressed);
    assert_eq!(effects, vec![Effect::ReloadPage]);

    let state = boot(PageKind::Results, None);
    let (_, effects) = update(state, Msg::ReloadShortcutPressed);
    assert!(effects.is_empty());
}
