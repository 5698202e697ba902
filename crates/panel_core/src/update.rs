use crate::poll::{BatchPhase, PollPhase, POLL_PERIOD_MS, RESULTS_REDIRECT_DELAY_MS};
use crate::state::{AlertKind, ALERT_DISMISS_MS};
use crate::{AppState, Effect, Msg, PageKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded {
            page,
            stored_theme,
            max_files,
        } => {
            state.boot(page, stored_theme, max_files);
            if page == PageKind::Progress {
                state.start_polling();
                // One immediate fetch, then the fixed-period timer.
                vec![
                    Effect::FetchStatus,
                    Effect::StartPolling {
                        period_ms: POLL_PERIOD_MS,
                    },
                ]
            } else {
                Vec::new()
            }
        }
        Msg::ThemeToggleClicked => {
            let next = state.toggle_theme();
            vec![Effect::PersistTheme(next)]
        }
        Msg::FilesChosen(files) => {
            state.set_files(files);
            Vec::new()
        }
        Msg::UploadSubmitted => {
            if state.upload_allowed() {
                vec![Effect::PersistUploadTime]
            } else {
                Vec::new()
            }
        }
        Msg::PollTick => {
            if state.poll_phase() == PollPhase::Polling {
                vec![Effect::FetchStatus]
            } else {
                // A tick that raced the cancellation; nothing to fetch.
                Vec::new()
            }
        }
        Msg::StatusReceived(snapshot) => {
            if state.poll_phase() != PollPhase::Polling {
                // Late response after a terminal status; the snapshot on
                // screen stays as-is and navigation is not re-scheduled.
                return (state, Vec::new());
            }
            let phase = snapshot.status;
            state.apply_snapshot(snapshot);
            match phase {
                BatchPhase::Completed => {
                    state.finish_polling(PollPhase::Done);
                    vec![
                        Effect::StopPolling,
                        Effect::NavigateToResults {
                            delay_ms: RESULTS_REDIRECT_DELAY_MS,
                        },
                    ]
                }
                BatchPhase::Error => {
                    state.finish_polling(PollPhase::Failed);
                    vec![Effect::StopPolling]
                }
                _ => Vec::new(),
            }
        }
        Msg::StatusFetchFailed(reason) => {
            if state.poll_phase() != PollPhase::Polling {
                return (state, Vec::new());
            }
            // The timer stays armed; the next tick retries.
            let seq = state.push_alert(
                AlertKind::Error,
                format!("Could not reach the analysis server: {reason}"),
            );
            vec![Effect::ScheduleAlertDismiss {
                seq,
                delay_ms: ALERT_DISMISS_MS,
            }]
        }
        Msg::DetailToggled { item_id } => {
            state.toggle_detail(&item_id);
            Vec::new()
        }
        Msg::ClearConfirmed => {
            state.begin_clearing();
            Vec::new()
        }
        Msg::ClearDeclined => Vec::new(),
        Msg::DownloadClicked { target } => {
            let label = download_format_label(&target);
            let seq = state.push_alert(AlertKind::Info, format!("Preparing {label} download..."));
            vec![Effect::ScheduleAlertDismiss {
                seq,
                delay_ms: ALERT_DISMISS_MS,
            }]
        }
        Msg::CopyRequested { text } => {
            let trimmed = text.trim().to_string();
            let seq = state.push_alert(AlertKind::Success, "Copied to clipboard".to_string());
            vec![
                Effect::CopyToClipboard { text: trimmed },
                Effect::ScheduleAlertDismiss {
                    seq,
                    delay_ms: ALERT_DISMISS_MS,
                },
            ]
        }
        Msg::AlertTimedOut { seq } => {
            state.expire_alert(seq);
            Vec::new()
        }
        Msg::EscapePressed => {
            let cleared = state.clear_files();
            state.close_all_details();
            if cleared {
                vec![Effect::ResetFileInput]
            } else {
                Vec::new()
            }
        }
        Msg::CsvShortcutPressed => vec![Effect::TriggerCsvDownload],
        Msg::ReloadShortcutPressed => {
            if state.page() == PageKind::Progress {
                vec![Effect::ReloadPage]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn download_format_label(target: &str) -> &'static str {
    let lower = target.to_ascii_lowercase();
    if lower.contains("csv") {
        "CSV"
    } else if lower.contains("json") {
        "JSON"
    } else if lower.contains("zip") {
        "ZIP"
    } else {
        "file"
    }
}
