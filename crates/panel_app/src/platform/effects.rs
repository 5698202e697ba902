//! Effect runner: executes the side effects requested by the reducer.

use panel_client::{BatchStatus, HttpStatusClient, StatusClient};
use panel_core::{BatchPhase, Effect, Msg, ProgressSnapshot, Theme};
use ui_logging::{ui_debug, ui_warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlElement, HtmlTextAreaElement};

use super::app::{dispatch, Shared};
use super::dom;

/// How long the fade-out class is given before the banner is dropped.
const ALERT_FADE_MS: i32 = 300;

/// Holds the poll timer and the status client between dispatches.
pub struct EffectRunner {
    client: Option<HttpStatusClient>,
    poll_handle: Option<i32>,
    // Kept alive for as long as the interval is armed.
    poll_closure: Option<Closure<dyn FnMut()>>,
}

impl EffectRunner {
    pub fn new() -> Self {
        let client = dom::window()
            .and_then(|window| window.location().origin().ok())
            .and_then(|origin| match HttpStatusClient::new(&origin) {
                Ok(client) => Some(client),
                Err(err) => {
                    ui_warn!("status client unavailable: {err}");
                    None
                }
            });
        Self {
            client,
            poll_handle: None,
            poll_closure: None,
        }
    }
}

impl Default for EffectRunner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(shared: &Shared, effects: Vec<Effect>) {
    for effect in effects {
        run_one(shared, effect);
    }
}

fn run_one(shared: &Shared, effect: Effect) {
    ui_debug!("effect: {effect:?}");
    match effect {
        Effect::PersistTheme(theme) => persist_theme(theme),
        Effect::PersistUploadTime => persist_upload_time(),
        Effect::FetchStatus => fetch_status(shared),
        Effect::StartPolling { period_ms } => start_polling(shared, period_ms),
        Effect::StopPolling => stop_polling(shared),
        Effect::NavigateToResults { delay_ms } => navigate_after(delay_ms, "/results"),
        Effect::ReloadPage => {
            if let Some(window) = dom::window() {
                let _ = window.location().reload();
            }
        }
        Effect::ResetFileInput => {
            if let Some(input) = dom::input_by_id(dom::FILE_INPUT) {
                input.set_value("");
            }
        }
        Effect::CopyToClipboard { text } => copy_to_clipboard(&text),
        Effect::TriggerCsvDownload => {
            if let Some(link) = dom::query(dom::CSV_LINK_SELECTOR) {
                if let Ok(element) = link.dyn_into::<HtmlElement>() {
                    element.click();
                }
            }
        }
        Effect::ScheduleAlertDismiss { seq, delay_ms } => {
            schedule_alert_dismiss(shared, seq, delay_ms)
        }
    }
}

fn persist_theme(theme: Theme) {
    // Storage being unavailable is non-fatal; the preference just resets
    // on the next load.
    if let Some(storage) = dom::storage() {
        let _ = storage.set_item(dom::THEME_STORAGE_KEY, theme.as_str());
    }
}

fn persist_upload_time() {
    if let Some(storage) = dom::storage() {
        let stamp = chrono::Utc::now().to_rfc3339();
        let _ = storage.set_item(dom::UPLOAD_TIME_STORAGE_KEY, &stamp);
    }
}

fn fetch_status(shared: &Shared) {
    let client = shared.borrow().runner.client.clone();
    let Some(client) = client else {
        dispatch(
            shared,
            Msg::StatusFetchFailed("status endpoint unavailable".to_string()),
        );
        return;
    };
    let shared = shared.clone();
    spawn_local(async move {
        match client.fetch_status().await {
            Ok(status) => dispatch(&shared, Msg::StatusReceived(map_status(status))),
            Err(err) => {
                ui_warn!("status fetch failed: {err}");
                dispatch(&shared, Msg::StatusFetchFailed(err.to_string()));
            }
        }
    });
}

fn map_status(status: BatchStatus) -> ProgressSnapshot {
    ProgressSnapshot {
        status: BatchPhase::from_label(&status.status),
        progress: status.progress,
        current_file: status.current_file,
        total_files: status.total_files,
        current_filename: status.current_filename,
        completed_files: status.completed_files,
        errors: status.errors,
    }
}

fn start_polling(shared: &Shared, period_ms: u32) {
    stop_polling(shared);
    let Some(window) = dom::window() else {
        return;
    };
    let tick_target = shared.clone();
    let closure = Closure::wrap(Box::new(move || {
        dispatch(&tick_target, Msg::PollTick);
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms as i32,
    ) {
        Ok(handle) => {
            let mut app = shared.borrow_mut();
            app.runner.poll_handle = Some(handle);
            app.runner.poll_closure = Some(closure);
        }
        Err(err) => ui_warn!("failed to arm poll timer: {err:?}"),
    }
}

fn stop_polling(shared: &Shared) {
    let mut app = shared.borrow_mut();
    if let Some(handle) = app.runner.poll_handle.take() {
        if let Some(window) = dom::window() {
            window.clear_interval_with_handle(handle);
        }
    }
    app.runner.poll_closure = None;
}

fn navigate_after(delay_ms: u32, target: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    let target = target.to_string();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = dom::window() {
            let _ = window.location().set_href(&target);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    );
    // One-shot; leak the closure to keep it alive until it fires.
    closure.forget();
}

/// Fades the banner at its deadline, then tells the reducer it is gone.
/// The reducer ignores the message if a newer alert replaced this one.
fn schedule_alert_dismiss(shared: &Shared, seq: u64, delay_ms: u32) {
    let Some(window) = dom::window() else {
        return;
    };
    let dismiss_target = shared.clone();
    let fade = Closure::wrap(Box::new(move || {
        if let Some(banner) = dom::query(dom::ALERT_SELECTOR) {
            let _ = banner.class_list().add_1("fade-out");
        }
        let inner_target = dismiss_target.clone();
        let drop_alert = Closure::wrap(Box::new(move || {
            dispatch(&inner_target, Msg::AlertTimedOut { seq });
        }) as Box<dyn FnMut()>);
        if let Some(window) = dom::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                drop_alert.as_ref().unchecked_ref(),
                ALERT_FADE_MS,
            );
        }
        drop_alert.forget();
    }) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fade.as_ref().unchecked_ref(),
        delay_ms as i32,
    );
    fade.forget();
}

fn copy_to_clipboard(text: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    let clipboard_value: &JsValue = clipboard.as_ref();
    if !clipboard_value.is_undefined() {
        let promise = clipboard.write_text(text);
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                ui_warn!("clipboard write rejected");
            }
        });
    } else {
        legacy_copy(text);
    }
}

/// Selection-based fallback for contexts without the async clipboard API.
fn legacy_copy(text: &str) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(element) = document.create_element("textarea") else {
        return;
    };
    let Ok(textarea) = element.dyn_into::<HtmlTextAreaElement>() else {
        return;
    };
    textarea.set_value(text);
    let Some(body) = document.body() else {
        return;
    };
    if body.append_child(&textarea).is_err() {
        return;
    }
    textarea.select();
    if let Err(err) = document.exec_command("copy") {
        ui_warn!("execCommand copy failed: {err:?}");
    }
    textarea.remove();
}
