//! DOM event listeners; each translates a browser event into a core message.

use panel_core::{FileMeta, Msg};
use ui_logging::ui_warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DomTokenList, DragEvent, Event, EventTarget, FileList, KeyboardEvent};

use super::app::{dispatch, Shared};
use super::dom;

const DRAG_ACTIVE_CLASS: &str = "drag-active";
const PULSE_CLASS: &str = "pulse";
const PULSE_MS: i32 = 2000;
const COPIED_CLASS: &str = "copied";
const COPIED_MS: i32 = 600;

pub fn install(shared: &Shared) {
    install_theme_toggle(shared);
    install_file_input(shared);
    install_drop_zone(shared);
    install_upload_form(shared);
    install_clear_confirm(shared);
    install_detail_toggles(shared);
    install_download_links(shared);
    install_copy_targets(shared);
    install_keyboard(shared);
}

/// Attaches a page-lifetime listener; the closure is intentionally leaked.
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .is_err()
    {
        ui_warn!("failed to attach {kind} listener");
    }
    closure.forget();
}

fn read_files(list: &FileList) -> Vec<FileMeta> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| FileMeta::new(file.name(), file.size() as u64))
        .collect()
}

fn install_theme_toggle(shared: &Shared) {
    let Some(toggle) = dom::by_id(dom::THEME_TOGGLE) else {
        return;
    };
    let target = shared.clone();
    listen(toggle.as_ref(), "click", move |_| {
        dispatch(&target, Msg::ThemeToggleClicked);
    });
}

fn install_file_input(shared: &Shared) {
    let Some(input) = dom::input_by_id(dom::FILE_INPUT) else {
        return;
    };
    let target = shared.clone();
    let source = input.clone();
    listen(input.as_ref(), "change", move |_| {
        let files = source.files().map(|list| read_files(&list)).unwrap_or_default();
        dispatch(&target, Msg::FilesChosen(files));
    });
}

fn install_drop_zone(shared: &Shared) {
    let Some(zone) = dom::by_id(dom::UPLOAD_AREA) else {
        return;
    };

    for kind in ["dragenter", "dragover"] {
        let classes = zone.class_list();
        listen(zone.as_ref(), kind, move |event| {
            event.prevent_default();
            event.stop_propagation();
            let _ = classes.add_1(DRAG_ACTIVE_CLASS);
        });
    }
    for kind in ["dragleave", "dragend"] {
        let classes = zone.class_list();
        listen(zone.as_ref(), kind, move |event| {
            event.prevent_default();
            event.stop_propagation();
            let _ = classes.remove_1(DRAG_ACTIVE_CLASS);
        });
    }

    let target = shared.clone();
    let classes = zone.class_list();
    listen(zone.as_ref(), "drop", move |event| {
        event.prevent_default();
        event.stop_propagation();
        let _ = classes.remove_1(DRAG_ACTIVE_CLASS);
        let Ok(drag) = event.dyn_into::<DragEvent>() else {
            return;
        };
        let Some(transfer) = drag.data_transfer() else {
            return;
        };
        let Some(files) = transfer.files() else {
            return;
        };
        // Same intake path as the picker: hand the list to the input, then
        // raise the shared selection message.
        if let Some(input) = dom::input_by_id(dom::FILE_INPUT) {
            input.set_files(Some(&files));
        }
        dispatch(&target, Msg::FilesChosen(read_files(&files)));
    });
}

fn install_upload_form(shared: &Shared) {
    let Some(input) = dom::by_id(dom::FILE_INPUT) else {
        return;
    };
    let Ok(Some(form)) = input.closest("form") else {
        return;
    };
    let target = shared.clone();
    listen(form.as_ref(), "submit", move |_| {
        // The form submits natively; this only records the timestamp.
        dispatch(&target, Msg::UploadSubmitted);
    });
}

fn install_clear_confirm(shared: &Shared) {
    let Some(button) = dom::by_id(dom::CLEAR_BTN) else {
        return;
    };
    let target = shared.clone();
    listen(button.as_ref(), "click", move |event| {
        let confirmed = dom::window()
            .and_then(|window| {
                window
                    .confirm_with_message("Clear all uploaded files and results?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            dispatch(&target, Msg::ClearConfirmed);
        } else {
            // Cancels the pending form submission.
            event.prevent_default();
            dispatch(&target, Msg::ClearDeclined);
        }
    });
}

fn install_detail_toggles(shared: &Shared) {
    for button in dom::query_all(dom::DETAIL_TOGGLE_SELECTOR) {
        let Some(item_id) = button.get_attribute("data-target") else {
            continue;
        };
        let target = shared.clone();
        listen(button.as_ref(), "click", move |_| {
            dispatch(
                &target,
                Msg::DetailToggled {
                    item_id: item_id.clone(),
                },
            );
        });
    }
}

fn install_download_links(shared: &Shared) {
    for link in dom::query_all(dom::DOWNLOAD_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let target = shared.clone();
        let classes = link.class_list();
        listen(link.as_ref(), "click", move |_| {
            flash_class(&classes, PULSE_CLASS, PULSE_MS);
            dispatch(
                &target,
                Msg::DownloadClicked {
                    target: href.clone(),
                },
            );
        });
    }
}

fn install_copy_targets(shared: &Shared) {
    for element in dom::query_all(dom::FEATURE_VALUE_SELECTOR) {
        let target = shared.clone();
        let classes = element.class_list();
        let source = element.clone();
        listen(element.as_ref(), "click", move |_| {
            let text = source.text_content().unwrap_or_default();
            flash_class(&classes, COPIED_CLASS, COPIED_MS);
            dispatch(&target, Msg::CopyRequested { text });
        });
    }
}

fn install_keyboard(shared: &Shared) {
    let Some(document) = dom::document() else {
        return;
    };
    let target = shared.clone();
    listen(document.as_ref(), "keydown", move |event| {
        let Ok(key_event) = event.dyn_into::<KeyboardEvent>() else {
            return;
        };
        let combo = key_event.ctrl_key() || key_event.meta_key();
        match key_event.key().as_str() {
            "Escape" => dispatch(&target, Msg::EscapePressed),
            "d" | "D" if combo => {
                key_event.prevent_default();
                dispatch(&target, Msg::CsvShortcutPressed);
            }
            // Only the progress view overrides the browser's own reload.
            "r" | "R" if combo => {
                if dom::by_id(dom::PROGRESS_BAR).is_some() {
                    key_event.prevent_default();
                    dispatch(&target, Msg::ReloadShortcutPressed);
                }
            }
            _ => {}
        }
    });
}

/// Adds a short-lived animation class and removes it after the given delay.
fn flash_class(classes: &DomTokenList, class: &'static str, duration_ms: i32) {
    let _ = classes.add_1(class);
    let classes = classes.clone();
    let closure = Closure::wrap(Box::new(move || {
        let _ = classes.remove_1(class);
    }) as Box<dyn FnMut()>);
    if let Some(window) = dom::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        );
    }
    closure.forget();
}
