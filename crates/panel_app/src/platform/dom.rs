//! Guarded lookups for the host page's DOM contract.
//!
//! Every lookup returns an `Option`; a missing element means the
//! corresponding feature stays inactive rather than crashing the page.

use panel_core::{PageKind, Theme};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Storage, Window};

pub const FILE_INPUT: &str = "file-input";
pub const FILE_INFO: &str = "file-info";
pub const UPLOAD_BTN: &str = "upload-btn";
pub const UPLOAD_AREA: &str = "upload-area";
pub const THEME_TOGGLE: &str = "theme-toggle";
pub const PROGRESS_BAR: &str = "progress-bar";
pub const STATUS_TEXT: &str = "status";
pub const PROGRESS_COUNTER: &str = "progress";
pub const CURRENT_FILE: &str = "current-file";
pub const COMPLETED_SECTION: &str = "completed-files";
pub const COMPLETED_LIST: &str = "completed-list";
pub const CLEAR_BTN: &str = "clear-btn";
pub const LOADING: &str = "loading";
pub const ERROR_PANEL: &str = "error-panel";
pub const ERROR_LIST: &str = "error-list";

/// Detail panels are multiplexed by item id: `details-{item_id}`.
pub const DETAILS_PREFIX: &str = "details-";
pub const DETAILS_PANEL_SELECTOR: &str = "[id^='details-']";

pub const FEATURE_VALUE_SELECTOR: &str = ".feature-value";
pub const DETAIL_TOGGLE_SELECTOR: &str = ".toggle-details";
pub const DOWNLOAD_SELECTOR: &str = "a[href*='/download/'], .download-btn";
pub const SPECTROGRAM_IMG_SELECTOR: &str = ".spectrogram-item img";
pub const LAZY_IMG_SELECTOR: &str = "img[data-src]";
pub const CSV_LINK_SELECTOR: &str = "a[href*='csv']";
pub const CONTAINER_SELECTOR: &str = ".container";
pub const ALERT_SELECTOR: &str = ".alert";

pub const MAX_FILES_ATTR: &str = "data-max-files";
pub const THEME_ATTR: &str = "data-theme";
pub const LAZY_SRC_ATTR: &str = "data-src";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const UPLOAD_TIME_STORAGE_KEY: &str = "last_upload_time";

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id)?.dyn_into().ok()
}

pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    by_id(id)?.dyn_into().ok()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                out.push(element);
            }
        }
    }
    out
}

pub fn storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn stored_theme() -> Option<Theme> {
    let label = storage()?.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::from_label(&label)
}

/// Max file count the host page advertises on `<body data-max-files>`.
pub fn host_max_files() -> Option<usize> {
    document()?.body()?.get_attribute(MAX_FILES_ATTR)?.parse().ok()
}

/// Classifies the current page from its landmark elements.
pub fn detect_page() -> PageKind {
    if by_id(PROGRESS_BAR).is_some() {
        PageKind::Progress
    } else if by_id(FILE_INPUT).is_some() {
        PageKind::Upload
    } else if query(FEATURE_VALUE_SELECTOR).is_some() {
        PageKind::Results
    } else {
        PageKind::Other
    }
}
