//! Renders a dirty view model back into the host DOM.
//!
//! Rendering is a full pass over the page's dynamic regions; the lists
//! involved are small enough that replacement beats diffing.

use panel_core::{
    AlertKind, BatchPhase, IntakeStatus, PageViewModel, ProgressView, Theme,
};
use web_sys::{Document, Element};

use super::dom;

const HIDDEN_CLASS: &str = "hidden";

pub fn render(view: &PageViewModel) {
    render_theme(view);
    render_summary(view);
    render_progress(view);
    render_details(view);
    render_alert(view);
    render_loading(view);
}

fn render_theme(view: &PageViewModel) {
    if let Some(document) = dom::document() {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute(dom::THEME_ATTR, view.theme.as_str());
        }
    }
    if let Some(toggle) = dom::by_id(dom::THEME_TOGGLE) {
        let label = match view.theme {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        };
        toggle.set_text_content(Some(label));
    }
}

fn render_summary(view: &PageViewModel) {
    if let Some(info) = dom::by_id(dom::FILE_INFO) {
        match &view.summary {
            None => {
                let _ = info.class_list().add_1(HIDDEN_CLASS);
                info.set_inner_html("");
            }
            Some(summary) => {
                let _ = info.class_list().remove_1(HIDDEN_CLASS);
                info.set_inner_html("");
                let Some(document) = dom::document() else {
                    return;
                };
                let headline_text = match summary.status {
                    IntakeStatus::Ready => format!(
                        "{} of {} files ready ({} total)",
                        summary.valid_count, summary.total_count, summary.total_size_label
                    ),
                    IntakeStatus::TooMany => format!(
                        "Too many files: {} selected, maximum is {}",
                        summary.valid_count, summary.max_files
                    ),
                    IntakeStatus::NoneValid => "No valid audio files selected".to_string(),
                };
                if let Ok(headline) = document.create_element("p") {
                    headline.set_class_name(summary_class(summary.status));
                    headline.set_text_content(Some(&headline_text));
                    let _ = info.append_child(&headline);
                }
                if let Ok(list) = document.create_element("ul") {
                    list.set_class_name("file-list");
                    for row in &summary.rows {
                        if let Ok(item) = document.create_element("li") {
                            item.set_class_name(if row.valid { "file-valid" } else { "file-invalid" });
                            let marker = if row.valid { "\u{2713}" } else { "\u{2717}" };
                            item.set_text_content(Some(&format!(
                                "{marker} {} ({})",
                                row.name, row.size_label
                            )));
                            let _ = list.append_child(&item);
                        }
                    }
                    let _ = info.append_child(&list);
                }
            }
        }
    }

    if let Some(button) = dom::by_id(dom::UPLOAD_BTN) {
        if view.upload_enabled {
            let _ = button.remove_attribute("disabled");
        } else {
            let _ = button.set_attribute("disabled", "disabled");
        }
    }
}

fn summary_class(status: IntakeStatus) -> &'static str {
    match status {
        IntakeStatus::Ready => "file-summary summary-ready",
        IntakeStatus::TooMany => "file-summary summary-too-many",
        IntakeStatus::NoneValid => "file-summary summary-none",
    }
}

fn render_progress(view: &PageViewModel) {
    let Some(progress) = &view.progress else {
        return;
    };
    if let Some(bar) = dom::html_by_id(dom::PROGRESS_BAR) {
        let _ = bar
            .style()
            .set_property("width", &format!("{}%", progress.percent));
    }
    if let Some(status) = dom::by_id(dom::STATUS_TEXT) {
        status.set_text_content(Some(phase_label(progress.phase)));
        status.set_class_name(&format!("status status-{}", phase_class(progress.phase)));
    }
    if let Some(counter) = dom::by_id(dom::PROGRESS_COUNTER) {
        counter.set_text_content(Some(&format!(
            "{} / {}",
            progress.current_file, progress.total_files
        )));
    }
    if let Some(current) = dom::by_id(dom::CURRENT_FILE) {
        current.set_text_content(Some(&progress.current_filename));
    }
    render_completed(progress);
    render_errors(progress);
}

fn render_completed(progress: &ProgressView) {
    if let Some(section) = dom::by_id(dom::COMPLETED_SECTION) {
        if progress.completed_files.is_empty() {
            let _ = section.class_list().add_1(HIDDEN_CLASS);
        } else {
            let _ = section.class_list().remove_1(HIDDEN_CLASS);
        }
    }
    let Some(list) = dom::by_id(dom::COMPLETED_LIST) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    // Full replacement each poll; each entry appears exactly once.
    list.set_inner_html("");
    for name in &progress.completed_files {
        if let Ok(item) = document.create_element("li") {
            item.set_text_content(Some(name));
            let _ = list.append_child(&item);
        }
    }
}

fn render_errors(progress: &ProgressView) {
    if progress.errors.is_empty() {
        return;
    }
    if dom::by_id(dom::ERROR_PANEL).is_none() {
        let Some(document) = dom::document() else {
            return;
        };
        create_error_panel(&document);
    }
    let Some(list) = dom::by_id(dom::ERROR_LIST) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    list.set_inner_html("");
    for error in &progress.errors {
        if let Ok(item) = document.create_element("li") {
            item.set_text_content(Some(error));
            let _ = list.append_child(&item);
        }
    }
}

/// Built once, on the first poll that reports errors.
fn create_error_panel(document: &Document) -> Option<Element> {
    let container = dom::query(dom::CONTAINER_SELECTOR).or_else(|| {
        document.body().map(Element::from)
    })?;
    let panel = document.create_element("div").ok()?;
    panel.set_id(dom::ERROR_PANEL);
    panel.set_class_name("error-panel");
    let heading = document.create_element("h3").ok()?;
    heading.set_text_content(Some("Processing errors"));
    panel.append_child(&heading).ok()?;
    let list = document.create_element("ul").ok()?;
    list.set_id(dom::ERROR_LIST);
    panel.append_child(&list).ok()?;
    container.append_child(&panel).ok()?;
    Some(panel)
}

fn render_details(view: &PageViewModel) {
    for panel in dom::query_all(dom::DETAILS_PANEL_SELECTOR) {
        let id = panel.id();
        let Some(item_id) = id.strip_prefix(dom::DETAILS_PREFIX) else {
            continue;
        };
        let open = view.open_details.iter().any(|open_id| open_id == item_id);
        if open {
            let _ = panel.class_list().add_1("open");
            let _ = panel.class_list().remove_1(HIDDEN_CLASS);
        } else {
            let _ = panel.class_list().remove_1("open");
            let _ = panel.class_list().add_1(HIDDEN_CLASS);
        }
    }
    for button in dom::query_all(dom::DETAIL_TOGGLE_SELECTOR) {
        let Some(item_id) = button.get_attribute("data-target") else {
            continue;
        };
        let open = view.open_details.contains(&item_id);
        button.set_text_content(Some(if open { "Hide details" } else { "Show details" }));
        if open {
            let _ = button.class_list().add_1("active");
        } else {
            let _ = button.class_list().remove_1("active");
        }
    }
}

fn render_alert(view: &PageViewModel) {
    let existing = dom::query(dom::ALERT_SELECTOR);
    let Some(alert) = &view.alert else {
        if let Some(banner) = existing {
            banner.remove();
        }
        return;
    };

    let seq_label = alert.seq.to_string();
    if let Some(banner) = &existing {
        if banner.get_attribute("data-seq").as_deref() == Some(seq_label.as_str()) {
            return;
        }
    }
    // Newest alert wins; the previous banner is removed outright.
    if let Some(banner) = existing {
        banner.remove();
    }

    let Some(document) = dom::document() else {
        return;
    };
    let Some(container) =
        dom::query(dom::CONTAINER_SELECTOR).or_else(|| document.body().map(Element::from))
    else {
        return;
    };
    let Ok(banner) = document.create_element("div") else {
        return;
    };
    banner.set_class_name(&format!("alert alert-{}", alert_class(alert.kind)));
    let _ = banner.set_attribute("data-seq", &seq_label);
    banner.set_text_content(Some(&alert.text));
    let _ = container.insert_before(&banner, container.first_child().as_ref());
}

fn render_loading(view: &PageViewModel) {
    let Some(loading) = dom::by_id(dom::LOADING) else {
        return;
    };
    if view.clearing {
        let _ = loading.class_list().remove_1(HIDDEN_CLASS);
    }
}

fn phase_label(phase: BatchPhase) -> &'static str {
    match phase {
        BatchPhase::Pending => "Waiting to start...",
        BatchPhase::Processing => "Processing...",
        BatchPhase::Completed => "Completed",
        BatchPhase::Error => "Failed",
        BatchPhase::Unknown => "Working...",
    }
}

fn phase_class(phase: BatchPhase) -> &'static str {
    match phase {
        BatchPhase::Pending => "pending",
        BatchPhase::Processing => "processing",
        BatchPhase::Completed => "completed",
        BatchPhase::Error => "error",
        BatchPhase::Unknown => "unknown",
    }
}

fn alert_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Info => "info",
        AlertKind::Success => "success",
        AlertKind::Warning => "warning",
        AlertKind::Error => "error",
    }
}
