//! Image affordances: load-error fallback and lazy loading.

use ui_logging::ui_warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom;
use super::events::listen;

/// Lazy images start loading this far outside the viewport.
const LAZY_ROOT_MARGIN: &str = "50px";
const LAZY_THRESHOLD: f64 = 0.01;

pub fn install() {
    install_image_fallbacks();
    install_lazy_loading();
}

fn install_image_fallbacks() {
    for element in dom::query_all(dom::SPECTROGRAM_IMG_SELECTOR) {
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let failed = image.clone();
        listen(image.as_ref(), "error", move |_| {
            handle_image_error(&failed);
        });
        let loaded = image.clone();
        listen(image.as_ref(), "load", move |_| {
            let _ = loaded.class_list().add_1("fade-in");
        });
    }
}

fn handle_image_error(image: &HtmlImageElement) {
    // The error message is appended at most once per image.
    if image.get_attribute("data-error-shown").is_some() {
        return;
    }
    let _ = image.set_attribute("data-error-shown", "true");
    let _ = image.style().set_property("display", "none");
    let Some(parent) = image.parent_element() else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    if let Ok(message) = document.create_element("p") {
        message.set_class_name("image-error");
        message.set_text_content(Some("Spectrogram unavailable"));
        let _ = parent.append_child(&message);
    }
}

fn install_lazy_loading() {
    let images = dom::query_all(dom::LAZY_IMG_SELECTOR);
    if images.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() else {
                    continue;
                };
                if let Some(src) = image.get_attribute(dom::LAZY_SRC_ATTR) {
                    image.set_src(&src);
                    let _ = image.remove_attribute(dom::LAZY_SRC_ATTR);
                }
                // One-shot per image.
                observer.unobserve(&image);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(LAZY_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(LAZY_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for image in images {
                observer.observe(&image);
            }
            callback.forget();
        }
        Err(err) => ui_warn!("lazy loading unavailable: {err:?}"),
    }
}
