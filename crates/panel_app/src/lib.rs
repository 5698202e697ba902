//! Browser shell for the panel controller.
//!
//! Binds the pure `panel_core` state machine to the host page: DOM events are
//! translated into messages, dirty view models are rendered back as DOM
//! patches, and effects drive storage, timers, navigation, and the clipboard.
//! Only meaningful on wasm32; a native build exposes nothing.

#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    platform::logging::initialize();
    platform::app::bootstrap();
}
