//! State ownership and the dispatch loop.

use std::cell::RefCell;
use std::rc::Rc;

use panel_core::{update, AppState, Msg};
use ui_logging::ui_info;

use super::{dom, effects, events, media, render};

pub struct App {
    pub state: AppState,
    pub runner: effects::EffectRunner,
}

pub type Shared = Rc<RefCell<App>>;

pub fn bootstrap() {
    if dom::document().is_none() {
        return;
    }

    let shared: Shared = Rc::new(RefCell::new(App {
        state: AppState::new(),
        runner: effects::EffectRunner::new(),
    }));

    events::install(&shared);
    media::install();

    let page = dom::detect_page();
    ui_info!("panel boot: page={page:?}");

    dispatch(
        &shared,
        Msg::PageLoaded {
            page,
            stored_theme: dom::stored_theme(),
            max_files: dom::host_max_files(),
        },
    );
}

/// Runs one message through the reducer, renders if the state changed, and
/// executes the returned effects. Effects may dispatch again (fetch results,
/// timer ticks), so the state borrow is dropped before they run.
pub fn dispatch(shared: &Shared, msg: Msg) {
    let (view, effects_to_run) = {
        let mut app = shared.borrow_mut();
        let state = std::mem::take(&mut app.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        app.state = state;
        (was_dirty.then_some(view), effects)
    };

    if let Some(view) = view {
        render::render(&view);
    }
    effects::run(shared, effects_to_run);
}
