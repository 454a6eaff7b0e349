use super::PageWiring;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::overlay;

pub fn wire_buttons(w: &PageWiring) -> Vec<Listener> {
    [
        wire_dismiss(w),
        wire_reopen(w),
        wire_action(w),
        wire_speech_toggle(w),
        wire_expand_toggle(w),
        wire_narrate(w),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_dismiss(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, GUIDE_DISMISS_ID, move || {
        if w2.state.borrow_mut().dismiss_guide().is_some() {
            overlay::render_guide(&w2.document, w2.state.borrow().guide());
        }
    })
}

fn wire_reopen(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, GUIDE_REOPEN_ID, move || {
        if w2.state.borrow_mut().reopen_guide().is_some() {
            overlay::render_guide(&w2.document, w2.state.borrow().guide());
        }
    })
}

fn wire_action(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, GUIDE_ACTION_ID, move || {
        let action = w2.state.borrow().guide().action();
        if let Some(action) = action {
            log::info!("[guide] action {}", action.label);
            dom::perform_action(&w2.window, &w2.document, action.target);
        }
    })
}

fn wire_speech_toggle(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, AVATAR_SPEECH_ID, move || {
        let (on, expanded) = {
            let mut state = w2.state.borrow_mut();
            (state.toggle_narration(), state.avatar().is_expanded())
        };
        if !on {
            w2.speech.cancel();
        }
        overlay::render_avatar_toggles(&w2.document, on, expanded);
    })
}

fn wire_expand_toggle(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, AVATAR_EXPAND_ID, move || {
        let (on, expanded) = {
            let mut state = w2.state.borrow_mut();
            (state.narrator().is_enabled(), state.toggle_avatar_expanded())
        };
        overlay::render_avatar_toggles(&w2.document, on, expanded);
    })
}

fn wire_narrate(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, AVATAR_NARRATE_ID, move || {
        let utterance = w2.state.borrow().narrate_current();
        if let Some(u) = utterance {
            w2.speech.speak(&u);
        }
    })
}
