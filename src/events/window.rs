use super::PageWiring;
use crate::core::page::{hero_parallax, pointer_ndc, spotlight_center};
use crate::dom::{self, Listener};
use crate::input;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_window(w: &PageWiring) -> Vec<Listener> {
    [wire_scroll(w), wire_resize(w), wire_mousemove(w)]
        .into_iter()
        .flatten()
        .collect()
}

fn wire_scroll(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(&w.window, "scroll", move |_| {
        let y = input::scroll_y(&w2.window);
        let event = w2.state.borrow_mut().on_scroll(y);
        overlay::apply_hero_parallax(&w2.document, hero_parallax(y));
        if event.is_some() {
            overlay::render_guide(&w2.document, w2.state.borrow().guide());
        }
    })
}

fn wire_resize(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(&w.window, "resize", move |_| {
        let viewport = input::viewport_size(&w2.window);
        dom::size_canvas(&w2.background, viewport);
        let mut state = w2.state.borrow_mut();
        state.on_resize(viewport);
        if let Some(c) = &w2.dust {
            state.on_dust_resize(dom::sync_canvas_backing_size(c));
        }
    })
}

fn wire_mousemove(w: &PageWiring) -> Option<Listener> {
    let w2 = w.clone();
    Listener::new(&w.window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let ndc = pointer_ndc(input::client_pos(ev), input::viewport_size(&w2.window));
        w2.state.borrow_mut().on_pointer(ndc);
        overlay::apply_spotlight(&w2.document, spotlight_center(ndc));
    })
}
