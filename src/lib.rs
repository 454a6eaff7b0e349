#![cfg(target_arch = "wasm32")]
use crate::constants::{AVATAR_CANVAS_ID, BG_CANVAS_ID};
use crate::core::page::hero_parallax;
use crate::core::{PageState, UnmatchedPolicy, SECTIONS};
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod speech;

/// A mounted page: its state, frame loop and listeners.
struct PageHandle {
    state: Rc<RefCell<PageState>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<dom::Listener>,
    speech: Rc<speech::Speech>,
}

impl PageHandle {
    fn unmount(self) {
        self.frame_loop.stop();
        drop(self.listeners);
        self.state.borrow_mut().teardown();
        self.speech.cancel();
        log::info!("page unmounted");
    }
}

thread_local! {
    static PAGE: RefCell<Option<PageHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shcc-site starting");
    mount()
}

/// Mounts the page runtime. Calling it while mounted does nothing.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    if PAGE.with(|p| p.borrow().is_some()) {
        return Ok(());
    }
    match init() {
        Ok(handle) => {
            PAGE.with(|p| *p.borrow_mut() = Some(handle));
            Ok(())
        }
        Err(e) => {
            log::error!("init error: {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

/// Stops the frame loop, unregisters listeners and freezes page state.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(handle) = PAGE.with(|p| p.borrow_mut().take()) {
        handle.unmount();
    }
}

fn init() -> anyhow::Result<PageHandle> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let background: web::HtmlCanvasElement = document
        .get_element_by_id(BG_CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", BG_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let viewport = input::viewport_size(&window);
    dom::size_canvas(&background, viewport);
    let scroll = input::scroll_y(&window);

    let mut rng = StdRng::from_entropy();
    let mut page = PageState::new(
        SECTIONS,
        viewport,
        scroll,
        UnmatchedPolicy::default(),
        &mut rng,
    )?;
    let dust = dom::canvas_by_id(&document, AVATAR_CANVAS_ID);
    if let Some(c) = &dust {
        page = page.with_dust(dom::sync_canvas_backing_size(c), &mut rng);
    }
    log::info!(
        "[page] viewport={}x{} scroll={} section={}",
        viewport.x,
        viewport.y,
        scroll,
        page.guide().content().section
    );

    let state = Rc::new(RefCell::new(page));
    let speech = Rc::new(speech::Speech::new(&window));

    {
        let s = state.borrow();
        overlay::render_guide(&document, s.guide());
        overlay::render_avatar_toggles(&document, s.narrator().is_enabled(), s.avatar().is_expanded());
        overlay::apply_hero_parallax(&document, hero_parallax(scroll));
    }

    let wiring = events::PageWiring {
        window: window.clone(),
        document: document.clone(),
        state: state.clone(),
        background: background.clone(),
        dust: dust.clone(),
        speech: speech.clone(),
    };
    let mut listeners = events::wire_window(&wiring);
    listeners.extend(events::wire_buttons(&wiring));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        document,
        background: render::Surface::new(background),
        dust: dust.map(render::Surface::new),
        speech: speech.clone(),
        last_instant: Instant::now(),
        avatar_key: None,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(PageHandle {
        state,
        frame_loop,
        listeners,
        speech,
    })
}
