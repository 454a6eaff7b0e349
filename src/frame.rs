use crate::core::constants::TESTIMONIAL_COUNT;
use crate::core::PageState;
use crate::overlay;
use crate::render::{self, Surface};
use crate::speech::Speech;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<PageState>>,
    pub document: web::Document,
    pub background: Surface,
    pub dust: Option<Surface>,
    pub speech: Rc<Speech>,
    pub last_instant: Instant,
    pub avatar_key: Option<String>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let update = self.state.borrow_mut().tick(dt_sec);
        let state = self.state.borrow();
        if !state.is_mounted() {
            return;
        }

        render::paint_field(&self.background, state.background());
        if let (Some(surface), Some(field)) = (&self.dust, state.dust()) {
            render::paint_field(surface, field);
        }

        if update.guide.is_some() {
            overlay::render_guide(&self.document, state.guide());
        }
        overlay::apply_avatar_pose(&self.document, state.avatar().pose());
        if let Some(key) = state.avatar().key() {
            if self.avatar_key.as_deref() != Some(key) {
                overlay::render_avatar_label(&self.document, key);
                self.avatar_key = Some(key.to_owned());
            }
        }
        if let Some(i) = update.testimonial {
            overlay::show_testimonial(&self.document, i, TESTIMONIAL_COUNT);
        }
        drop(state);

        if let Some(u) = update.speech {
            self.speech.speak(&u);
        }
    }
}

/// Handle on a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancels the pending frame and releases the callback.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let running_clone = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if !running_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    FrameLoop {
        raf_id,
        running,
        tick,
    }
}
