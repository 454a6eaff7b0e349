use crate::core::PageState;
use crate::speech::Speech;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod buttons;
mod window;

pub use buttons::wire_buttons;
pub use window::wire_window;

/// Everything the event handlers share with the frame loop.
#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub state: Rc<RefCell<PageState>>,
    pub background: web::HtmlCanvasElement,
    pub dust: Option<web::HtmlCanvasElement>,
    pub speech: Rc<Speech>,
}
