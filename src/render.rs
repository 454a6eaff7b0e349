use crate::core::constants::{LINK_MID_BOOST, TRAIL_RGB};
use crate::core::particles::{Link, NodeSprite};
use crate::core::ParticleField;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A canvas and its 2D context. Painting is a no-op without a context.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
}

impl Surface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            log::warn!("[render] no 2d context on #{}, drawing disabled", canvas.id());
        }
        Self { canvas, ctx }
    }
}

#[inline]
fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

pub fn paint_field(surface: &Surface, field: &ParticleField) {
    let Some(ctx) = &surface.ctx else {
        return;
    };
    let size = field.size();
    let (w, h) = (size.x as f64, size.y as f64);
    let params = field.params();

    // Partial fill leaves fading trails; an opaque trail just clears.
    if params.trail_alpha >= 1.0 {
        ctx.clear_rect(0.0, 0.0, w, h);
    } else {
        ctx.set_fill_style_str(&rgba(TRAIL_RGB, params.trail_alpha));
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    let edge = params.palette[0];
    for sprite in field.sprites() {
        paint_sprite(ctx, &sprite, edge);
    }
    ctx.set_line_width(1.0);
    for link in field.links() {
        paint_link(ctx, &link, &params.palette);
    }
}

fn paint_sprite(ctx: &web::CanvasRenderingContext2d, s: &NodeSprite, edge: [u8; 3]) {
    let (x, y) = (s.center.x as f64, s.center.y as f64);
    let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, s.glow_radius as f64) {
        Ok(g) => g,
        Err(_) => return,
    };
    _ = gradient.add_color_stop(0.0, &rgba(s.color, s.alpha));
    _ = gradient.add_color_stop(1.0, &rgba(edge, 0.0));
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    if ctx.arc(x, y, s.disc_radius as f64, 0.0, TAU).is_ok() {
        ctx.fill();
    }
}

fn paint_link(ctx: &web::CanvasRenderingContext2d, l: &Link, palette: &[[u8; 3]; 2]) {
    let (ax, ay, bx, by) = (l.a.x as f64, l.a.y as f64, l.b.x as f64, l.b.y as f64);
    let gradient = ctx.create_linear_gradient(ax, ay, bx, by);
    _ = gradient.add_color_stop(0.0, &rgba(palette[0], l.opacity));
    _ = gradient.add_color_stop(0.5, &rgba(palette[1], l.opacity * LINK_MID_BOOST));
    _ = gradient.add_color_stop(1.0, &rgba(palette[0], l.opacity));
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.move_to(ax, ay);
    ctx.line_to(bx, by);
    ctx.stroke();
}
