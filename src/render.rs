//! Canvas presentation of the simulation snapshot
//!
//! Obstacle segments are drawn on the 2D canvas; the bird is a DOM element
//! positioned and rotated with CSS, matching the page's markup. The renderer
//! reads state after each tick completes and never writes it.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::consts::PIPE_WIDTH;
use crate::sim::GameState;

const PIPE_FILL: &str = "#3b9c4a";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    bird_el: HtmlElement,
}

impl CanvasRenderer {
    /// Bind to the page's canvas and bird elements
    pub fn new(document: &Document) -> Option<Self> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")?
            .dyn_into()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let bird_el: HtmlElement = document
            .get_element_by_id("bird-entity")?
            .dyn_into()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            bird_el,
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn set_bird_visible(&self, visible: bool) {
        let _ = self
            .bird_el
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }

    /// Draw one frame from the post-tick snapshot
    pub fn draw(&self, state: &GameState) {
        let w = state.viewport.width as f64;
        let h = state.viewport.height as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(PIPE_FILL);
        for pipe in state.pipes.iter() {
            self.ctx
                .fill_rect(pipe.x as f64, 0.0, PIPE_WIDTH as f64, pipe.top_height as f64);
            let bottom_y = (pipe.top_height + pipe.gap) as f64;
            self.ctx
                .fill_rect(pipe.x as f64, bottom_y, PIPE_WIDTH as f64, h - bottom_y);
        }

        let style = self.bird_el.style();
        let _ = style.set_property("left", &format!("{}px", state.bird.pos.x));
        let _ = style.set_property("top", &format!("{}px", state.bird.pos.y));
        let _ = style.set_property("transform", &format!("rotate({}rad)", state.bird.rotation));
    }
}
