//! Animated particle background on the header canvas.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::config::BackgroundConfig;
use folio_core::particles::{ParticleField, Surface};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::dom;
use crate::error::DomError;

/// [`Surface`] backed by a 2d canvas context.
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        let ctx = self.context;
        ctx.begin_path();
        // arc only throws for a negative radius
        let _ = ctx.arc(x, y, radius, 0.0, TAU);
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.close_path();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        let ctx = self.context;
        ctx.begin_path();
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(width);
        ctx.stroke();
        ctx.close_path();
    }
}

pub struct Background {
    canvas: HtmlCanvasElement,
    container: Element,
    context: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Background {
    pub fn mount(document: &Document, config: &BackgroundConfig) -> anyhow::Result<Rc<Self>> {
        let canvas: HtmlCanvasElement = dom::by_id(document, &config.canvas_id)?;
        let container: Element = dom::by_id(document, &config.container_id)?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| DomError::js("getContext('2d')", e))?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| DomError::NoContext(config.canvas_id.clone()))?;
        Ok(Rc::new(Self {
            canvas,
            container,
            context,
            field: RefCell::new(ParticleField::new(config.clone())),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Re-fit the canvas whenever the window resizes.
    pub fn install(self: &Rc<Self>) -> Result<(), DomError> {
        let window = dom::window()?;
        let this = Rc::downgrade(self);
        self.listeners
            .borrow_mut()
            .push(EventListener::new(&window, "resize", move |_| {
                if let Some(this) = this.upgrade() {
                    this.fit();
                }
            }));
        Ok(())
    }

    /// Size the canvas to its container and spawn a fresh batch of particles.
    pub fn fit(&self) {
        let width = self.container.client_width().max(0);
        let height = self.container.client_height().max(0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field
            .borrow_mut()
            .resize(f64::from(width), f64::from(height), &mut js_sys::Math::random);
    }

    /// Fit the canvas and run the animation for the rest of the page's life.
    pub fn start(self: &Rc<Self>) {
        self.fit();
        self.schedule();
        log::info!(
            "background: animating {} particles",
            self.field.borrow().particles().len()
        );
    }

    pub fn field(&self) -> std::cell::Ref<'_, ParticleField> {
        self.field.borrow()
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let handle = request_animation_frame(move |_timestamp| {
            let Some(this) = this.upgrade() else {
                return;
            };
            this.frame.borrow_mut().take();
            this.render_frame();
            this.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render_frame(&self) {
        let mut surface = CanvasSurface::new(&self.context);
        self.field.borrow_mut().frame(&mut surface);
    }
}
