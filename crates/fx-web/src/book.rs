use crate::constants::{BOOK_CONTAINER_ID, ORIENTATION_SETTLE_MS};
use crate::dom::{self, js_err, EventSubscription};
use crate::frame::{start_loop, InstantClock, LoopHandle};
use crate::input;
use crate::render::book::BookRenderer;
use crate::render::GpuContext;
use anyhow::Result;
use fx_core::{BookConfig, BookController, Clock};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct BookScene {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    controller: BookController,
    gpu: GpuContext,
    renderer: BookRenderer,
    clock: InstantClock,
}

impl BookScene {
    /// Re-read the container size and propagate it to the camera, scale and
    /// surface. A zero-sized container is retried on the next frame.
    fn measure(&mut self) {
        let css = dom::element_css_size(&self.container);
        if !self.controller.resize(css) {
            return;
        }
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas, css);
        self.gpu.resize(w, h);
        log::debug!(
            "[book] resized {}x{} scale={:.3}",
            css.width,
            css.height,
            self.controller.transform().scale
        );
    }

    fn frame(&mut self) {
        if self.controller.take_retry() {
            self.measure();
        }
        let transform = self.controller.tick(self.clock.now_secs());
        self.renderer
            .render(&self.gpu, self.controller.camera(), &transform);
    }
}

/// The rotating book mounted into `#book-section`.
pub struct BookEffect {
    _frame_loop: LoopHandle,
    _subscriptions: Vec<EventSubscription>,
}

impl BookEffect {
    /// Without WebGPU the effect disables itself and leaves no canvas behind.
    pub async fn mount(document: &web::Document) -> Result<Self> {
        let container = dom::element_by_id(document, BOOK_CONTAINER_ID)?;
        let canvas = dom::create_canvas(document)?;
        let mounted = Self::attach(container, &canvas).await;
        if mounted.is_err() {
            canvas.remove();
        }
        mounted
    }

    async fn attach(container: web::HtmlElement, canvas: &web::HtmlCanvasElement) -> Result<Self> {
        let window = dom::window()?;
        dom::sync_canvas_backing_size(canvas, dom::element_css_size(&container));

        let gpu = GpuContext::new(canvas).await?;
        container.append_child(canvas).map_err(js_err)?;
        let config = BookConfig::default();
        let renderer = BookRenderer::new(&gpu, config.size);
        let clock = InstantClock::new();
        let controller = BookController::new(config, clock.now_secs())?;

        let scene = Rc::new(RefCell::new(BookScene {
            container,
            canvas: canvas.clone(),
            controller,
            gpu,
            renderer,
            clock,
        }));
        scene.borrow_mut().measure();

        let mut subscriptions = Vec::new();
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                canvas,
                "pointermove",
                move |ev: web::PointerEvent| {
                    let mut scene = scene.borrow_mut();
                    if let Some(ndc) = input::mouse_ndc(&ev, &scene.container) {
                        scene.controller.pointer_move(ndc);
                    }
                },
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                canvas,
                "pointerleave",
                move |_: web::PointerEvent| scene.borrow_mut().controller.pointer_leave(),
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "resize",
                move |_: web::Event| scene.borrow_mut().measure(),
            )?);
        }
        {
            let weak: Weak<RefCell<BookScene>> = Rc::downgrade(&scene);
            let window_for_timeout = window.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "orientationchange",
                move |_: web::Event| {
                    let weak = weak.clone();
                    let scheduled =
                        dom::set_timeout(&window_for_timeout, ORIENTATION_SETTLE_MS, move || {
                            if let Some(scene) = weak.upgrade() {
                                scene.borrow_mut().measure();
                            }
                        });
                    if let Err(e) = scheduled {
                        log::warn!("[book] orientation re-measure not scheduled: {:#}", e);
                    }
                },
            )?);
        }

        let frame_loop = {
            let scene = scene.clone();
            start_loop(move |_| scene.borrow_mut().frame())
        };
        log::info!("[book] mounted");
        Ok(Self {
            _frame_loop: frame_loop,
            _subscriptions: subscriptions,
        })
    }
}
