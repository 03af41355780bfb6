use crate::constants::SPARKLES_CONTAINER_ID;
use crate::dom::{self, js_err, EventSubscription};
use crate::frame::{start_loop, InstantClock, LoopHandle};
use crate::input;
use crate::render::sparkles::SparkleRenderer;
use crate::render::GpuContext;
use anyhow::Result;
use fx_core::{EmitterConfig, ParticleEmitter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct SparkleScene {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    emitter: ParticleEmitter<InstantClock>,
    gpu: GpuContext,
    renderer: SparkleRenderer,
}

impl SparkleScene {
    fn resize(&mut self) {
        let css = dom::window_inner_size(&self.window);
        if css.is_degenerate() {
            return;
        }
        self.emitter.resize(css);
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas, css);
        self.gpu.resize(w, h);
    }

    fn frame(&mut self) {
        let now = self.emitter.on_animation_tick();
        if self.emitter.take_dirty() {
            self.renderer.upload(&self.gpu, self.emitter.ring().as_bytes());
        }
        self.renderer.render(&self.gpu, self.emitter.camera(), now);
    }
}

/// Full-window sparkle trail mounted into `#sparkles-overlay`.
pub struct SparkleEffect {
    _frame_loop: LoopHandle,
    _subscriptions: Vec<EventSubscription>,
}

impl SparkleEffect {
    /// Without WebGPU the effect disables itself and leaves no canvas behind.
    pub async fn mount(document: &web::Document) -> Result<Self> {
        let container = dom::element_by_id(document, SPARKLES_CONTAINER_ID)?;
        let canvas = dom::create_canvas(document)?;
        let mounted = Self::attach(document, &container, canvas.clone()).await;
        if mounted.is_err() {
            canvas.remove();
        }
        mounted
    }

    async fn attach(
        document: &web::Document,
        container: &web::HtmlElement,
        canvas: web::HtmlCanvasElement,
    ) -> Result<Self> {
        let window = dom::window()?;
        canvas
            .style()
            .set_property("pointer-events", "none")
            .map_err(js_err)?;
        let viewport = dom::window_inner_size(&window);
        dom::sync_canvas_backing_size(&canvas, viewport);

        let gpu = GpuContext::new(&canvas).await?;
        container.append_child(&canvas).map_err(js_err)?;
        let config = EmitterConfig::default();
        let renderer = SparkleRenderer::new(&gpu, config.capacity);
        let mut rng = StdRng::from_entropy();
        let emitter = ParticleEmitter::new(config, InstantClock::new(), viewport, &mut rng)?;

        let scene = Rc::new(RefCell::new(SparkleScene {
            window: window.clone(),
            canvas,
            emitter,
            gpu,
            renderer,
        }));

        let mut subscriptions = Vec::new();
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "mousemove",
                move |ev: web::MouseEvent| {
                    let p = input::client_point(&ev);
                    scene.borrow_mut().emitter.on_mouse_move(p.x, p.y);
                },
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "touchstart",
                move |ev: web::TouchEvent| {
                    if let Some(p) = input::first_touch(&ev) {
                        scene.borrow_mut().emitter.on_touch_start(p.x, p.y);
                    }
                },
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen_passive(
                &window,
                "touchmove",
                move |ev: web::TouchEvent| {
                    if let Some(p) = input::first_touch(&ev) {
                        scene.borrow_mut().emitter.on_touch_move(p.x, p.y);
                    }
                },
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "touchend",
                move |_: web::TouchEvent| scene.borrow_mut().emitter.on_touch_end(),
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "mouseleave",
                move |_: web::MouseEvent| scene.borrow_mut().emitter.on_window_leave(),
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "mouseenter",
                move |_: web::MouseEvent| scene.borrow_mut().emitter.on_window_enter(),
            )?);
        }
        {
            let scene = scene.clone();
            subscriptions.push(EventSubscription::listen(
                &window,
                "resize",
                move |_: web::Event| scene.borrow_mut().resize(),
            )?);
        }

        let frame_loop = {
            let scene = scene.clone();
            start_loop(move |_| scene.borrow_mut().frame())
        };
        log::info!("[sparkles] mounted");
        Ok(Self {
            _frame_loop: frame_loop,
            _subscriptions: subscriptions,
        })
    }
}
