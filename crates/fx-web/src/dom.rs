use anyhow::{anyhow, Result};
use fx_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

#[inline]
pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HTML element: {:?}", id, e))
}

/// Create a detached canvas styled to fill whatever it is appended to.
pub fn create_canvas(document: &web::Document) -> Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let style = canvas.style();
    style.set_property("display", "block").map_err(js_err)?;
    style.set_property("width", "100%").map_err(js_err)?;
    style.set_property("height", "100%").map_err(js_err)?;
    Ok(canvas)
}

/// Layout size of an element in CSS pixels.
#[inline]
pub fn element_css_size(element: &web::HtmlElement) -> Viewport {
    Viewport::new(element.offset_width() as f32, element.offset_height() as f32)
}

#[inline]
pub fn window_inner_size(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Match the canvas backing store to `css` size * devicePixelRatio.
/// Returns the new backing size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css: Viewport) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_px = ((css.width as f64 * dpr) as u32).max(1);
    let h_px = ((css.height as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Result<()> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .map_err(js_err)?;
    Ok(())
}

/// An event listener that stays registered for as long as this value lives.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    pub fn listen<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        Self::subscribe(target, event, None, handler)
    }

    /// Like [`listen`](Self::listen) but marks the listener passive so the
    /// browser never waits on it before scrolling.
    pub fn listen_passive<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<Self>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        Self::subscribe(target, event, Some(true), handler)
    }

    fn subscribe<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        passive: Option<bool>,
        mut handler: F,
    ) -> Result<Self>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(
            Box::new(move |ev: web::Event| handler(ev.unchecked_into::<E>()))
                as Box<dyn FnMut(web::Event)>,
        );
        let callback = closure.as_ref().unchecked_ref();
        match passive {
            Some(passive) => {
                let options = web::AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    event, callback, &options,
                )
            }
            None => target.add_event_listener_with_callback(event, callback),
        }
        .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
