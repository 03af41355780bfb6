use fx_core::Clock;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic clock for the effects, backed by `performance.now()`.
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

struct LoopState {
    tick: Option<Closure<dyn FnMut(f64)>>,
    request_id: Option<i32>,
}

/// Keeps a `requestAnimationFrame` loop alive. Dropping it cancels the
/// pending frame and frees the callback.
pub struct LoopHandle {
    state: Rc<RefCell<LoopState>>,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        if let (Some(id), Some(w)) = (state.request_id.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        state.tick.take();
    }
}

fn request_frame(state: &Rc<RefCell<LoopState>>) {
    let mut state = state.borrow_mut();
    let Some(w) = web::window() else {
        return;
    };
    let id = match state.tick.as_ref() {
        Some(tick) => w.request_animation_frame(tick.as_ref().unchecked_ref()).ok(),
        None => None,
    };
    state.request_id = id;
}

/// Call `frame` with the RAF timestamp on every animation frame until the
/// returned handle is dropped.
pub fn start_loop(mut frame: impl FnMut(f64) + 'static) -> LoopHandle {
    let state = Rc::new(RefCell::new(LoopState {
        tick: None,
        request_id: None,
    }));
    let weak: Weak<RefCell<LoopState>> = Rc::downgrade(&state);
    let tick = Closure::wrap(Box::new(move |timestamp: f64| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.borrow_mut().request_id = None;
        frame(timestamp);
        request_frame(&state);
    }) as Box<dyn FnMut(f64)>);
    state.borrow_mut().tick = Some(tick);
    request_frame(&state);
    LoopHandle { state }
}
