use crate::constants::{CURSOR_ELEMENT_ID, HIDDEN_CLASS};
use crate::dom::{self, EventSubscription};
use crate::input;
use anyhow::Result;
use fx_core::CursorFollower;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct CursorState {
    element: web::HtmlElement,
    follower: CursorFollower,
}

impl CursorState {
    fn apply(&self) {
        let icon = self.follower.icon();
        let style = self.element.style();
        let _ = style.set_property("left", &input::px(icon.position.x));
        let _ = style.set_property("top", &input::px(icon.position.y));
        let classes = self.element.class_list();
        let _ = if icon.visible {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
    }

    fn update(&mut self, f: impl FnOnce(&mut CursorFollower) -> bool) {
        if f(&mut self.follower) {
            self.apply();
        }
    }
}

/// Replacement cursor icon `#custom-cursor` that tracks mouse and touch.
pub struct CursorEffect {
    _subscriptions: Vec<EventSubscription>,
}

impl CursorEffect {
    pub fn mount(document: &web::Document) -> Result<Self> {
        let element = dom::element_by_id(document, CURSOR_ELEMENT_ID)?;
        let state = Rc::new(RefCell::new(CursorState {
            element,
            follower: CursorFollower::new(),
        }));

        let mut subscriptions = Vec::new();
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "mousemove",
                move |ev: web::MouseEvent| {
                    let p = input::client_point(&ev);
                    state.borrow_mut().update(|c| c.on_mouse_move(p.x, p.y));
                },
            )?);
        }
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "mouseleave",
                move |_: web::MouseEvent| state.borrow_mut().update(|c| c.on_mouse_leave()),
            )?);
        }
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "mouseenter",
                move |_: web::MouseEvent| state.borrow_mut().update(|c| c.on_mouse_enter()),
            )?);
        }
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "touchstart",
                move |ev: web::TouchEvent| {
                    let touch = input::first_touch(&ev);
                    state.borrow_mut().update(|c| c.on_touch_start(touch));
                },
            )?);
        }
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "touchmove",
                move |ev: web::TouchEvent| {
                    let touch = input::first_touch(&ev);
                    state.borrow_mut().update(|c| c.on_touch_move(touch));
                },
            )?);
        }
        {
            let state = state.clone();
            subscriptions.push(EventSubscription::listen(
                document,
                "touchend",
                move |ev: web::TouchEvent| {
                    let remaining = input::active_touches(&ev);
                    state.borrow_mut().update(|c| c.on_touch_end(remaining));
                },
            )?);
        }

        log::info!("[cursor] mounted");
        Ok(Self {
            _subscriptions: subscriptions,
        })
    }
}
