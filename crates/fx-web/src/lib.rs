#![cfg(target_arch = "wasm32")]
//! Browser front-end: mounts the rotating book, the sparkle trail and the
//! cursor icon onto the page. Each effect is independent; one that fails to
//! mount is logged and left out.

mod book;
mod constants;
mod cursor;
mod dom;
mod frame;
mod input;
mod render;
mod sparkles;

use book::BookEffect;
use cursor::CursorEffect;
use sparkles::SparkleEffect;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Default)]
struct Effects {
    // Bumped by teardown so mounts still in flight are discarded.
    generation: u32,
    book: Option<BookEffect>,
    sparkles: Option<SparkleEffect>,
    cursor: Option<CursorEffect>,
}

thread_local! {
    static EFFECTS: RefCell<Effects> = RefCell::new(Effects::default());
}

fn current_generation() -> u32 {
    EFFECTS.with(|e| e.borrow().generation)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; effects disabled");
        return Ok(());
    };

    match CursorEffect::mount(&document) {
        Ok(cursor) => EFFECTS.with(|e| e.borrow_mut().cursor = Some(cursor)),
        Err(e) => log::warn!("[cursor] disabled: {:#}", e),
    }

    let generation = current_generation();
    {
        let document = document.clone();
        spawn_local(async move {
            match BookEffect::mount(&document).await {
                Ok(book) if current_generation() == generation => {
                    EFFECTS.with(|e| e.borrow_mut().book = Some(book))
                }
                Ok(_) => log::debug!("[book] mounted after teardown; dropping"),
                Err(e) => log::warn!("[book] disabled: {:#}", e),
            }
        });
    }
    spawn_local(async move {
        match SparkleEffect::mount(&document).await {
            Ok(sparkles) if current_generation() == generation => {
                EFFECTS.with(|e| e.borrow_mut().sparkles = Some(sparkles))
            }
            Ok(_) => log::debug!("[sparkles] mounted after teardown; dropping"),
            Err(e) => log::warn!("[sparkles] disabled: {:#}", e),
        }
    });
    Ok(())
}

/// Remove every listener and stop every animation loop.
#[wasm_bindgen]
pub fn teardown() {
    let dropped = EFFECTS.with(|e| {
        let mut effects = e.borrow_mut();
        effects.generation = effects.generation.wrapping_add(1);
        (
            effects.book.take(),
            effects.sparkles.take(),
            effects.cursor.take(),
        )
    });
    drop(dropped);
    log::info!("fx-web torn down");
}
