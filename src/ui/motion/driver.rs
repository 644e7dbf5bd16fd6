//! The single page-wide engine and the loop that feeds it.
//!
//! The engine is installed on first use: one `requestAnimationFrame` loop
//! advances timelines and one pair of window listeners re-measures scroll
//! triggers. Both live for the rest of the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::core::motion::{Engine, SharedEngine, dispatch_all};

/// Longest step fed to the engine in one frame. A tab coming back from the
/// background resumes its animations instead of jumping to the end.
const MAX_FRAME_SECONDS: f64 = 0.1;

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

thread_local! {
    static ENGINE: SharedEngine<HtmlElement> = Rc::new(RefCell::new(Engine::new()));
}

static DRIVER: Once = Once::new();

/// The page-wide engine, started on first call.
pub fn shared_engine() -> SharedEngine<HtmlElement> {
    let engine = ENGINE.with(Rc::clone);
    DRIVER.call_once(|| install(Rc::clone(&engine)));
    engine
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn measure(engine: &SharedEngine<HtmlElement>) {
    // Callbacks may touch signals, so they run after the borrow ends
    let updates = engine.borrow_mut().on_scroll(viewport_height());
    dispatch_all(updates);
}

fn install(engine: SharedEngine<HtmlElement>) {
    let Some(window) = web_sys::window() else {
        leptos::logging::warn!("Animation driver not started: no window");
        return;
    };

    measure(&engine);

    let on_scroll = {
        let engine = Rc::clone(&engine);
        Closure::wrap(Box::new(move |_: web_sys::Event| measure(&engine)) as Box<dyn FnMut(_)>)
    };
    let on_resize = {
        let engine = Rc::clone(&engine);
        Closure::wrap(Box::new(move |_: web_sys::Event| measure(&engine)) as Box<dyn FnMut(_)>)
    };

    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

    // Page-lifetime listeners
    on_scroll.forget();
    on_resize.forget();

    let frame: FrameLoop = Rc::new(RefCell::new(None));
    let next = Rc::clone(&frame);
    let last_timestamp = Cell::new(None::<f64>);

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let dt = last_timestamp
            .replace(Some(now))
            .map_or(0.0, |last| ((now - last) / 1000.0).clamp(0.0, MAX_FRAME_SECONDS));

        let updates = engine.borrow_mut().tick(dt);
        dispatch_all(updates);

        request_frame(&next);
    }));

    request_frame(&frame);
    leptos::logging::log!("Animation driver started");
}

fn request_frame(frame: &FrameLoop) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(closure) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
