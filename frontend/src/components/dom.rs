use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

/// Smoothly scrolls the element matching `selector` into view.
/// Returns false if nothing on the page matches.
pub fn scroll_to_section(selector: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("no section matches {}", selector);
            false
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// A single pending `requestAnimationFrame` callback. Dropping it cancels
/// the frame if it hasn't run yet.
pub struct AnimationFrame {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AnimationFrame {
    pub fn request(callback: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::once(callback);
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window,
            id,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.id);
    }
}

/// An event listener on `window`, removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window,
            event,
            callback,
        })
    }

    /// Listens for `keydown` and hands the key name to `on_key`.
    pub fn keydown(mut on_key: impl FnMut(String) + 'static) -> Option<Self> {
        Self::new("keydown", move |event: web_sys::Event| {
            if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                on_key(event.key());
            }
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
