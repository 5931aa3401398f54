use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Vertical scroll offset of the page, whichever of body or root reports it.
#[must_use]
pub fn scroll_offset() -> f64 {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return 0.0;
    };
    let body = doc.body().map_or(0, |body| body.scroll_top());
    let root = doc.document_element().map_or(0, |root| root.scroll_top());
    f64::from(body.max(root))
}

/// Jump to the top of the page.
pub fn scroll_to_top() {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if let Some(body) = doc.body() {
        body.set_scroll_top(0);
    }
    if let Some(root) = doc.document_element() {
        root.set_scroll_top(0);
    }
}

/// Whether the browser exposes `IntersectionObserver`.
#[must_use]
pub fn supports_intersection_observer() -> bool {
    web_sys::window().is_some_and(|win| {
        js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// A `window` event listener removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    /// Subscribe `handler` to `event` on `window`.
    ///
    /// Returns `None` when there is no window or the browser refuses the
    /// listener.
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        web_sys::window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Page-relative top of the element with `id`.
#[must_use]
pub fn section_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + scroll_offset())
}

/// Animate the page scroll to `target` with cubic easing.
///
/// # Errors
/// Returns an error if a frame timer cannot be scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn smooth_scroll_to(target: f64, duration_ms: f64) -> Result<(), JsValue> {
    const FRAME_MS: i32 = 16;
    let start = scroll_offset();
    let began = js_sys::Date::now();
    loop {
        let elapsed = js_sys::Date::now() - began;
        let (position, done) =
            helpmap_core::smooth_scroll_position(start, target, elapsed, duration_ms);
        window().scroll_to_with_x_and_y(0.0, position);
        if done {
            return Ok(());
        }
        sleep_ms(FRAME_MS).await?;
    }
}
