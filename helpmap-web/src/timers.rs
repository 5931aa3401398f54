//! `setInterval`-backed [`Scheduler`].

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use helpmap_core::Scheduler;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Browser interval id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalHandle(i32);

/// Books browser intervals and routes each fire to `on_fire`.
///
/// Closures stay alive in `live` until their interval is cancelled or the
/// scheduler is dropped.
pub struct IntervalScheduler {
    on_fire: Rc<dyn Fn(IntervalHandle)>,
    live: HashMap<IntervalHandle, Closure<dyn FnMut()>>,
}

impl IntervalScheduler {
    pub fn new(on_fire: impl Fn(IntervalHandle) + 'static) -> Self {
        Self {
            on_fire: Rc::new(on_fire),
            live: HashMap::new(),
        }
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl std::fmt::Debug for IntervalScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalScheduler")
            .field("live", &self.live.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn start_interval(&mut self, period: Duration) -> Option<IntervalHandle> {
        let window = web_sys::window()?;
        let timeout = i32::try_from(period.as_millis()).ok()?;
        let assigned = Rc::new(Cell::new(None::<IntervalHandle>));
        let closure = {
            let assigned = Rc::clone(&assigned);
            let on_fire = Rc::clone(&self.on_fire);
            Closure::wrap(Box::new(move || {
                if let Some(handle) = assigned.get() {
                    on_fire(handle);
                }
            }) as Box<dyn FnMut()>)
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => {
                let handle = IntervalHandle(id);
                assigned.set(Some(handle));
                self.live.insert(handle, closure);
                Some(handle)
            }
            Err(err) => {
                log::error!(
                    "setInterval failed: {}",
                    crate::dom::js_error_message(&err)
                );
                None
            }
        }
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(handle.0);
        }
        self.live.remove(&handle);
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        let handles: Vec<IntervalHandle> = self.live.keys().copied().collect();
        for handle in handles {
            self.cancel(handle);
        }
    }
}
