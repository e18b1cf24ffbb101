use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::session::Ticker;

/// `setInterval` wrapper. Holds at most one live interval; re-arming clears
/// the old one first, and dropping the timer clears it too.
pub struct IntervalTimer {
    window: Window,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl IntervalTimer {
    pub fn new(window: Window, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
            handle: None,
        }
    }
}

impl Ticker for IntervalTimer {
    fn arm(&mut self, interval_ms: u32) {
        self.cancel();
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => error!("setInterval failed: {err:?}"),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
