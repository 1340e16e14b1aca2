//! Small shared hooks and browser helpers

use dioxus::prelude::*;

/// Delay before the free-text query feeds the filter, bounding recomputation
/// while the user is typing.
pub const QUERY_DEBOUNCE_MS: u32 = 300;

/// Trailing-edge debounce of a text signal.
///
/// The returned signal follows `source` after `delay_ms` of inactivity.
/// Replacing the pending timeout handle drops the previous one, which
/// cancels it, so only the last keystroke fires.
pub fn use_debounced(source: Signal<String>, delay_ms: u32) -> Signal<String> {
    let mut debounced = use_signal(|| source.peek().clone());

    #[cfg(feature = "web")]
    {
        let mut pending = use_signal(|| None::<gloo_timers::callback::Timeout>);
        use_effect(move || {
            let value = source();
            pending.set(Some(gloo_timers::callback::Timeout::new(
                delay_ms,
                move || debounced.set(value),
            )));
        });
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = delay_ms;
        use_effect(move || debounced.set(source()));
    }

    debounced
}

/// Current browser path, recorded when sending a visitor to the login page
/// so they can be returned afterwards.
pub fn current_path() -> String {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                return path;
            }
        }
    }

    "/".to_string()
}
