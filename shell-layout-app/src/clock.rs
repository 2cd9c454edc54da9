#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::time;
#[cfg(target_arch = "wasm32")]
use web_sys::js_sys;

#[cfg(not(target_arch = "wasm32"))]
static START: Lazy<time::Instant> = Lazy::new(time::Instant::now);

/// Monotonic milliseconds for driving animations.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    START.elapsed().as_secs_f64() * 1_000.0
}

/// Monotonic milliseconds for driving animations, falling back to wall clock
/// time where the page exposes no `performance`.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_does_not_go_backwards() {
        let first = now_ms();
        let second = now_ms();
        assert!(second >= first);
    }
}
