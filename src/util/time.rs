//! Clock helpers for autosave timing and stroke timestamps.

/// Seconds on a clock that only matters relative to itself.
///
/// Natively this is wall time since the UNIX epoch; on the web it is
/// `performance.now()`, counted from page load.
pub fn current_time_secs() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map_or(0.0, |performance| performance.now() / 1000.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        unix_duration().as_secs_f64()
    }
}

/// Milliseconds used to stamp new strokes. Only compared between strokes,
/// never against a calendar.
pub fn timestamp_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (current_time_secs() * 1000.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        unix_duration().as_millis() as u64
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unix_duration() -> std::time::Duration {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
}
