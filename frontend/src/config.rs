use log::Level;

/// Vertical offset, in CSS pixels, past which the navbar switches to its
/// scrolled style. The comparison is strict: exactly 20 still counts as top.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const ASSET_DIR: &str = "/assets";

pub fn asset(name: &str) -> String {
    format!("{}/{}", ASSET_DIR, name)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally through trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
