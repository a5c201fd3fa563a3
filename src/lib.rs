//! Pure helpers used by the app. Keep this file free of Win32 FFI so tests
//! can run as normal integration tests.

pub mod logging;
pub mod model;
pub mod storage;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export model types for convenience
pub use model::{Bounds, DragSession, ModeToggle, ResizeController, ResizeMode};

/// Parse `#RRGGBB` into byte components.
pub fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let t = s.trim();
    let hex = t.strip_prefix('#').unwrap_or(t);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Format byte components as `#RRGGBB`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
