//! Windows runtime state management.
//!
//! Contains the application state struct and thread-local storage.

use std::cell::RefCell;

use windows::Win32::Foundation::COLORREF;

use crate::model::constants::*;
use crate::model::{Bounds, ModeToggle, ResizeController};
use crate::storage::config::Config;

/// Build a GDI `COLORREF` (0x00BBGGRR) from byte components.
pub fn colorref(r: u8, g: u8, b: u8) -> COLORREF {
    COLORREF((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
}

/// Windows-specific runtime state.
///
/// `bounds` tracks the live window geometry (updated from WM_MOVE/WM_SIZE)
/// and is the single source the painter and handle placement read from.
/// Appearance fields are resolved once from the config at startup.
pub struct RuntimeState {
    pub bounds: Bounds,
    pub mode: ModeToggle,
    pub resize: ResizeController,

    // Resolved appearance (from config.json)
    pub border_width: i32,
    pub border_color: COLORREF,
    pub alpha: u8,
}

impl Default for RuntimeState {
    fn default() -> Self {
        let (r, g, b) = (0xFF, 0x00, 0x00);
        Self {
            bounds: Bounds::default(),
            mode: ModeToggle::default(),
            resize: ResizeController::default(),
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: colorref(r, g, b),
            alpha: alpha_byte(DEFAULT_ALPHA_PCT),
        }
    }
}

impl RuntimeState {
    /// Resolve appearance settings from a validated config.
    pub fn apply_config(&mut self, config: &Config) {
        let (r, g, b) = config.border_rgb();
        self.border_width = config.border_width;
        self.border_color = colorref(r, g, b);
        self.alpha = alpha_byte(config.overlay_alpha_pct);
    }
}

/// Convert an alpha percentage to the 0-255 byte expected by
/// `SetLayeredWindowAttributes`.
pub fn alpha_byte(pct: u8) -> u8 {
    ((pct.min(100) as u32 * 255) / 100) as u8
}

thread_local! {
    /// Global application state for the overlay. All access happens on the
    /// UI thread inside wndproc dispatch; borrows must be dropped before
    /// calls that can re-enter wndproc synchronously (SetWindowPos,
    /// SetWindowLongPtrW).
    pub static STATE: RefCell<RuntimeState> = RefCell::new(RuntimeState::default());
}
