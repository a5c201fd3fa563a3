//! Global hotkeys for the overlay.
//!
//! Three triggers, delivered as WM_HOTKEY to the overlay window:
//! toggle edit mode, save the current bounds, exit.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{RegisterHotKey, UnregisterHotKey, MOD_ALT};

// Hotkey IDs
pub const HOTKEY_TOGGLE_MODE: i32 = 1;
pub const HOTKEY_SAVE_BOUNDS: i32 = 2;
pub const HOTKEY_EXIT: i32 = 3;

/// Register the three global hotkeys on the overlay window. A failed
/// registration (key combination already taken) is logged and skipped; the
/// overlay still renders without it.
pub unsafe fn register_hotkeys(hwnd: HWND) {
    for (id, vk, name) in [
        (HOTKEY_TOGGLE_MODE, 0x4F, "Alt+O"), // toggle edit mode
        (HOTKEY_SAVE_BOUNDS, 0x4B, "Alt+K"), // save bounds
        (HOTKEY_EXIT, 0x4D, "Alt+M"),        // exit
    ] {
        if let Err(e) = RegisterHotKey(Some(hwnd), id, MOD_ALT, vk) {
            tracing::warn!(hotkey = name, error = %e, "failed to register hotkey");
        }
    }
}

/// Unregister all hotkeys; called after the message loop exits.
pub unsafe fn unregister_hotkeys(hwnd: HWND) {
    let _ = UnregisterHotKey(Some(hwnd), HOTKEY_TOGGLE_MODE);
    let _ = UnregisterHotKey(Some(hwnd), HOTKEY_SAVE_BOUNDS);
    let _ = UnregisterHotKey(Some(hwnd), HOTKEY_EXIT);
}
