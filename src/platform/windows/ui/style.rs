//! Extended window style control.
//!
//! The overlay relies on three GWL_EXSTYLE bits: WS_EX_LAYERED (alpha and
//! color-key compositing), WS_EX_TOPMOST (always on top) and
//! WS_EX_TRANSPARENT (pointer events pass through). The first two must
//! survive every toggle; only the transparent bit changes with the mode.

use windows::core::Result;
use windows::Win32::Foundation::{GetLastError, SetLastError, ERROR_SUCCESS, HWND, WIN32_ERROR};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongPtrW, SetWindowLongPtrW, GWL_EXSTYLE, WS_EX_LAYERED, WS_EX_TOPMOST,
    WS_EX_TRANSPARENT,
};

/// Set or clear click-through on the overlay window. Idempotent; always
/// re-asserts the layered and topmost bits.
///
/// The caller decides severity: the initial call at startup is fatal, later
/// toggles are logged and ignored.
pub unsafe fn set_click_through(hwnd: HWND, enabled: bool) -> Result<()> {
    let mut ex_style = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
    if enabled {
        ex_style |= WS_EX_TRANSPARENT.0 as isize;
    } else {
        ex_style &= !(WS_EX_TRANSPARENT.0 as isize);
    }
    ex_style |= (WS_EX_LAYERED.0 | WS_EX_TOPMOST.0) as isize;

    // SetWindowLongPtrW reports failure as 0, but 0 is also a valid
    // previous value; disambiguate through the thread error state.
    SetLastError(WIN32_ERROR(0));
    if SetWindowLongPtrW(hwnd, GWL_EXSTYLE, ex_style) == 0 && GetLastError() != ERROR_SUCCESS {
        return Err(windows::core::Error::from_win32());
    }
    Ok(())
}
