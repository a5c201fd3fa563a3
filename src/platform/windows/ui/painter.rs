//! GDI painting for the overlay.
//!
//! One full repaint per WM_PAINT: fill the client area with the keyed-out
//! interior color (which also clears the previous border), stroke the
//! outline rectangle inset by half the border width, then draw the eight
//! handle squares when edit mode is active. Painting twice with unchanged
//! geometry produces identical pixels.

use windows::Win32::Foundation::{COLORREF, HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreatePen, CreateSolidBrush, DeleteObject, EndPaint, FillRect, GetStockObject,
    Rectangle, SelectObject, NULL_BRUSH, PAINTSTRUCT, PS_SOLID,
};

use crate::model::constants::KEY_COLOR_RGB;
use crate::model::ResizeMode;
use crate::platform::windows::app::state::{colorref, STATE};

/// Interior fill color, keyed out by SetLayeredWindowAttributes.
pub fn key_color() -> COLORREF {
    let (r, g, b) = KEY_COLOR_RGB;
    colorref(r, g, b)
}

/// Handle WM_PAINT for the overlay window.
pub unsafe fn paint(hwnd: HWND) {
    let (bounds, border_width, border_color, edit_active) = STATE.with(|s| {
        let state = s.borrow();
        (
            state.bounds,
            state.border_width,
            state.border_color,
            state.mode.edit_active(),
        )
    });
    let (width, height) = (bounds.width, bounds.height);

    let mut ps = PAINTSTRUCT::default();
    let hdc = BeginPaint(hwnd, &mut ps);
    if hdc.0.is_null() {
        return;
    }

    // Clear everything to the keyed-out interior color.
    let client = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };
    let background = CreateSolidBrush(key_color());
    let _ = FillRect(hdc, &client, background);
    let _ = DeleteObject(background.into());

    // Border outline, hollow fill so the interior stays keyed out.
    let pen = CreatePen(PS_SOLID, border_width, border_color);
    let old_pen = SelectObject(hdc, pen.into());
    let old_brush = SelectObject(hdc, GetStockObject(NULL_BRUSH));
    let (left, top, right, bottom) = bounds.border_rect(border_width);
    let _ = Rectangle(hdc, left, top, right, bottom);
    SelectObject(hdc, old_brush);
    SelectObject(hdc, old_pen);
    let _ = DeleteObject(pen.into());

    if edit_active {
        let handle_brush = CreateSolidBrush(COLORREF(0)); // black
        for mode in ResizeMode::ALL {
            let (l, t, r, b) = mode.handle_rect(width, height);
            let rect = RECT {
                left: l,
                top: t,
                right: r,
                bottom: b,
            };
            let _ = FillRect(hdc, &rect, handle_brush);
        }
        let _ = DeleteObject(handle_brush.into());
    }

    let _ = EndPaint(hwnd, &ps);
}
