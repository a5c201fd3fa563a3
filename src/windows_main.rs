//! Windows entry point and message loop.
//!
//! Creates the borderless layered overlay window, registers the global
//! hotkeys and dispatches every state transition (mode toggle, drag update,
//! bounds save) from wndproc on the single UI thread.

use anyhow::Context;
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{InvalidateRect, ScreenToClient};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetCursorPos, GetMessageW, GetWindowRect,
    LoadCursorW, PostQuitMessage, RegisterClassW, ReleaseCapture, SetCapture, SetCursor,
    SetLayeredWindowAttributes, SetWindowPos, ShowWindow, TranslateMessage, CS_HREDRAW, CS_VREDRAW,
    IDC_ARROW, IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, LWA_ALPHA, LWA_COLORKEY, MSG,
    SWP_NOACTIVATE, SWP_NOZORDER, SW_SHOW, WM_DESTROY, WM_ERASEBKGND, WM_HOTKEY, WM_LBUTTONDOWN,
    WM_LBUTTONUP, WM_MOUSEMOVE, WM_MOVE, WM_PAINT, WM_SETCURSOR, WM_SIZE, WNDCLASSW,
    WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use framemark::model::{Bounds, CursorHint, ResizeController};
use framemark::platform::windows::app::STATE;
use framemark::platform::windows::input::{
    register_hotkeys, unregister_hotkeys, HOTKEY_EXIT, HOTKEY_SAVE_BOUNDS, HOTKEY_TOGGLE_MODE,
};
use framemark::platform::windows::ui::{painter, style};
use framemark::storage::{bounds_store, config};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        eprintln!("framemark error: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> anyhow::Result<()> {
    unsafe {
        let config = config::load();
        let bounds = bounds_store::load().unwrap_or_default();
        tracing::debug!(?bounds, "initial geometry");

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("FramemarkOverlay");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Borderless popup, starting in pass-through mode.
        let ex_style = WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_TOOLWINDOW;

        let hwnd = CreateWindowExW(
            ex_style,
            class_name,
            w!("Framemark"),
            WS_POPUP,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .context("create overlay window")?;

        STATE.with(|s| {
            let mut state = s.borrow_mut();
            state.bounds = bounds;
            state.apply_config(&config);
        });

        // Interior pixels use the key color and vanish entirely; everything
        // else is composited at the configured alpha.
        let alpha = STATE.with(|s| s.borrow().alpha);
        SetLayeredWindowAttributes(hwnd, painter::key_color(), alpha, LWA_ALPHA | LWA_COLORKEY)
            .context("set layered window attributes")?;

        // The overlay cannot function without the click-through style bits;
        // failure here is fatal.
        style::set_click_through(hwnd, true).context("set initial click-through style")?;

        register_hotkeys(hwnd);

        let _ = ShowWindow(hwnd, SW_SHOW);

        // Message loop
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        unregister_hotkeys(hwnd);

        Ok(())
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_ERASEBKGND => LRESULT(1),

            WM_PAINT => {
                painter::paint(hwnd);
                LRESULT(0)
            }

            WM_SIZE => {
                let width = (lparam.0 & 0xFFFF) as u16 as i32;
                let height = ((lparam.0 >> 16) & 0xFFFF) as u16 as i32;
                STATE.with(|s| {
                    let mut state = s.borrow_mut();
                    state.bounds.width = width;
                    state.bounds.height = height;
                });
                // Stale borders are visible; repaint on every size change.
                let _ = InvalidateRect(Some(hwnd), None, true);
                LRESULT(0)
            }

            WM_MOVE => {
                let x = loword_i16(lparam);
                let y = hiword_i16(lparam);
                STATE.with(|s| {
                    let mut state = s.borrow_mut();
                    state.bounds.x = x;
                    state.bounds.y = y;
                });
                LRESULT(0)
            }

            WM_LBUTTONDOWN => {
                let x = loword_i16(lparam);
                let y = hiword_i16(lparam);
                // Without a screen-space anchor the drag math has nothing to
                // resolve against; skip the gesture entirely.
                let mut pointer = POINT::default();
                if GetCursorPos(&mut pointer).is_err() {
                    return LRESULT(0);
                }
                let began = STATE.with(|s| {
                    let mut state = s.borrow_mut();
                    if !state.mode.edit_active() {
                        return false;
                    }
                    let bounds = state.bounds;
                    match ResizeController::hit_test(bounds.width, bounds.height, x, y) {
                        Some(mode) => {
                            state.resize.begin_drag(mode, pointer.x, pointer.y, bounds);
                            true
                        }
                        None => false,
                    }
                });
                if began {
                    let _ = SetCapture(hwnd);
                }
                LRESULT(0)
            }

            WM_MOUSEMOVE => {
                let next = STATE.with(|s| {
                    let mut state = s.borrow_mut();
                    if !state.resize.is_dragging() {
                        return None;
                    }
                    let mut pointer = POINT::default();
                    if GetCursorPos(&mut pointer).is_err() {
                        return None;
                    }
                    state.resize.drag_to(pointer.x, pointer.y)
                });
                // Borrow dropped: SetWindowPos re-enters wndproc with
                // WM_SIZE/WM_MOVE synchronously.
                if let Some(bounds) = next {
                    apply_bounds(hwnd, bounds);
                }
                LRESULT(0)
            }

            WM_LBUTTONUP => {
                STATE.with(|s| s.borrow_mut().resize.end_drag());
                let _ = ReleaseCapture();
                LRESULT(0)
            }

            WM_SETCURSOR => {
                let hint = STATE.with(|s| {
                    let state = s.borrow();
                    if !state.mode.edit_active() {
                        return None;
                    }
                    if let Some(mode) = state.resize.active_mode() {
                        return Some(mode.cursor());
                    }
                    let mut pt = POINT::default();
                    if GetCursorPos(&mut pt).is_err() || !ScreenToClient(hwnd, &mut pt).as_bool() {
                        return None;
                    }
                    ResizeController::hit_test(state.bounds.width, state.bounds.height, pt.x, pt.y)
                        .map(|mode| mode.cursor())
                });
                if let Some(hint) = hint {
                    if let Ok(cursor) = LoadCursorW(None, cursor_id(hint)) {
                        let _ = SetCursor(Some(cursor));
                        return LRESULT(1);
                    }
                }
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }

            WM_HOTKEY => {
                let hotkey_id = wparam.0 as i32;
                match hotkey_id {
                    HOTKEY_TOGGLE_MODE => toggle_edit_mode(hwnd),
                    HOTKEY_SAVE_BOUNDS => save_current_bounds(hwnd),
                    HOTKEY_EXIT => PostQuitMessage(0),
                    _ => {}
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}

/// Flip edit mode: show/hide the handles and invert click-through in one
/// hotkey dispatch.
unsafe fn toggle_edit_mode(hwnd: HWND) {
    let (edit_active, click_through) = STATE.with(|s| {
        let mut state = s.borrow_mut();
        let edit_active = state.mode.toggle();
        (edit_active, state.mode.click_through())
    });
    tracing::info!(edit_active, "mode toggled");

    // Runtime style failures only degrade interactivity; keep going.
    if let Err(e) = style::set_click_through(hwnd, click_through) {
        tracing::warn!(error = %e, "failed to toggle click-through");
    }
    let _ = InvalidateRect(Some(hwnd), None, true);
}

/// Persist the current window rectangle on the save hotkey.
unsafe fn save_current_bounds(hwnd: HWND) {
    let mut rect = RECT::default();
    if let Err(e) = GetWindowRect(hwnd, &mut rect) {
        tracing::warn!(error = %e, "failed to read window rect");
        return;
    }
    let bounds = Bounds::new(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
    );
    match bounds_store::save(&bounds) {
        Ok(()) => tracing::info!(record = %bounds.to_line(), "bounds saved"),
        Err(e) => tracing::warn!(error = %e, "failed to save bounds"),
    }
}

/// Apply drag-resolved geometry immediately; the resulting WM_SIZE/WM_MOVE
/// keep the tracked bounds and the border repaint in sync.
unsafe fn apply_bounds(hwnd: HWND, bounds: Bounds) {
    if let Err(e) = SetWindowPos(
        hwnd,
        None,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        SWP_NOZORDER | SWP_NOACTIVATE,
    ) {
        tracing::warn!(error = %e, "failed to apply window bounds");
    }
}

fn cursor_id(hint: CursorHint) -> windows::core::PCWSTR {
    match hint {
        CursorHint::SizeNorthSouth => IDC_SIZENS,
        CursorHint::SizeWestEast => IDC_SIZEWE,
        CursorHint::SizeNwSe => IDC_SIZENWSE,
        CursorHint::SizeNeSw => IDC_SIZENESW,
    }
}

fn loword_i16(lparam: LPARAM) -> i32 {
    (lparam.0 & 0xFFFF) as u16 as i16 as i32
}

fn hiword_i16(lparam: LPARAM) -> i32 {
    ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32
}
