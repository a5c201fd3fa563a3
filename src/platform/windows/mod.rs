//! Windows-specific implementation using Win32 and GDI.
//!
//! This module contains all Windows-specific code:
//! - Runtime state (thread-local, single UI thread)
//! - Input handling (global hotkeys)
//! - Window style control (click-through / layered / topmost bits)
//! - Overlay painting (border outline and resize handles)

pub mod app;
pub mod input;
pub mod ui;
