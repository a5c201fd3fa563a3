//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! window bounds, the resize state machine and the interaction-mode flag.
//!
//! Persistence lives in `crate::storage`, Win32 plumbing in
//! `crate::platform::windows`.

pub mod bounds;
pub mod constants;
pub mod mode;
pub mod resize;

pub use bounds::Bounds;
pub use constants::*;
pub use mode::ModeToggle;
pub use resize::{CursorHint, DragSession, ResizeController, ResizeMode};
