//! Platform-specific implementations.
//!
//! Only Windows is supported: the overlay depends on the Win32 extended
//! window style bits (layered, transparent-to-input, topmost).

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::*;
