//! Input handling: global hotkeys.

pub mod hotkeys;

pub use hotkeys::{
    register_hotkeys, unregister_hotkeys, HOTKEY_EXIT, HOTKEY_SAVE_BOUNDS, HOTKEY_TOGGLE_MODE,
};
