//! Configuration constants and default values.

// === Geometry Defaults ===

/// Default window x position in screen coordinates.
pub const DEFAULT_X: i32 = 500;

/// Default window y position in screen coordinates.
pub const DEFAULT_Y: i32 = 300;

/// Default window width in pixels.
pub const DEFAULT_WIDTH: i32 = 400;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: i32 = 300;

/// Minimum window width reachable by a resize drag.
pub const MIN_WIDTH: i32 = 120;

/// Minimum window height reachable by a resize drag.
pub const MIN_HEIGHT: i32 = 80;

// === Visual Defaults ===

/// Default border stroke width in pixels.
pub const DEFAULT_BORDER_WIDTH: i32 = 2;

/// Default border color as a hex string.
pub const DEFAULT_BORDER_COLOR: &str = "#FF0000";

/// Default whole-window alpha percentage (100 = fully opaque).
pub const DEFAULT_ALPHA_PCT: u8 = 30;

/// Side length of a square resize handle in pixels.
pub const HANDLE_SIZE: i32 = 12;

/// Interior fill color keyed out of the layered window, as (r, g, b).
/// Anything painted in this color is fully transparent and click-through.
pub const KEY_COLOR_RGB: (u8, u8, u8) = (255, 0, 255);

// === Validation Limits ===

/// Minimum border stroke width in pixels.
pub const MIN_BORDER: i32 = 1;

/// Maximum border stroke width in pixels.
pub const MAX_BORDER: i32 = 20;

// === File Names ===

/// Per-user directory under %APPDATA% holding persisted state.
pub const APP_DIR: &str = "Framemark";

/// Saved window bounds record, one line of `x,y,width,height`.
pub const BOUNDS_FILE: &str = "window_bounds.txt";

/// Appearance settings, JSON.
pub const CONFIG_FILE: &str = "config.json";
