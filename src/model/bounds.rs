//! Window bounds: position plus size, in integer screen coordinates.

use super::constants::*;

/// Window geometry, the single source of truth read by the border painter
/// and the resize-handle placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            y: DEFAULT_Y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parse the persisted record format: four comma-separated integers
    /// `x,y,width,height`. Returns `None` for anything malformed, including
    /// non-positive dimensions.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().split(',');
        let x = parts.next()?.trim().parse().ok()?;
        let y = parts.next()?.trim().parse().ok()?;
        let width: i32 = parts.next()?.trim().parse().ok()?;
        let height: i32 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() || width < 1 || height < 1 {
            return None;
        }
        Some(Self::new(x, y, width, height))
    }

    /// Serialize to the persisted record format.
    pub fn to_line(&self) -> String {
        format!("{},{},{},{}", self.x, self.y, self.width, self.height)
    }

    /// Outline rectangle inset by half the stroke width on all sides, as
    /// `(left, top, right, bottom)` in client coordinates. A stroke centered
    /// on this path stays fully inside the client area.
    pub fn border_rect(&self, border_width: i32) -> (i32, i32, i32, i32) {
        let inset = border_width / 2;
        (inset, inset, self.width - inset, self.height - inset)
    }
}
