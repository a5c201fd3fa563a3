//! Drag-to-resize state machine.
//!
//! Eight handles, one per compass direction, sit on the corners and edge
//! midpoints of the window. A press on a handle snapshots the pointer and
//! the window bounds; every pointer move resolves a fresh `Bounds` from the
//! snapshot, so intermediate updates never accumulate rounding or clamping
//! artifacts.

use super::bounds::Bounds;
use super::constants::{HANDLE_SIZE, MIN_HEIGHT, MIN_WIDTH};

/// Compass direction of a resize handle, naming which window edges the drag
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Sizing cursor family shown while hovering a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    SizeNorthSouth,
    SizeWestEast,
    SizeNwSe,
    SizeNeSw,
}

use ResizeMode::*;

impl ResizeMode {
    /// All eight handles in placement order: top row, middle row, bottom
    /// row. Hit-testing walks this order, so corners win over edges when
    /// a small window makes their regions overlap.
    pub const ALL: [ResizeMode; 8] = [
        NorthWest, North, NorthEast, West, East, SouthWest, South, SouthEast,
    ];

    pub fn affects_north(self) -> bool {
        matches!(self, North | NorthEast | NorthWest)
    }

    pub fn affects_south(self) -> bool {
        matches!(self, South | SouthEast | SouthWest)
    }

    pub fn affects_east(self) -> bool {
        matches!(self, East | NorthEast | SouthEast)
    }

    pub fn affects_west(self) -> bool {
        matches!(self, West | NorthWest | SouthWest)
    }

    pub fn cursor(self) -> CursorHint {
        match self {
            North | South => CursorHint::SizeNorthSouth,
            East | West => CursorHint::SizeWestEast,
            NorthWest | SouthEast => CursorHint::SizeNwSe,
            NorthEast | SouthWest => CursorHint::SizeNeSw,
        }
    }

    /// Handle center in client coordinates for a window of the given size:
    /// the four corners and the four edge midpoints.
    pub fn anchor(self, width: i32, height: i32) -> (i32, i32) {
        match self {
            NorthWest => (0, 0),
            North => (width / 2, 0),
            NorthEast => (width, 0),
            West => (0, height / 2),
            East => (width, height / 2),
            SouthWest => (0, height),
            South => (width / 2, height),
            SouthEast => (width, height),
        }
    }

    /// Visible handle square as `(left, top, right, bottom)`: the anchor
    /// offset by minus half the handle size in both axes.
    pub fn handle_rect(self, width: i32, height: i32) -> (i32, i32, i32, i32) {
        let (cx, cy) = self.anchor(width, height);
        let half = HANDLE_SIZE / 2;
        (cx - half, cy - half, cx - half + HANDLE_SIZE, cy - half + HANDLE_SIZE)
    }
}

/// Snapshot taken on handle press, the reference for all delta math during
/// one gesture.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pointer_x: i32,
    pointer_y: i32,
    start: Bounds,
    mode: ResizeMode,
}

impl DragSession {
    pub fn new(mode: ResizeMode, pointer_x: i32, pointer_y: i32, start: Bounds) -> Self {
        Self {
            pointer_x,
            pointer_y,
            start,
            mode,
        }
    }

    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    /// Resolve the window bounds for the current pointer position.
    ///
    /// Width and height are clamped to the minimums. For west/north drags
    /// the origin is derived from the clamped size, so the dragged edge
    /// stops exactly at the minimum and the far edge never drifts past its
    /// anchor.
    pub fn resolve(&self, pointer_x: i32, pointer_y: i32) -> Bounds {
        let dx = pointer_x - self.pointer_x;
        let dy = pointer_y - self.pointer_y;

        let mut b = self.start;
        if self.mode.affects_east() {
            b.width = self.start.width + dx;
        }
        if self.mode.affects_south() {
            b.height = self.start.height + dy;
        }
        if self.mode.affects_west() {
            b.width = self.start.width - dx;
        }
        if self.mode.affects_north() {
            b.height = self.start.height - dy;
        }

        b.width = b.width.max(MIN_WIDTH);
        b.height = b.height.max(MIN_HEIGHT);

        if self.mode.affects_west() {
            b.x = self.start.x + (self.start.width - b.width);
        }
        if self.mode.affects_north() {
            b.y = self.start.y + (self.start.height - b.height);
        }
        b
    }
}

/// Two-state drag machine: idle, or dragging with an active session.
/// Release ends the session explicitly; a new press always starts fresh.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<DragSession>,
}

impl ResizeController {
    /// Idle -> Dragging on a handle press.
    pub fn begin_drag(&mut self, mode: ResizeMode, pointer_x: i32, pointer_y: i32, start: Bounds) {
        self.session = Some(DragSession::new(mode, pointer_x, pointer_y, start));
    }

    /// Dragging -> Dragging on pointer move; returns the bounds to apply,
    /// or `None` when idle (stray move events are ignored).
    pub fn drag_to(&mut self, pointer_x: i32, pointer_y: i32) -> Option<Bounds> {
        self.session.as_ref().map(|s| s.resolve(pointer_x, pointer_y))
    }

    /// Dragging -> Idle on pointer release.
    pub fn end_drag(&mut self) {
        self.session = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Direction of the drag in progress, if any.
    pub fn active_mode(&self) -> Option<ResizeMode> {
        self.session.map(|s| s.mode())
    }

    /// Map a client-area point to the handle under it, if any.
    pub fn hit_test(width: i32, height: i32, x: i32, y: i32) -> Option<ResizeMode> {
        ResizeMode::ALL.into_iter().find(|mode| {
            let (l, t, r, b) = mode.handle_rect(width, height);
            x >= l && x < r && y >= t && y < b
        })
    }
}
