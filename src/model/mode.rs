//! Interaction mode flag: edit mode vs. pass-through.

/// Process-wide interaction mode. Starts in pass-through (click-through
/// enabled, handles hidden); `toggle` flips to edit mode and back.
///
/// Click-through is always the opposite of edit mode: handles visible means
/// the window must receive pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeToggle {
    edit_active: bool,
}

impl ModeToggle {
    /// Flip the mode, returning the new edit-active state.
    pub fn toggle(&mut self) -> bool {
        self.edit_active = !self.edit_active;
        self.edit_active
    }

    /// True while the resize handles are shown and the window is
    /// interactive.
    pub fn edit_active(&self) -> bool {
        self.edit_active
    }

    /// Desired click-through state for the native window style.
    pub fn click_through(&self) -> bool {
        !self.edit_active
    }
}
