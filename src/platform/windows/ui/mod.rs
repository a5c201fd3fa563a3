//! Overlay UI: window style control and GDI painting.

pub mod painter;
pub mod style;
