//! Windows application state.

pub mod state;

pub use state::{RuntimeState, STATE};
