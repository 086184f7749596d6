//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation; every widget is restyled
//! from the shared theme flag on each draw.

pub mod card;
pub mod home;
pub mod theme;

pub use theme::{Palette, ThemeFlag};
