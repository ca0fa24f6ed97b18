//! Reusable UI components

mod button;
pub mod slider;
pub mod spinner;

pub use button::{render_button, Button, ButtonKind, BUTTON_HEIGHT};
