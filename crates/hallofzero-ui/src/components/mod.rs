//! Reusable UI components.

mod button;
mod modal;

pub use button::*;
pub use modal::*;
