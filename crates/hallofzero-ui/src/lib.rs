//! Hall of Zero Limits UI Components
//!
//! Reusable Dioxus building blocks for the neon-on-black look of the hall:
//! buttons and the modal shell that routes overlay clicks by origin.

pub mod components;

pub use components::*;
