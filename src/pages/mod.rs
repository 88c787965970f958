//! Scene pages for the Hall of Zero Limits.

mod gallery;
mod intro;

pub use gallery::Gallery;
pub use intro::Intro;
