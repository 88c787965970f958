//! Theme for the Hall of Zero Limits.

mod styles;

pub use styles::GLOBAL_STYLES;
