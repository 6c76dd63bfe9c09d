//! Framework-free helpers shared by the navbar and the pages.

pub mod assets;
pub mod platform;
pub mod viewport;
