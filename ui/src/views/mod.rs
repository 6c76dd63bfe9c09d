//! Pages the platform routers mount below the navbar.

mod about;
mod design_library;
mod home;

pub use about::About;
pub use design_library::DesignLibrary;
pub use home::Home;
