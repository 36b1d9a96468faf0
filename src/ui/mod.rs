mod app;
pub mod components;
pub mod state;
pub mod toast;

pub use app::ChatApp;
