pub mod app;
pub mod components;
pub mod events;
pub mod terminal_guard;

pub use app::App;
pub use events::Focus;
