//! Page state, view models and rendering

pub mod content;
pub mod render;
pub mod state;
pub mod view;

pub use render::Renderer;
pub use state::{ClassifierPage, ModelState};
pub use view::{ClassifierScreen, HomeView};
