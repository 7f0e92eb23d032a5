//! Data models

pub mod model_info;
pub mod prediction;
pub mod confidence;
pub mod form;

pub use model_info::*;
pub use prediction::*;
pub use confidence::*;
pub use form::*;
