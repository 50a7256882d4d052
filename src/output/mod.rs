// Output generation module

pub mod document;
pub mod manifest;
pub mod synthesizer;
pub mod templates;

pub use document::*;
pub use manifest::*;
pub use synthesizer::*;
pub use templates::*;
