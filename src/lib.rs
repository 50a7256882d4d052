//! Neurondoc - Generate MkDocs documentation for Cortex neurons
//!
//! Reads analyzer and responder descriptors, writes one Markdown page per
//! neuron with its images, and builds the `mkdocs.yml` navigation.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod neuron;
pub mod output;
pub mod pipeline;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use neuron::{Category, Descriptor};
pub use output::{Document, ManifestBuilder, Synthesizer};
pub use pipeline::{Pipeline, RunReport};
