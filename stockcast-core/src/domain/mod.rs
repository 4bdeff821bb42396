//! Value types for prediction-date resolution.

pub mod resolution;
pub mod window;

pub use resolution::{ResolutionRequest, ResolutionResult};
pub use window::{DataWindow, WindowError};
