//! Configuration module

mod options;

pub use options::EdgeLink;
pub use options::Options;
pub use options::{DEFAULT_DISTANCE, DEFAULT_ELLIPSIS, DEFAULT_NEXT, DEFAULT_PREVIOUS};
