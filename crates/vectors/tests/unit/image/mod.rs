//! # Image Tests



/// Program construction and encoding.
pub mod program;
