//! # Unit Components
//!
//! This module organizes the unit tests for each part of the generator:
//! errors, configuration, the ISA layer, images, and scenarios.




/// Program and memory image construction and the hex-word file format.
pub mod image;
