//! Bounding box annotation conversion.
//!
//! Annotations are converted between corner form (x_min, y_min, x_max, y_max) and
//! size form (x_min, y_min, width, height), normalized to the image size, written to
//! CSV/JSON and drawn over their image for inspection.
pub mod annotation_io;
pub mod annotations;
pub mod batch;
pub mod conversion;
pub mod error;
pub mod image_utils;
pub mod visualization;
