pub mod bounding_box;
pub mod coordinates;
pub mod image_annotation;
pub mod normalized_box;
