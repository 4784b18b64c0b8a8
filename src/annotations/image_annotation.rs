use crate::annotations::coordinates::Coordinates;
use serde::{Deserialize, Serialize};

/// A single labelled box on an image.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BoxAnnotation {
    pub label: String,
    pub coordinates: Coordinates,
}

impl BoxAnnotation {
    pub fn new(label: impl Into<String>, coordinates: Coordinates) -> Self {
        BoxAnnotation { label: label.into(), coordinates }
    }
}

/// All of the box annotations made on one image.
///
/// `image_name` is the path of the annotated image. When it is relative it is
/// resolved against the directory holding the annotation file.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImageAnnotation {
    pub image_name: String,
    pub annotations: Vec<BoxAnnotation>,
}

impl ImageAnnotation {
    pub fn new(image_name: impl Into<String>, annotations: Vec<BoxAnnotation>) -> Self {
        ImageAnnotation { image_name: image_name.into(), annotations }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
