use crate::annotations::image_annotation::{BoxAnnotation, ImageAnnotation};
use log::debug;

/// Converts every box of an image annotation to size form.
///
/// width = x_max - x_min and height = y_max - y_min. No validation is performed,
/// so a corner form box with min > max converts to a negative width or height.
/// Boxes already in size form are passed through unchanged.
pub fn convert_bounding_boxes(image_annotation: &ImageAnnotation) -> Vec<BoxAnnotation> {
    image_annotation
        .annotations
        .iter()
        .map(|annotation| BoxAnnotation {
            label: annotation.label.clone(),
            coordinates: annotation.coordinates.to_size_form(),
        })
        .collect()
}

/// Same as `convert_bounding_boxes`, keeping the image name alongside.
pub fn convert_image_annotation(image_annotation: &ImageAnnotation) -> ImageAnnotation {
    let converted = ImageAnnotation::new(
        image_annotation.image_name.clone(),
        convert_bounding_boxes(image_annotation),
    );
    debug!("Converted {} boxes of {} to size form.", converted.len(), converted.image_name);
    converted
}
