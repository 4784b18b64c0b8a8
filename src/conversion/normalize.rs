use crate::annotations::coordinates::Coordinates;
use crate::annotations::image_annotation::{BoxAnnotation, ImageAnnotation};
use crate::annotations::normalized_box::NormalizedBox;
use crate::error::{AnnotationError, Result};
use log::debug;

fn validate_image_dimensions(image_width: f64, image_height: f64) -> Result<()> {
    let valid = |d: f64| d.is_finite() && d > 0.0;
    if valid(image_width) && valid(image_height) {
        Ok(())
    } else {
        Err(AnnotationError::InvalidImageDimensions {
            width: image_width,
            height: image_height,
        })
    }
}

/// Scales every box of an image annotation into the unit range.
///
/// x coordinates are divided by the image width and y coordinates by the image
/// height. Size form boxes are read as corner form first. Nothing is clamped, so
/// boxes that reach outside the image produce values outside [0, 1].
pub fn normalize_bounding_boxes(
    image_annotation: &ImageAnnotation,
    image_width: f64,
    image_height: f64,
) -> Result<Vec<NormalizedBox>> {
    validate_image_dimensions(image_width, image_height)?;
    let normalized_boxes: Vec<NormalizedBox> = image_annotation
        .annotations
        .iter()
        .map(|annotation| {
            let coordinates = &annotation.coordinates;
            NormalizedBox {
                label: annotation.label.clone(),
                x_min: coordinates.x_min() / image_width,
                y_min: coordinates.y_min() / image_height,
                x_max: coordinates.x_max() / image_width,
                y_max: coordinates.y_max() / image_height,
            }
        })
        .collect();
    debug!(
        "Normalized {} boxes of {} against {}x{}.",
        normalized_boxes.len(),
        image_annotation.image_name,
        image_width,
        image_height
    );
    Ok(normalized_boxes)
}

/// Scales normalized boxes back into pixel coordinates, in corner form.
pub fn denormalize_bounding_boxes(
    normalized_boxes: &[NormalizedBox],
    image_width: f64,
    image_height: f64,
) -> Result<Vec<BoxAnnotation>> {
    validate_image_dimensions(image_width, image_height)?;
    Ok(normalized_boxes
        .iter()
        .map(|b| {
            BoxAnnotation::new(
                b.label.clone(),
                Coordinates::corner(
                    b.x_min * image_width,
                    b.y_min * image_height,
                    b.x_max * image_width,
                    b.y_max * image_height,
                ),
            )
        })
        .collect())
}
