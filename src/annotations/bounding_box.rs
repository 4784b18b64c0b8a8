use crate::annotations::image_annotation::BoxAnnotation;

/// A struct representing a bounding box as the renderer draws it.
///
/// A bounding box is a rectangle used to annotate objects in images. Unlike the
/// raw `Coordinates` read from an annotation file, a `BoundingBox` is always in
/// corner form with `left <= right` and `top <= bottom`. Boxes annotated with
/// min > max are flipped into place rather than rejected, so they still get drawn.
///
/// This project uses the standard convention of the left side of the image being x=0 and the top
/// of the image being y=0.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    label: String,
}

impl BoundingBox {
    /// Builds a box from two opposite corners given in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64, label: String) -> Self {
        BoundingBox {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
            label,
        }
    }
}

impl From<&BoxAnnotation> for BoundingBox {
    fn from(annotation: &BoxAnnotation) -> Self {
        let coordinates = &annotation.coordinates;
        BoundingBox::from_corners(
            coordinates.x_min(),
            coordinates.y_min(),
            coordinates.x_max(),
            coordinates.y_max(),
            annotation.label.clone(),
        )
    }
}

pub trait BoundingBoxGeometry {
    fn left(&self) -> f64;
    fn top(&self) -> f64;
    fn right(&self) -> f64;
    fn bottom(&self) -> f64;
    fn label(&self) -> &str;

    fn width(&self) -> f64 {
        self.right() - self.left()
    }

    fn height(&self) -> f64 {
        self.bottom() - self.top()
    }

    fn as_xyxy(&self) -> (f64, f64, f64, f64) {
        (self.left(), self.top(), self.right(), self.bottom())
    }
}

impl BoundingBoxGeometry for BoundingBox {
    fn left(&self) -> f64 {
        self.left
    }

    fn top(&self) -> f64 {
        self.top
    }

    fn right(&self) -> f64 {
        self.right
    }

    fn bottom(&self) -> f64 {
        self.bottom
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::coordinates::Coordinates;

    #[test]
    fn geometry() {
        let bbox = BoundingBox::from_corners(150.0, 20.0, 450.0, 540.0, "Player".to_string());
        assert_eq!(bbox.width(), 300.0);
        assert_eq!(bbox.height(), 520.0);
        assert_eq!(bbox.as_xyxy(), (150.0, 20.0, 450.0, 540.0));
        assert_eq!(bbox.label(), "Player");
    }

    #[test]
    fn flipped_corners_are_ordered() {
        let annotation = BoxAnnotation::new("Flipped", Coordinates::corner(10.0, 12.0, 2.0, 4.0));
        let bbox = BoundingBox::from(&annotation);
        assert_eq!(bbox.as_xyxy(), (2.0, 4.0, 10.0, 12.0));
        assert_eq!(bbox.width(), 8.0);
        assert_eq!(bbox.height(), 8.0);
    }

    #[test]
    fn from_size_form_annotation() {
        let annotation = BoxAnnotation::new("Ball", Coordinates::size(410.0, 450.0, 90.0, 90.0));
        let bbox = BoundingBox::from(&annotation);
        assert_eq!(bbox.as_xyxy(), (410.0, 450.0, 500.0, 540.0));
    }

    #[test]
    fn negative_size_form_is_flipped() {
        let annotation = BoxAnnotation::new("Ball", Coordinates::size(10.0, 10.0, -4.0, -6.0));
        let bbox = BoundingBox::from(&annotation);
        assert_eq!(bbox.as_xyxy(), (6.0, 4.0, 10.0, 10.0));
    }
}
