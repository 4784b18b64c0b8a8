use serde::{Deserialize, Serialize};

/// The two coordinate conventions a box annotation can be expressed in.
///
/// On the wire the variant is recognized by its field names alone, so a
/// `coordinates` object holding `x_max`/`y_max` is read as corner form and one
/// holding `width`/`height` as size form.
///
/// Corner form is expected to satisfy `x_min <= x_max` and `y_min <= y_max`,
/// but nothing here enforces it. Converting a malformed corner form box
/// yields a negative width or height.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    Corner {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },
    Size {
        x_min: f64,
        y_min: f64,
        width: f64,
        height: f64,
    },
}

impl Coordinates {
    pub fn corner(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Coordinates::Corner { x_min, y_min, x_max, y_max }
    }

    pub fn size(x_min: f64, y_min: f64, width: f64, height: f64) -> Self {
        Coordinates::Size { x_min, y_min, width, height }
    }

    pub fn x_min(&self) -> f64 {
        match *self {
            Coordinates::Corner { x_min, .. } | Coordinates::Size { x_min, .. } => x_min,
        }
    }

    pub fn y_min(&self) -> f64 {
        match *self {
            Coordinates::Corner { y_min, .. } | Coordinates::Size { y_min, .. } => y_min,
        }
    }

    pub fn x_max(&self) -> f64 {
        match *self {
            Coordinates::Corner { x_max, .. } => x_max,
            Coordinates::Size { x_min, width, .. } => x_min + width,
        }
    }

    pub fn y_max(&self) -> f64 {
        match *self {
            Coordinates::Corner { y_max, .. } => y_max,
            Coordinates::Size { y_min, height, .. } => y_min + height,
        }
    }

    pub fn width(&self) -> f64 {
        match *self {
            Coordinates::Corner { x_min, x_max, .. } => x_max - x_min,
            Coordinates::Size { width, .. } => width,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            Coordinates::Corner { y_min, y_max, .. } => y_max - y_min,
            Coordinates::Size { height, .. } => height,
        }
    }

    /// Returns the same box as (x_min, y_min, x_max, y_max).
    pub fn to_corner_form(&self) -> Self {
        Coordinates::corner(self.x_min(), self.y_min(), self.x_max(), self.y_max())
    }

    /// Returns the same box as (x_min, y_min, width, height).
    pub fn to_size_form(&self) -> Self {
        Coordinates::size(self.x_min(), self.y_min(), self.width(), self.height())
    }
}
