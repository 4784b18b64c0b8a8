use serde::{Deserialize, Serialize};

/// A corner form box whose coordinates are fractions of the image size.
///
/// The field order is also the column order of the normalized CSV file.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NormalizedBox {
    pub label: String,
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}
