use crate::annotations::normalized_box::NormalizedBox;
use crate::error::Result;
use itertools::Itertools;
use log::info;
use std::path::Path;

pub const NORMALIZED_CSV_HEADER: [&str; 5] = ["label", "x_min", "y_min", "x_max", "y_max"];

/// Writes normalized boxes to a CSV file, replacing whatever was at `filepath`.
///
/// The header row is always written, even when there are no boxes.
pub fn save_normalized_bounding_boxes(
    normalized_boxes: &[NormalizedBox],
    filepath: &Path,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(filepath)?;
    writer.write_record(NORMALIZED_CSV_HEADER)?;
    for normalized_box in normalized_boxes {
        writer.serialize(normalized_box)?;
    }
    writer.flush()?;
    info!("Wrote {} normalized boxes to {:?}.", normalized_boxes.len(), filepath);
    Ok(())
}

/// Reads a CSV file written by `save_normalized_bounding_boxes`.
pub fn load_normalized_bounding_boxes(filepath: &Path) -> Result<Vec<NormalizedBox>> {
    let normalized_boxes: Vec<NormalizedBox> = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(filepath)?
        .deserialize()
        .try_collect()?;
    Ok(normalized_boxes)
}
