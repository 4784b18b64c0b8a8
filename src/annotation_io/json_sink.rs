use crate::annotations::image_annotation::ImageAnnotation;
use crate::error::Result;
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Writes an image annotation as JSON indented by four spaces, replacing
/// whatever was at `filepath`.
pub fn save_annotation_json(image_annotation: &ImageAnnotation, filepath: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(filepath)?);
    let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    image_annotation.serialize(&mut serializer)?;
    writer.flush()?;
    info!(
        "Wrote {} annotations of {} to {:?}.",
        image_annotation.len(),
        image_annotation.image_name,
        filepath
    );
    Ok(())
}

/// Reads an image annotation from a JSON file.
pub fn load_annotation_json(filepath: &Path) -> Result<ImageAnnotation> {
    let reader = BufReader::new(File::open(filepath)?);
    Ok(serde_json::from_reader(reader)?)
}
