use crate::annotation_io::csv_sink::save_normalized_bounding_boxes;
use crate::annotation_io::json_sink::{load_annotation_json, save_annotation_json};
use crate::conversion::form::convert_image_annotation;
use crate::conversion::normalize::normalize_bounding_boxes;
use crate::error::Result;
use crate::image_utils::image_io::{read_image_dimensions, resolve_image_path};
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CONVERTED_SUFFIX: &str = ".converted.json";
const CONVERTED_PREFIX: &str = "converted_";

/// The files written for one annotation file.
#[derive(Debug, PartialEq)]
pub struct ConvertedFiles {
    pub normalized_csv: PathBuf,
    pub converted_json: PathBuf,
}

fn is_annotation_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".json")
        && !name.ends_with(CONVERTED_SUFFIX)
        && !name.starts_with(CONVERTED_PREFIX)
}

/// Normalizes and converts a single annotation file.
///
/// Writes `<stem>.normalized.csv` and `<stem>.converted.json` next to it.
pub fn convert_annotation_file(annotation_filepath: &Path) -> Result<ConvertedFiles> {
    let image_annotation = load_annotation_json(annotation_filepath)?;
    let image_path = resolve_image_path(annotation_filepath, &image_annotation.image_name);
    let (image_width, image_height) = read_image_dimensions(&image_path)?;

    let stem = annotation_filepath
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let outputs = ConvertedFiles {
        normalized_csv: annotation_filepath.with_file_name(format!("{}.normalized.csv", stem)),
        converted_json: annotation_filepath.with_file_name(format!("{}{}", stem, CONVERTED_SUFFIX)),
    };

    let normalized_boxes =
        normalize_bounding_boxes(&image_annotation, image_width as f64, image_height as f64)?;
    save_normalized_bounding_boxes(&normalized_boxes, &outputs.normalized_csv)?;
    save_annotation_json(&convert_image_annotation(&image_annotation), &outputs.converted_json)?;
    Ok(outputs)
}

/// Runs `convert_annotation_file` on every annotation file below `dir`.
///
/// Converted outputs, either `<stem>.converted.json` or the demonstration's
/// `converted_<name>.json`, are not picked up again. The first failure stops
/// the walk. Returns the number of files converted.
pub fn convert_directory(dir: &Path) -> Result<usize> {
    let mut converted = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() || !is_annotation_file(entry.path()) {
            continue;
        }
        debug!("Converting {:?}.", entry.path());
        convert_annotation_file(entry.path())?;
        converted += 1;
    }
    info!("Converted {} annotation files below {:?}.", converted, dir);
    Ok(converted)
}
