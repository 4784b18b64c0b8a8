use crate::error::Result;
use image::{self, RgbImage};
use log::debug;
use std::path::{Path, PathBuf};

pub fn read_image_as_rgb8(filepath: &Path) -> Result<RgbImage> {
    Ok(image::open(filepath)?.into_rgb8())
}

/// Reads (width, height) from the image header without decoding the pixels.
pub fn read_image_dimensions(filepath: &Path) -> Result<(u32, u32)> {
    let (width, height) = image::image_dimensions(filepath)?;
    debug!("Image {:?} is {}x{}.", filepath, width, height);
    Ok((width, height))
}

/// Resolves the `image_name` of an annotation file.
///
/// Absolute names are used as they are, relative names are taken relative to
/// the directory the annotation file lives in.
pub fn resolve_image_path(annotation_filepath: &Path, image_name: &str) -> PathBuf {
    let image_path = Path::new(image_name);
    if image_path.is_absolute() {
        return image_path.to_path_buf();
    }
    match annotation_filepath.parent() {
        Some(dir) => dir.join(image_path),
        None => image_path.to_path_buf(),
    }
}
