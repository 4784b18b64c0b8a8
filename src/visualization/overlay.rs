use crate::annotation_io::json_sink::load_annotation_json;
use crate::annotations::bounding_box::{BoundingBox, BoundingBoxGeometry};
use crate::annotations::image_annotation::BoxAnnotation;
use crate::error::{AnnotationError, Result};
use crate::image_utils::image_io::{read_image_as_rgb8, resolve_image_path};
use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use log::info;
use std::fs;
use std::path::Path;

/// How boxes and their labels are drawn.
#[derive(Clone, Debug)]
pub struct OverlayStyle {
    pub outline_color: Rgb<u8>,
    pub text_color: Rgb<u8>,
    /// Outline thickness in pixels, growing outwards from the box edge.
    pub line_width: u32,
    pub font_size: f32,
    /// Gap in pixels between the bottom of the label and the top of the box.
    pub label_offset: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        OverlayStyle {
            outline_color: Rgb([0, 0, 255]),
            text_color: Rgb([255, 0, 0]),
            line_width: 1,
            font_size: 12.0,
            label_offset: 10,
        }
    }
}

pub fn load_font(filepath: &Path) -> Result<FontVec> {
    let font_data = fs::read(filepath)?;
    FontVec::try_from_vec(font_data).map_err(|err| {
        AnnotationError::Font(format!("Cannot parse font file {:?}: {}", filepath, err))
    })
}

fn draw_bounding_box(
    image: &mut RgbImage,
    bounding_box: &BoundingBox,
    style: &OverlayStyle,
    font: Option<&FontVec>,
) {
    let (left, top, right, bottom) = bounding_box.as_xyxy();
    let left = left.round() as i32;
    let top = top.round() as i32;
    // Rect panics on zero sized rectangles.
    let width = (right.round() as i32 - left).max(1) as u32;
    let height = (bottom.round() as i32 - top).max(1) as u32;
    for i in 0..style.line_width {
        let offset_rect = Rect::at(left - i as i32, top - i as i32)
            .of_size(width + 2 * i, height + 2 * i);
        draw_hollow_rect_mut(image, offset_rect, style.outline_color);
    }
    if let Some(font) = font {
        let label_y = top - style.label_offset - style.font_size.ceil() as i32;
        draw_text_mut(
            image,
            style.text_color,
            left,
            label_y,
            PxScale::from(style.font_size),
            font,
            bounding_box.label(),
        );
    }
}

/// Draws one unfilled rectangle per box annotation onto `image`.
///
/// Boxes are drawn at their corner form coordinates. A box annotated with
/// min > max is drawn between the same two corners. Labels are only drawn when
/// a font is given.
pub fn draw_annotations(
    image: &mut RgbImage,
    annotations: &[BoxAnnotation],
    style: &OverlayStyle,
    font: Option<&FontVec>,
) {
    for annotation in annotations {
        draw_bounding_box(image, &BoundingBox::from(annotation), style, font);
    }
}

/// Reads an annotation file and the image it names, and draws the annotation
/// file's boxes on that image.
pub fn render_annotation_file(
    annotation_filepath: &Path,
    style: &OverlayStyle,
    font: Option<&FontVec>,
) -> Result<RgbImage> {
    let image_annotation = load_annotation_json(annotation_filepath)?;
    let image_path = resolve_image_path(annotation_filepath, &image_annotation.image_name);
    let mut image = read_image_as_rgb8(&image_path)?;
    draw_annotations(&mut image, &image_annotation.annotations, style, font);
    info!(
        "Drew {} boxes from {:?} on {:?}.",
        image_annotation.len(),
        annotation_filepath,
        image_path
    );
    Ok(image)
}

/// Writes the composed image to `filepath`.
pub fn save_overlay(image: &RgbImage, filepath: &Path) -> Result<()> {
    image.save(filepath)?;
    info!("Overlay written to {:?}.", filepath);
    Ok(())
}

/// Writes the composed image to `filepath` and opens it in the system's
/// default image viewer.
pub fn show_overlay(image: &RgbImage, filepath: &Path) -> Result<()> {
    save_overlay(image, filepath)?;
    opener::open(filepath)?;
    info!("Opened {:?} for inspection.", filepath);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation_io::json_sink::save_annotation_json;
    use crate::annotations::coordinates::Coordinates;
    use crate::annotations::image_annotation::ImageAnnotation;

    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn draws_unfilled_rectangle() {
        let mut image = RgbImage::new(20, 20);
        let annotations = vec![BoxAnnotation::new("Ball", Coordinates::corner(2.0, 2.0, 10.0, 10.0))];
        draw_annotations(&mut image, &annotations, &OverlayStyle::default(), None);
        assert_eq!(image.get_pixel(2, 2), &BLUE);
        assert_eq!(image.get_pixel(9, 2), &BLUE);
        assert_eq!(image.get_pixel(2, 9), &BLUE);
        assert_eq!(image.get_pixel(9, 9), &BLUE);
        assert_eq!(image.get_pixel(5, 5), &BLACK);
        assert_eq!(image.get_pixel(1, 1), &BLACK);
    }

    #[test]
    fn size_form_drawn_at_corner_coordinates() {
        let mut image = RgbImage::new(20, 20);
        let annotations = vec![BoxAnnotation::new("Ball", Coordinates::size(4.0, 4.0, 6.0, 6.0))];
        draw_annotations(&mut image, &annotations, &OverlayStyle::default(), None);
        assert_eq!(image.get_pixel(4, 4), &BLUE);
        assert_eq!(image.get_pixel(9, 9), &BLUE);
        assert_eq!(image.get_pixel(6, 6), &BLACK);
    }

    #[test]
    fn line_width_grows_outwards() {
        let mut image = RgbImage::new(20, 20);
        let style = OverlayStyle { line_width: 2, ..OverlayStyle::default() };
        let annotations = vec![BoxAnnotation::new("Ball", Coordinates::corner(5.0, 5.0, 12.0, 12.0))];
        draw_annotations(&mut image, &annotations, &style, None);
        assert_eq!(image.get_pixel(5, 5), &BLUE);
        assert_eq!(image.get_pixel(4, 4), &BLUE);
        assert_eq!(image.get_pixel(3, 3), &BLACK);
        assert_eq!(image.get_pixel(6, 6), &BLACK);
    }

    #[test]
    fn draws_flipped_boxes() {
        let mut image = RgbImage::new(20, 20);
        let annotations = vec![BoxAnnotation::new("Flipped", Coordinates::corner(10.0, 10.0, 2.0, 2.0))];
        draw_annotations(&mut image, &annotations, &OverlayStyle::default(), None);
        assert_eq!(image.get_pixel(2, 2), &BLUE);
        assert_eq!(image.get_pixel(9, 2), &BLUE);
        assert_eq!(image.get_pixel(2, 9), &BLUE);
        assert_eq!(image.get_pixel(9, 9), &BLUE);
        assert_eq!(image.get_pixel(5, 5), &BLACK);
    }

    #[test]
    fn render_from_annotation_file() {
        let temp = tempfile::tempdir().unwrap();
        RgbImage::new(30, 30).save(temp.path().join("image.png")).unwrap();
        let annotation = ImageAnnotation::new(
            "image.png",
            vec![BoxAnnotation::new("Player", Coordinates::corner(3.0, 4.0, 20.0, 25.0))],
        );
        let annotation_filepath = temp.path().join("image_annotation.json");
        save_annotation_json(&annotation, &annotation_filepath).unwrap();

        let image = render_annotation_file(&annotation_filepath, &OverlayStyle::default(), None)
            .unwrap();
        assert_eq!(image.dimensions(), (30, 30));
        assert_eq!(image.get_pixel(3, 4), &BLUE);
        assert_eq!(image.get_pixel(10, 10), &BLACK);

        let output = temp.path().join("annotated_image.png");
        save_overlay(&image, &output).unwrap();
        assert_eq!(read_image_as_rgb8(&output).unwrap(), image);
    }

    #[test]
    fn render_fails_without_image() {
        let temp = tempfile::tempdir().unwrap();
        let annotation = ImageAnnotation::new("missing.png", vec![]);
        let annotation_filepath = temp.path().join("image_annotation.json");
        save_annotation_json(&annotation, &annotation_filepath).unwrap();
        let result = render_annotation_file(&annotation_filepath, &OverlayStyle::default(), None);
        assert!(matches!(result, Err(AnnotationError::Image(_))));
    }

    #[test]
    fn load_font_rejects_garbage() {
        let temp = tempfile::tempdir().unwrap();
        let filepath = temp.path().join("font.ttf");
        fs::write(&filepath, b"not a font").unwrap();
        assert!(matches!(load_font(&filepath), Err(AnnotationError::Font(_))));
    }
}
