use annotation_converter::annotation_io::csv_sink::save_normalized_bounding_boxes;
use annotation_converter::annotation_io::json_sink::save_annotation_json;
use annotation_converter::annotations::coordinates::Coordinates;
use annotation_converter::annotations::image_annotation::{BoxAnnotation, ImageAnnotation};
use annotation_converter::batch::convert_directory;
use annotation_converter::conversion::form::convert_image_annotation;
use annotation_converter::conversion::normalize::normalize_bounding_boxes;
use annotation_converter::image_utils::image_io::read_image_dimensions;
use annotation_converter::visualization::overlay::{
    OverlayStyle, load_font, render_annotation_file, save_overlay, show_overlay,
};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

const ANNOTATION_FILENAME: &str = "image_annotation.json";
const NORMALIZED_FILENAME: &str = "normalized_bounding_boxes.csv";
const CONVERTED_FILENAME: &str = "converted_image_annotation.json";
const OVERLAY_FILENAME: &str = "annotated_image.png";

/// Converts bounding box annotations between corner and size form, normalizes
/// them to the image size and renders them over the image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image the sample annotation refers to.
    #[arg(long, default_value = "image.jpg")]
    image: PathBuf,

    /// Directory the output files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// TrueType/OpenType font used for box labels. Labels are not drawn without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Outline thickness of the drawn boxes, in pixels.
    #[arg(long, default_value_t = 1)]
    line_width: u32,

    /// Height of the box labels, in pixels.
    #[arg(long, default_value_t = 12.0)]
    font_size: f32,

    /// Skip rendering the overlay image.
    #[arg(long)]
    no_overlay: bool,

    /// Write the overlay image without opening it in the image viewer.
    #[arg(long)]
    no_display: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize and convert every annotation file below a directory.
    Batch { dir: PathBuf },
}

fn sample_annotation(image_name: String) -> ImageAnnotation {
    ImageAnnotation::new(
        image_name,
        vec![
            BoxAnnotation::new("Player", Coordinates::corner(150.0, 20.0, 450.0, 540.0)),
            BoxAnnotation::new("Ball", Coordinates::corner(410.0, 450.0, 500.0, 540.0)),
        ],
    )
}

fn run_demonstration(args: &Args) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&args.output_dir)?;
    // Relative image names are resolved against the annotation file's directory.
    let image_name = if args.output_dir == Path::new(".") || args.image.is_absolute() {
        args.image.clone()
    } else {
        std::path::absolute(&args.image)?
    };
    let image_annotation = sample_annotation(image_name.to_string_lossy().into_owned());
    let annotation_path = args.output_dir.join(ANNOTATION_FILENAME);
    save_annotation_json(&image_annotation, &annotation_path)?;

    let (image_width, image_height) = read_image_dimensions(&args.image)?;
    let normalized_boxes =
        normalize_bounding_boxes(&image_annotation, image_width as f64, image_height as f64)?;
    save_normalized_bounding_boxes(&normalized_boxes, &args.output_dir.join(NORMALIZED_FILENAME))?;

    let converted_annotation = convert_image_annotation(&image_annotation);
    save_annotation_json(&converted_annotation, &args.output_dir.join(CONVERTED_FILENAME))?;

    if args.no_overlay {
        return Ok(());
    }
    let font = match &args.font {
        Some(font_path) => Some(load_font(font_path)?),
        None => {
            warn!("No --font given, box labels will not be drawn.");
            None
        }
    };
    let style = OverlayStyle {
        line_width: args.line_width,
        font_size: args.font_size,
        ..OverlayStyle::default()
    };
    // Boxes are read back from the annotation file, not from the outputs above.
    let overlay = render_annotation_file(&annotation_path, &style, font.as_ref())?;
    let overlay_path = args.output_dir.join(OVERLAY_FILENAME);
    if args.no_display {
        save_overlay(&overlay, &overlay_path)?;
    } else {
        show_overlay(&overlay, &overlay_path)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match &args.command {
        Some(Command::Batch { dir }) => {
            let converted = convert_directory(dir)?;
            info!("Batch conversion finished, {} files converted.", converted);
        }
        None => run_demonstration(&args)?,
    }
    Ok(())
}
