use color_bucket::Rgb8;
use image::ImageReader;
use std::path::Path;

use crate::error::ScanError;

/// Decoded image as a row-major buffer of 8-bit pixels
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

/// Open and decode an image file.
///
/// The codec is picked from the file contents, not its name. Samples are
/// widened to 16 bits and reduced back to 8 by integer division, so 16-bit
/// sources are downscaled the same way as every other input.
pub fn decode_file(path: &Path) -> Result<DecodedImage, ScanError> {
    let open_err = |source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    let image = reader.decode().map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = image.to_rgba16();
    let (width, height) = rgba.dimensions();
    let pixels = rgba.pixels().map(|px| Rgb8::from_rgba16(px.0)).collect();

    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}
