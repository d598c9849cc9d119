//! PNG encoding with physical resolution metadata.

use std::{fs, path::Path};

use log::info;
use png::{BitDepth, ColorType, Encoder, PixelDimensions, Unit};

use brandsheet_core::draw::Canvas;

use crate::export::{Error, Exporter};

const METERS_PER_INCH: f64 = 0.0254;

/// Writes 8-bit RGB PNGs with a `pHYs` chunk for the configured DPI.
#[derive(Debug, Clone, Copy)]
pub struct PngExporter {
    dpi: u32,
}

impl PngExporter {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Converts a resolution in dots per inch to pixels per meter, the unit
    /// PNG stores.
    pub fn pixels_per_meter(dpi: u32) -> u32 {
        (f64::from(dpi) / METERS_PER_INCH).round() as u32
    }
}

impl Exporter for PngExporter {
    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, canvas.width(), canvas.height());
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let ppm = Self::pixels_per_meter(self.dpi);
            encoder.set_pixel_dims(Some(PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: Unit::Meter,
            }));

            let mut writer = encoder.write_header().map_err(encode_error)?;
            writer
                .write_image_data(&canvas.to_rgb8())
                .map_err(encode_error)?;
            writer.finish().map_err(encode_error)?;
        }
        Ok(bytes)
    }

    fn export(&self, canvas: &Canvas, path: &Path) -> Result<(), Error> {
        let bytes = self.encode(canvas)?;
        fs::write(path, &bytes).map_err(Error::Io)?;
        info!(path:? = path, bytes = bytes.len(), dpi = self.dpi; "PNG written");
        Ok(())
    }
}

fn encode_error(err: png::EncodingError) -> Error {
    Error::Encode(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use brandsheet_core::{color::Color, draw::TextEngine};

    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(6, 4, Color::new("#2563EB").unwrap(), TextEngine::new()).unwrap()
    }

    #[test]
    fn test_pixels_per_meter() {
        assert_eq!(PngExporter::pixels_per_meter(150), 5906);
        assert_eq!(PngExporter::pixels_per_meter(72), 2835);
        assert_eq!(PngExporter::pixels_per_meter(300), 11811);
    }

    #[test]
    fn test_encode_writes_rgb_with_physical_dims() {
        let bytes = PngExporter::new(150).encode(&canvas()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (6, 4));
        assert_eq!(info.color_type, ColorType::Rgb);
        assert_eq!(info.bit_depth, BitDepth::Eight);
        let dims = info.pixel_dims.expect("pHYs chunk should be present");
        assert_eq!((dims.xppu, dims.yppu, dims.unit), (5906, 5906, Unit::Meter));

        let mut pixels = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut pixels).unwrap();
        assert_eq!(&pixels[..3], &[37, 99, 235]);
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("poster.png");
        let result = PngExporter::new(150).export(&canvas(), &path);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
