use std::{io, path::Path};

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("failed to encode the chart as PNG")]
    Encode(#[source] image::ImageError),

    #[error(transparent)]
    Write(#[from] io::Error),
}

/// A rendered chart, stored as tightly packed 8-bit RGB rows.
#[derive(Debug, Clone)]
pub struct ChartFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ChartFrame {
    pub(crate) fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Returns the color at the given position.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels
            .get(offset..offset + 3)
            .and_then(|rgb| rgb.try_into().ok())
    }

    /// Packs every pixel into a `0RGB` word, the layout window buffers expect.
    pub fn to_packed_rgb(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(3)
            .map(|rgb| u32::from_be_bytes([0, rgb[0], rgb[1], rgb[2]]))
            .collect()
    }

    /// Encodes the frame as a PNG image.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                &self.pixels,
                self.width,
                self.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(ExportError::Encode)?;
        Ok(png)
    }
}

/// Writes `frame` to `path` as a PNG file, replacing whatever was there before.
pub fn export_png(frame: &ChartFrame, path: &Path) -> Result<(), ExportError> {
    let png = frame.to_png()?;
    fs_err::write(path, png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_rgb() {
        let mut frame = ChartFrame::blank(2, 1);
        frame.pixels_mut().copy_from_slice(&[0x12, 0x34, 0x56, 0xff, 0x00, 0x80]);
        assert_eq!(frame.to_packed_rgb(), vec![0x0012_3456, 0x00ff_0080]);
        assert_eq!(frame.pixel(1, 0), Some([0xff, 0x00, 0x80]));
        assert_eq!(frame.pixel(2, 0), None);
    }

    #[test]
    fn test_png_signature() {
        let png = ChartFrame::blank(4, 3).to_png().unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
