use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// In-memory whiteboard drawing: row-major RGBA components scaled to [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct WhiteboardImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl WhiteboardImage {
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Self {
        Self {
            width,
            height,
            pixels: data.iter().map(|&b| f32::from(b) / 255.0).collect(),
        }
    }

    /// 8-bit view of the grid. Components outside [0, 1] are clamped before
    /// scaling.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }

    pub fn decode_png(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let raster = image::load_from_memory(bytes)?.into_rgba8();
        Ok(Self::from_rgba8(
            raster.width(),
            raster.height(),
            raster.as_raw(),
        ))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            &self.to_rgba8(),
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}
