use std::io::Cursor;

use egui::{Color32, ColorImage, Pos2, Rect, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::hit_testing::primitive_contains;
use crate::stroke::{Primitive, StrokePath};

/// The raster the canvas paints into.
///
/// Coverage is binary: a pixel takes the stroke color when its center lies
/// inside the stroked outline, so redrawing the same strokes always yields the
/// same pixels.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Color32) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width() as usize, self.height() as usize]
    }

    /// Color at pixel (x, y), or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels.get_pixel_checked(x, y).map(|pixel| {
            let [r, g, b, a] = pixel.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Paint a single primitive
    pub fn stroke_primitive(&mut self, primitive: &Primitive, color: Color32, line_width: f32) {
        let Some((xs, ys)) = self.pixel_area(footprint_bounds(primitive, line_width)) else {
            return;
        };
        let rgba = to_rgba(color);
        for y in ys {
            for x in xs.clone() {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if primitive_contains(primitive, center, line_width) {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Paint every primitive of a path
    pub fn stroke_path(&mut self, path: &StrokePath, color: Color32, line_width: f32) {
        for primitive in path.primitives() {
            self.stroke_primitive(&primitive, color, line_width);
        }
    }

    /// Copy of the pixels for uploading as an egui texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(self.size(), self.pixels.as_raw())
    }

    /// Encode the current pixels as PNG
    pub fn encode_png(&self) -> CanvasResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    // Clamp a float rect to the pixel ranges whose centers may fall inside it
    fn pixel_area(&self, rect: Rect) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
        let clamp_x = |v: f32| v.clamp(0.0, self.width() as f32) as u32;
        let clamp_y = |v: f32| v.clamp(0.0, self.height() as f32) as u32;
        let xs = clamp_x(rect.min.x.floor())..clamp_x(rect.max.x.ceil());
        let ys = clamp_y(rect.min.y.floor())..clamp_y(rect.max.y.ceil());
        (!xs.is_empty() && !ys.is_empty()).then_some((xs, ys))
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn footprint_bounds(primitive: &Primitive, line_width: f32) -> Rect {
    match *primitive {
        Primitive::Line { from, to } => Rect::from_two_pos(from, to).expand(line_width / 2.0),
        Primitive::Arc { center, radius } => {
            Rect::from_center_size(center, Vec2::splat((radius + line_width / 4.0) * 2.0))
        }
    }
}
