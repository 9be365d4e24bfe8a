//! Software canvas backed by a tiny-skia pixmap.
//!
//! Used directly by the X11 backend, and by tests to check actual pixels.

use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Stroke, Transform,
};

use super::{Canvas, Point};
use crate::error::{OverlayError, Result};
use crate::model::Rgba;

/// An anti-aliased RGBA pixmap the size of the overlay window.
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            OverlayError::Draw(format!("cannot allocate {width}x{height} pixmap"))
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied pixel at (x, y), if inside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// Premultiplied BGRA bytes, row-major, the layout X11 ARGB32 visuals
    /// and 32-bit DIBs expect on little-endian hosts.
    pub fn to_bgra_premultiplied(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            out.extend_from_slice(&[px.blue(), px.green(), px.red(), px.alpha()]);
        }
        out
    }

    fn paint(color: Rgba) -> Result<Paint<'static>> {
        let color = Color::from_rgba(
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a as f32,
        )
        .ok_or_else(|| OverlayError::Draw(format!("color out of range: {color:?}")))?;
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        Ok(paint)
    }
}

impl Canvas for PixmapCanvas {
    fn clear(&mut self) -> Result<()> {
        self.pixmap.fill(Color::TRANSPARENT);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        if radius <= 0.0 {
            return Ok(());
        }
        let path = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
            .ok_or_else(|| OverlayError::Draw(format!("invalid circle radius {radius}")))?;
        let paint = Self::paint(color)?;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Rgba,
    ) -> Result<()> {
        if radius <= 0.0 || width <= 0.0 {
            return Ok(());
        }
        let path = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
            .ok_or_else(|| OverlayError::Draw(format!("invalid circle radius {radius}")))?;
        let paint = Self::paint(color)?;
        let stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) -> Result<()> {
        if width <= 0.0 || from == to {
            return Ok(());
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let path = pb
            .finish()
            .ok_or_else(|| OverlayError::Draw("degenerate line".into()))?;
        let paint = Self::paint(color)?;
        let stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    #[test]
    fn clear_makes_everything_transparent() {
        let mut canvas = PixmapCanvas::new(20, 20).unwrap();
        canvas
            .fill_circle(Point::new(10.0, 10.0), 8.0, WHITE)
            .unwrap();
        canvas.clear().unwrap();
        assert!(canvas.to_bgra_premultiplied().iter().all(|&b| b == 0));
    }

    #[test]
    fn filled_disc_covers_center_not_corner() {
        let mut canvas = PixmapCanvas::new(40, 40).unwrap();
        canvas
            .fill_circle(Point::new(20.0, 20.0), 5.0, WHITE)
            .unwrap();
        assert_eq!(canvas.pixel(20, 20).unwrap().alpha(), 255);
        assert_eq!(canvas.pixel(0, 0).unwrap().alpha(), 0);
    }

    #[test]
    fn stroked_circle_leaves_center_empty() {
        let mut canvas = PixmapCanvas::new(40, 40).unwrap();
        canvas
            .stroke_circle(Point::new(20.0, 20.0), 15.0, 2.0, WHITE)
            .unwrap();
        assert_eq!(canvas.pixel(20, 20).unwrap().alpha(), 0);
        assert!(canvas.pixel(35, 20).unwrap().alpha() > 0);
    }

    #[test]
    fn bgra_is_premultiplied() {
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        canvas
            .fill_circle(Point::new(2.0, 2.0), 10.0, Rgba::new(1.0, 0.0, 0.0, 0.5))
            .unwrap();
        let bytes = canvas.to_bgra_premultiplied();
        // B, G, R, A
        assert_eq!(bytes[0], 0);
        assert!((127..=128).contains(&bytes[3]));
        assert!(bytes[2].abs_diff(bytes[3]) <= 1);
    }

    #[test]
    fn zero_radius_is_a_no_op() {
        let mut canvas = PixmapCanvas::new(10, 10).unwrap();
        assert!(canvas
            .fill_circle(Point::new(5.0, 5.0), 0.0, WHITE)
            .is_ok());
        assert!(canvas.to_bgra_premultiplied().iter().all(|&b| b == 0));
    }
}
