//! `Canvas` over NSBezierPath in the current graphics context.
//!
//! Only valid inside `drawRect:`. The view is flipped, so window
//! coordinates (origin top-left) map straight onto view coordinates.

use super::bridge::{get_class, id, msg_send, nil, non_nil, NSPoint, NSRect, NSSize};
use crate::error::Result;
use crate::model::Rgba;
use crate::render::{Canvas, Point};

// NSCompositingOperation values
const COMPOSITE_COPY: usize = 1;
const COMPOSITE_SOURCE_OVER: usize = 2;

pub struct BezierCanvas {
    bounds: NSRect,
}

impl BezierCanvas {
    pub fn new(bounds: NSRect) -> Self {
        Self { bounds }
    }

    unsafe fn set_color(color: Rgba) -> Result<()> {
        let ns_color: id = msg_send![
            get_class(c"NSColor")?,
            colorWithCalibratedRed: color.r,
            green: color.g,
            blue: color.b,
            alpha: color.a
        ];
        let ns_color = non_nil(ns_color, "NSColor")?;
        let _: () = msg_send![ns_color, set];
        Ok(())
    }

    unsafe fn oval(center: Point, radius: f64) -> Result<id> {
        let rect = NSRect::new(
            NSPoint::new(center.x - radius, center.y - radius),
            NSSize::new(radius * 2.0, radius * 2.0),
        );
        let path: id = msg_send![get_class(c"NSBezierPath")?, bezierPathWithOvalInRect: rect];
        non_nil(path, "NSBezierPath")
    }
}

impl Canvas for BezierCanvas {
    fn clear(&mut self) -> Result<()> {
        unsafe {
            let ctx: id = msg_send![get_class(c"NSGraphicsContext")?, currentContext];
            if ctx == nil {
                return Ok(());
            }
            let _: () = msg_send![ctx, setCompositingOperation: COMPOSITE_COPY];
            Self::set_color(Rgba::TRANSPARENT)?;
            let _: () = msg_send![get_class(c"NSBezierPath")?, fillRect: self.bounds];
            let _: () = msg_send![ctx, setCompositingOperation: COMPOSITE_SOURCE_OVER];
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        if radius <= 0.0 {
            return Ok(());
        }
        unsafe {
            let path = Self::oval(center, radius)?;
            Self::set_color(color)?;
            let _: () = msg_send![path, fill];
        }
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
        unsafe {
            let path = Self::oval(center, radius)?;
            Self::set_color(color)?;
            let _: () = msg_send![path, setLineWidth: width];
            let _: () = msg_send![path, stroke];
        }
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) -> Result<()> {
        if width <= 0.0 {
            return Ok(());
        }
        unsafe {
            let path: id = msg_send![get_class(c"NSBezierPath")?, bezierPath];
            let path = non_nil(path, "NSBezierPath")?;
            let _: () = msg_send![path, moveToPoint: NSPoint::new(from.x, from.y)];
            let _: () = msg_send![path, lineToPoint: NSPoint::new(to.x, to.y)];
            Self::set_color(color)?;
            let _: () = msg_send![path, setLineWidth: width];
            let _: () = msg_send![path, stroke];
        }
        Ok(())
    }
}
