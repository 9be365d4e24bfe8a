//! Direct2D overlay rendering.
//!
//! Anti-aliased drawing into a premultiplied DIB, presented with per-pixel
//! alpha through UpdateLayeredWindow.

use windows::Win32::Foundation::{COLORREF, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_PIXEL_FORMAT,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1DCRenderTarget, ID2D1RenderTarget, ID2D1SolidColorBrush,
    D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_ELLIPSE, D2D1_RENDER_TARGET_PROPERTIES,
    D2D1_RENDER_TARGET_TYPE_DEFAULT, D2D1_RENDER_TARGET_USAGE_NONE,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS, HDC,
};
use windows::Win32::UI::WindowsAndMessaging::{UpdateLayeredWindow, ULW_ALPHA};
use windows_numerics::Vector2;

use super::state::WindowsRuntimeState;
use crate::error::{OverlayError, Result};
use crate::model::Rgba;
use crate::render::{Canvas, Point};

fn draw_err(e: windows::core::Error) -> OverlayError {
    OverlayError::Draw(e.to_string())
}

fn color_f(color: Rgba) -> D2D1_COLOR_F {
    D2D1_COLOR_F {
        r: color.r as f32,
        g: color.g as f32,
        b: color.b as f32,
        a: color.a as f32,
    }
}

fn vector(p: Point) -> Vector2 {
    Vector2::new(p.x as f32, p.y as f32)
}

/// `Canvas` over a Direct2D render target between BeginDraw and EndDraw.
pub struct D2dCanvas<'a> {
    rt: &'a ID2D1RenderTarget,
}

impl D2dCanvas<'_> {
    fn brush(&self, color: Rgba) -> Result<ID2D1SolidColorBrush> {
        unsafe { self.rt.CreateSolidColorBrush(&color_f(color), None) }.map_err(draw_err)
    }

    fn ellipse(center: Point, radius: f64) -> D2D1_ELLIPSE {
        D2D1_ELLIPSE {
            point: vector(center),
            radiusX: radius as f32,
            radiusY: radius as f32,
        }
    }
}

impl Canvas for D2dCanvas<'_> {
    fn clear(&mut self) -> Result<()> {
        unsafe { self.rt.Clear(Some(&color_f(Rgba::TRANSPARENT))) };
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<()> {
        if radius <= 0.0 {
            return Ok(());
        }
        let brush = self.brush(color)?;
        unsafe { self.rt.FillEllipse(&Self::ellipse(center, radius), &brush) };
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
        let brush = self.brush(color)?;
        unsafe {
            self.rt
                .DrawEllipse(&Self::ellipse(center, radius), &brush, width as f32, None)
        };
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) -> Result<()> {
        if width <= 0.0 {
            return Ok(());
        }
        let brush = self.brush(color)?;
        unsafe {
            self.rt
                .DrawLine(vector(from), vector(to), &brush, width as f32, None)
        };
        Ok(())
    }
}

/// Render one frame and push it to the layered window.
///
/// Returns whether the renderer wants another frame.
pub unsafe fn paint(state: &mut WindowsRuntimeState) -> Result<bool> {
    let size = state.size;
    let screen_dc = GetDC(None);
    let mem_dc = CreateCompatibleDC(Some(screen_dc));

    let bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: size,
            biHeight: -size, // Top-down
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
    let bitmap = match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) {
        Ok(bitmap) if !bits.is_null() => bitmap,
        _ => {
            ReleaseDC(None, screen_dc);
            let _ = DeleteDC(mem_dc);
            return Err(OverlayError::Draw("CreateDIBSection failed".into()));
        }
    };
    let old_bitmap = SelectObject(mem_dc, bitmap.into());

    let result = draw_and_present(state, screen_dc, mem_dc);

    SelectObject(mem_dc, old_bitmap);
    let _ = DeleteObject(bitmap.into());
    let _ = DeleteDC(mem_dc);
    ReleaseDC(None, screen_dc);
    result
}

unsafe fn draw_and_present(
    state: &mut WindowsRuntimeState,
    screen_dc: HDC,
    mem_dc: HDC,
) -> Result<bool> {
    let size = state.size;
    let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
        r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
        pixelFormat: D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        },
        dpiX: 96.0,
        dpiY: 96.0,
        usage: D2D1_RENDER_TARGET_USAGE_NONE,
        minLevel: Default::default(),
    };
    let dc_rt: ID2D1DCRenderTarget = state
        .factory
        .CreateDCRenderTarget(&rt_props)
        .map_err(draw_err)?;
    let rect = RECT {
        left: 0,
        top: 0,
        right: size,
        bottom: size,
    };
    dc_rt.BindDC(mem_dc, &rect).map_err(draw_err)?;
    let rt: ID2D1RenderTarget = dc_rt.into();

    rt.BeginDraw();
    rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);
    let frame = state.renderer.render(&mut D2dCanvas { rt: &rt });
    rt.EndDraw(None, None).map_err(draw_err)?;
    let frame = frame?;

    let pt_src = POINT { x: 0, y: 0 };
    let pt_dst = POINT {
        x: state.origin.0,
        y: state.origin.1,
    };
    let extent = SIZE { cx: size, cy: size };
    let blend = BLENDFUNCTION {
        BlendOp: 0,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: 1, // AC_SRC_ALPHA
    };
    UpdateLayeredWindow(
        state.hwnd,
        Some(screen_dc),
        Some(&pt_dst),
        Some(&extent),
        Some(mem_dc),
        Some(&pt_src),
        COLORREF(0),
        Some(&blend),
        ULW_ALPHA,
    )
    .map_err(draw_err)?;

    Ok(frame.wants_repaint)
}
