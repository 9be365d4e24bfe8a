//! The X11 overlay window.
//!
//! An override-redirect ARGB window with an empty input shape, so the window
//! manager never decorates it and every click falls through to whatever is
//! underneath.

use log::{debug, info, warn};
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::shape;
use x11rb::protocol::xfixes::{self, ConnectionExt as _};
use x11rb::protocol::xproto::{
    AtomEnum, ColormapAlloc, ConfigureWindowAux, ConnectionExt as _, CreateGCAux,
    CreateWindowAux, EventMask, Gcontext, ImageFormat, PropMode, Screen, StackMode, VisualClass,
    Visualid, Window, WindowClass,
};
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::error::{OverlayError, Result};
use crate::model::{Geometry, WINDOW_TITLE};
use crate::render::PixmapCanvas;
use crate::tracker::{PointerSource, WindowMover};

/// Bytes reserved for the PutImage request header.
const PUT_IMAGE_HEADER: usize = 24;

/// Rows of a `row_bytes`-wide image that fit in one PutImage request.
pub fn rows_per_request(max_request_bytes: usize, row_bytes: usize) -> usize {
    if row_bytes == 0 {
        return 1;
    }
    (max_request_bytes.saturating_sub(PUT_IMAGE_HEADER) / row_bytes).max(1)
}

/// First 32-bit TrueColor visual on the screen, if the server offers one.
fn find_argb_visual(screen: &Screen) -> Option<Visualid> {
    screen
        .allowed_depths
        .iter()
        .filter(|d| d.depth == 32)
        .flat_map(|d| d.visuals.iter())
        .find(|v| v.class == VisualClass::TRUE_COLOR)
        .map(|v| v.visual_id)
}

fn intern(conn: &RustConnection, name: &str) -> Result<u32> {
    Ok(conn.intern_atom(false, name.as_bytes())?.reply()?.atom)
}

pub struct Overlay {
    conn: RustConnection,
    root: Window,
    window: Window,
    gc: Gcontext,
    depth: u8,
    size: u16,
}

impl Overlay {
    /// Connect to `$DISPLAY` and map the overlay window.
    pub fn create(geometry: &Geometry) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let screen = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| OverlayError::Display(format!("no X screen {screen_num}")))?
            .clone();
        let size = u16::try_from(geometry.window_size).map_err(|_| {
            OverlayError::WindowCreation(format!("window size {} too large", geometry.window_size))
        })?;

        let (depth, visual, colormap) = match find_argb_visual(&screen) {
            Some(visual) => {
                let colormap = conn.generate_id()?;
                conn.create_colormap(ColormapAlloc::NONE, colormap, screen.root, visual)?;
                (32, visual, colormap)
            }
            None => {
                warn!("No 32-bit visual; the overlay background will be opaque");
                (screen.root_depth, screen.root_visual, screen.default_colormap)
            }
        };

        let window = conn.generate_id()?;
        let aux = CreateWindowAux::new()
            .background_pixel(0)
            .border_pixel(0)
            .override_redirect(1)
            .colormap(colormap)
            .event_mask(EventMask::EXPOSURE);
        conn.create_window(
            depth,
            window,
            screen.root,
            0,
            0,
            size,
            size,
            0,
            WindowClass::INPUT_OUTPUT,
            visual,
            &aux,
        )?;

        conn.change_property8(
            PropMode::REPLACE,
            window,
            AtomEnum::WM_NAME,
            AtomEnum::STRING,
            WINDOW_TITLE.as_bytes(),
        )?;

        let wm_state = intern(&conn, "_NET_WM_STATE")?;
        let states = [
            intern(&conn, "_NET_WM_STATE_ABOVE")?,
            intern(&conn, "_NET_WM_STATE_SKIP_TASKBAR")?,
            intern(&conn, "_NET_WM_STATE_SKIP_PAGER")?,
        ];
        conn.change_property32(PropMode::REPLACE, window, wm_state, AtomEnum::ATOM, &states)?;

        let wm_type = intern(&conn, "_NET_WM_WINDOW_TYPE")?;
        let notification = intern(&conn, "_NET_WM_WINDOW_TYPE_NOTIFICATION")?;
        conn.change_property32(
            PropMode::REPLACE,
            window,
            wm_type,
            AtomEnum::ATOM,
            &[notification],
        )?;

        make_click_through(&conn, window)?;

        let gc = conn.generate_id()?;
        conn.create_gc(gc, window, &CreateGCAux::new())?;

        conn.map_window(window)?;
        conn.flush()?;
        info!("X11 overlay mapped: {size}x{size}, depth {depth}");

        Ok(Self {
            conn,
            root: screen.root,
            window,
            gc,
            depth,
            size,
        })
    }

    /// Drain pending X events; true if any part of the window was exposed.
    pub fn take_exposed(&self) -> Result<bool> {
        let mut exposed = false;
        while let Some(event) = self.conn.poll_for_event()? {
            if let Event::Expose(e) = event {
                exposed |= e.count == 0;
            }
        }
        Ok(exposed)
    }

    /// Upload the canvas, split into bands that fit one request each.
    pub fn present(&self, canvas: &PixmapCanvas) -> Result<()> {
        let bytes = canvas.to_bgra_premultiplied();
        let width = usize::from(self.size);
        let row_bytes = width * 4;
        let rows = rows_per_request(self.conn.maximum_request_bytes(), row_bytes);

        for (band, chunk) in bytes.chunks(rows * row_bytes).enumerate() {
            let band_rows = (chunk.len() / row_bytes) as u16;
            let y = (band * rows) as i16;
            self.conn.put_image(
                ImageFormat::Z_PIXMAP,
                self.window,
                self.gc,
                self.size,
                band_rows,
                0,
                y,
                0,
                self.depth,
                chunk,
            )?;
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }

    pub fn pointer(&self) -> X11Pointer<'_> {
        X11Pointer {
            conn: &self.conn,
            root: self.root,
        }
    }

    pub fn mover(&self) -> X11Mover<'_> {
        X11Mover {
            conn: &self.conn,
            window: self.window,
        }
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        let _ = self.conn.destroy_window(self.window);
        let _ = self.conn.flush();
    }
}

/// An empty XFixes input region: the window receives no pointer input.
fn make_click_through(conn: &RustConnection, window: Window) -> Result<()> {
    if conn
        .extension_information(xfixes::X11_EXTENSION_NAME)?
        .is_none()
    {
        warn!("XFixes unavailable; the overlay will intercept clicks");
        return Ok(());
    }
    conn.xfixes_query_version(5, 0)?.reply()?;

    let region = conn.generate_id()?;
    conn.xfixes_create_region(region, &[])?;
    conn.xfixes_set_window_shape_region(window, shape::SK::INPUT, 0, 0, region)?;
    conn.xfixes_destroy_region(region)?;
    Ok(())
}

pub struct X11Pointer<'a> {
    conn: &'a RustConnection,
    root: Window,
}

impl PointerSource for X11Pointer<'_> {
    fn pointer_position(&mut self) -> Option<(i32, i32)> {
        let reply = match self.conn.query_pointer(self.root) {
            Ok(cookie) => cookie.reply(),
            Err(e) => {
                debug!("QueryPointer not sent: {e}");
                return None;
            }
        };
        match reply {
            Ok(r) if r.same_screen => Some((i32::from(r.root_x), i32::from(r.root_y))),
            Ok(_) => None,
            Err(e) => {
                debug!("QueryPointer failed: {e}");
                None
            }
        }
    }
}

pub struct X11Mover<'a> {
    conn: &'a RustConnection,
    window: Window,
}

impl WindowMover for X11Mover<'_> {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        let aux = ConfigureWindowAux::new()
            .x(x)
            .y(y)
            .stack_mode(StackMode::ABOVE);
        self.conn.configure_window(self.window, &aux)?;
        Ok(())
    }
}
