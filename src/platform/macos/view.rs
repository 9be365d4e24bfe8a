//! The overlay's NSView subclass and the state its callbacks share.
//!
//! AppKit calls back into `drawRect:` and the timer's `tick:` on the main
//! thread, so the renderer and tracker live in a thread-local.

use std::cell::RefCell;

use log::{debug, warn};
use objc2::runtime::ClassBuilder;
use objc2::sel;
use objc2_app_kit::NSEvent;

use super::bridge::{
    get_class, id, msg_send, nil, non_nil, AnyClass, AnyObject, Bool, NSPoint, NSRect, NSSize,
    Sel, NO, YES,
};
use super::drawing::BezierCanvas;
use crate::error::{OverlayError, Result};
use crate::events::{publish, AppEvent};
use crate::handlers::dispatch_pending;
use crate::lifecycle::ShutdownLatch;
use crate::render::Renderer;
use crate::tracker::{PointerSource, Tracker, WindowMover};

pub struct MacState {
    pub renderer: Renderer,
    pub tracker: Tracker,
    pub app: id,
    pub window: id,
    pub view: id,
    pub timer: id,
}

thread_local! {
    pub static STATE: RefCell<Option<MacState>> = const { RefCell::new(None) };
}

static LATCH: ShutdownLatch = ShutdownLatch::new();

/// Register the view class (once) and install an instance in `window`.
///
/// # Safety
/// Must be called from the main thread. The window must be a valid NSWindow.
pub unsafe fn create_view(window: id, size: f64) -> Result<id> {
    let class_name = c"CursorCircleView";
    let class = match AnyClass::get(class_name) {
        Some(class) => class,
        None => {
            let superclass = get_class(c"NSView")?;
            let mut builder = ClassBuilder::new(class_name, superclass).ok_or_else(|| {
                OverlayError::WindowCreation("cannot declare CursorCircleView".into())
            })?;
            builder.add_method(
                sel!(drawRect:),
                draw_rect as unsafe extern "C-unwind" fn(_, _, _),
            );
            builder.add_method(
                sel!(isFlipped),
                is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
            );
            builder.add_method(
                sel!(isOpaque),
                is_opaque as unsafe extern "C-unwind" fn(_, _) -> _,
            );
            builder.add_method(sel!(tick:), tick as unsafe extern "C-unwind" fn(_, _, _));
            builder.register()
        }
    };

    let view: id = msg_send![class, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(size, size));
    let view: id = msg_send![view, initWithFrame: frame];
    let view = non_nil(view, "CursorCircleView")?;
    let _: () = msg_send![window, setContentView: view];
    Ok(view)
}

struct CocoaPointer;

impl PointerSource for CocoaPointer {
    fn pointer_position(&mut self) -> Option<(i32, i32)> {
        // Global coordinates, origin bottom-left of the main screen
        let p = NSEvent::mouseLocation();
        Some((p.x.round() as i32, p.y.round() as i32))
    }
}

struct CocoaMover {
    window: id,
}

impl WindowMover for CocoaMover {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        // With a bottom-left origin the same offset still centers the window
        let origin = NSPoint::new(f64::from(x), f64::from(y));
        unsafe {
            let _: () = msg_send![self.window, setFrameOrigin: origin];
        }
        Ok(())
    }
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn is_opaque(_this: &AnyObject, _cmd: Sel) -> Bool {
    NO
}

unsafe extern "C-unwind" fn tick(_this: &mut AnyObject, _cmd: Sel, _timer: id) {
    let work = dispatch_pending();
    if work.shutdown {
        shutdown();
        return;
    }

    let view = STATE.with(|state| {
        let mut state = state.try_borrow_mut().ok()?;
        let s = state.as_mut()?;
        let mut mover = CocoaMover { window: s.window };
        if let Err(e) = s.tracker.tick(&mut CocoaPointer, &mut mover) {
            warn!("Tracking tick skipped: {e}");
        }
        Some(s.view)
    });

    if let (true, Some(view)) = (work.repaint, view) {
        let _: () = msg_send![view, setNeedsDisplay: YES];
    }
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _dirty: NSRect) {
    let bounds: NSRect = msg_send![this, bounds];
    let again = STATE.with(|state| {
        let Ok(mut state) = state.try_borrow_mut() else {
            return false;
        };
        let Some(s) = state.as_mut() else {
            return false;
        };
        let mut canvas = BezierCanvas::new(bounds);
        match s.renderer.render(&mut canvas) {
            Ok(frame) => frame.wants_repaint,
            Err(e) => {
                warn!("Frame skipped: {e}");
                s.renderer.pulse().is_some()
            }
        }
    });
    if again {
        publish(AppEvent::Repaint);
    }
}

/// Stop the timer, hide the window and terminate the application.
unsafe fn shutdown() {
    LATCH.fire();
    let Some(state) = STATE.with(|state| state.borrow_mut().take()) else {
        return;
    };
    if state.timer != nil {
        let _: () = msg_send![state.timer, invalidate];
    }
    let _: () = msg_send![state.window, orderOut: nil];
    debug!("Terminating NSApplication");
    let _: () = msg_send![state.app, terminate: nil];
}
