//! macOS backend: a borderless AppKit window driven by an NSTimer.

mod bridge;
mod drawing;
mod view;

use log::info;
use objc2::sel;

use bridge::{autoreleasepool, get_class, id, msg_send, nil, non_nil, nsstring, NSApp, NSPoint};
use bridge::{NSRect, NSSize, NO, YES};
use view::{MacState, STATE};

use crate::error::Result;
use crate::events::{self, AppEvent};
use crate::lifecycle;
use crate::model::{OverlayConfig, WINDOW_TITLE};
use crate::render::Renderer;
use crate::tracker::Tracker;

/// NSApplicationActivationPolicyAccessory: no Dock icon, no menu bar.
const ACTIVATION_POLICY_ACCESSORY: isize = 1;
/// NSPopUpMenuWindowLevel + 1
const OVERLAY_WINDOW_LEVEL: isize = 102;
/// CanJoinAllSpaces | Stationary | FullScreenAuxiliary
const COLLECTION_BEHAVIOR: usize = 1 | 16 | 256;
const STYLE_BORDERLESS: usize = 0;
const BACKING_BUFFERED: usize = 2;

/// Run the overlay until interrupted.
pub fn run(config: OverlayConfig) -> Result<()> {
    autoreleasepool(|| unsafe { run_app(config) })
}

unsafe fn run_app(config: OverlayConfig) -> Result<()> {
    let app = NSApp()?;
    let _: bool = msg_send![app, setActivationPolicy: ACTIVATION_POLICY_ACCESSORY];

    let interval = config.update_interval();
    let renderer = Renderer::new(config);
    let geometry = *renderer.geometry();
    let size = f64::from(geometry.window_size);

    let window = create_window(size)?;
    let view = view::create_view(window, size)?;

    events::init_event_bus();
    lifecycle::install_interrupt_handler()?;
    let timer = create_timer(view, interval.as_secs_f64())?;

    STATE.with(|state| {
        *state.borrow_mut() = Some(MacState {
            renderer,
            tracker: Tracker::new(&geometry),
            app,
            window,
            view,
            timer,
        });
    });
    events::publish(AppEvent::Repaint);

    let _: () = msg_send![window, orderFrontRegardless];
    info!(
        "AppKit backend running, {}ms per tick",
        interval.as_millis()
    );
    let _: () = msg_send![app, run];
    Ok(())
}

/// A borderless, clear, click-through window above every other window.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn create_window(size: f64) -> Result<id> {
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(size, size));
    let window: id = msg_send![get_class(c"NSWindow")?, alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: STYLE_BORDERLESS,
        backing: BACKING_BUFFERED,
        defer: NO
    ];
    let window = non_nil(window, "NSWindow")?;

    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, setOpaque: NO];
    let _: () = msg_send![window, setHasShadow: NO];
    let clear: id = msg_send![get_class(c"NSColor")?, clearColor];
    let _: () = msg_send![window, setBackgroundColor: clear];
    let _: () = msg_send![window, setIgnoresMouseEvents: YES];
    let _: () = msg_send![window, setLevel: OVERLAY_WINDOW_LEVEL];
    let _: () = msg_send![window, setCollectionBehavior: COLLECTION_BEHAVIOR];
    let title = nsstring(WINDOW_TITLE);
    let _: () = msg_send![window, setTitle: &*title];
    Ok(window)
}

/// Repeating timer in the common run loop modes, so it keeps firing while
/// menus are open.
///
/// # Safety
/// The target must respond to `tick:`.
unsafe fn create_timer(target: id, interval: f64) -> Result<id> {
    let timer: id = msg_send![
        get_class(c"NSTimer")?,
        timerWithTimeInterval: interval,
        target: target,
        selector: sel!(tick:),
        userInfo: nil,
        repeats: YES
    ];
    let timer = non_nil(timer, "NSTimer")?;
    let run_loop: id = msg_send![get_class(c"NSRunLoop")?, currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*common_modes];
    Ok(timer)
}
