//! Windows backend: a layered, click-through Win32 window drawn with
//! Direct2D and driven by `SetTimer`.

mod overlay;
mod state;

use log::{info, warn};
use windows::core::{w, HSTRING};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Factory, D2D1_FACTORY_TYPE_SINGLE_THREADED,
};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetCursorPos, GetMessageW,
    KillTimer, PostQuitMessage, RegisterClassW, SetTimer, SetWindowPos, ShowWindow,
    TranslateMessage, HWND_TOPMOST, MSG, SWP_NOACTIVATE, SWP_NOSIZE, SW_SHOWNOACTIVATE,
    WM_CREATE, WM_DESTROY, WM_TIMER, WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use state::{WindowsRuntimeState, STATE};

use crate::error::{OverlayError, Result};
use crate::events::{self, AppEvent};
use crate::handlers::dispatch_pending;
use crate::lifecycle::{self, ShutdownLatch};
use crate::model::{OverlayConfig, WINDOW_TITLE};
use crate::render::Renderer;
use crate::tracker::{PointerSource, Tracker, WindowMover};

const TIMER_TICK: usize = 1;

static LATCH: ShutdownLatch = ShutdownLatch::new();

/// Run the overlay until interrupted.
pub fn run(config: OverlayConfig) -> Result<()> {
    unsafe {
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;
        let result = run_app(config);
        STATE.with(|s| *s.borrow_mut() = None);
        CoUninitialize();
        result
    }
}

unsafe fn run_app(config: OverlayConfig) -> Result<()> {
    // Window and cursor coordinates in physical pixels
    let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);

    let factory: ID2D1Factory = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;

    let interval_ms = u32::try_from(config.update_interval_ms).unwrap_or(u32::MAX);
    let renderer = Renderer::new(config);
    let geometry = *renderer.geometry();
    let size = geometry.window_size as i32;

    let instance = GetModuleHandleW(None)?;
    let class_name = w!("CursorCircleOverlay");
    let wc = WNDCLASSW {
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        lpszClassName: class_name,
        ..Default::default()
    };
    if RegisterClassW(&wc) == 0 {
        return Err(OverlayError::WindowCreation(
            "RegisterClassW failed".into(),
        ));
    }

    let mut tracker = Tracker::new(&geometry);
    let hwnd = CreateWindowExW(
        WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW,
        class_name,
        &HSTRING::from(WINDOW_TITLE),
        WS_POPUP,
        0,
        0,
        size,
        size,
        None,
        None,
        Some(instance.into()),
        None,
    )?;
    let origin = tracker
        .tick(&mut Win32Pointer, &mut Win32Mover { hwnd })?
        .unwrap_or((0, 0));

    STATE.with(|s| {
        *s.borrow_mut() = Some(WindowsRuntimeState {
            hwnd,
            size,
            origin,
            factory,
            renderer,
            tracker,
        });
    });

    events::init_event_bus();
    lifecycle::install_interrupt_handler()?;
    events::publish(AppEvent::Repaint);

    if SetTimer(Some(hwnd), TIMER_TICK, interval_ms, None) == 0 {
        let _ = DestroyWindow(hwnd);
        return Err(OverlayError::WindowCreation("SetTimer failed".into()));
    }
    let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
    info!("Win32 backend running, {interval_ms}ms per tick");

    let mut msg = MSG::default();
    while GetMessageW(&mut msg, None, 0, 0).as_bool() {
        let _ = TranslateMessage(&msg);
        DispatchMessageW(&msg);
    }
    Ok(())
}

struct Win32Pointer;

impl PointerSource for Win32Pointer {
    fn pointer_position(&mut self) -> Option<(i32, i32)> {
        let mut cursor = POINT::default();
        // Fails on the secure desktop (UAC prompt, lock screen)
        unsafe { GetCursorPos(&mut cursor) }.ok()?;
        Some((cursor.x, cursor.y))
    }
}

struct Win32Mover {
    hwnd: HWND,
}

impl WindowMover for Win32Mover {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        // Re-assert topmost on every move to stay above the taskbar
        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                x,
                y,
                0,
                0,
                SWP_NOSIZE | SWP_NOACTIVATE,
            )?;
        }
        Ok(())
    }
}

unsafe fn on_tick(hwnd: HWND) {
    let work = dispatch_pending();
    if work.shutdown {
        LATCH.fire();
        let _ = KillTimer(Some(hwnd), TIMER_TICK);
        let _ = DestroyWindow(hwnd);
        return;
    }

    let again = STATE.with(|s| {
        let mut guard = s.borrow_mut();
        let Some(state) = guard.as_mut() else {
            return false;
        };
        match state.tracker.tick(&mut Win32Pointer, &mut Win32Mover { hwnd }) {
            Ok(Some(origin)) => state.origin = origin,
            Ok(None) => {}
            Err(e) => warn!("Tracking tick skipped: {e}"),
        }
        if !work.repaint {
            return false;
        }
        match overlay::paint(state) {
            Ok(again) => again,
            Err(e) => {
                warn!("Frame skipped: {e}");
                state.renderer.pulse().is_some()
            }
        }
    });
    if again {
        events::publish(AppEvent::Repaint);
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CREATE => LRESULT(0),

            WM_TIMER => {
                if wparam.0 == TIMER_TICK {
                    on_tick(hwnd);
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
