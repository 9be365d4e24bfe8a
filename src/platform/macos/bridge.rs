//! Thin helpers over objc2 for untyped `msg_send!` code.
//!
//! The overlay talks to AppKit mostly through dynamic messages, so it works
//! with raw `id` pointers the way classic Cocoa code does.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CStr;

pub use objc2::msg_send;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use objc2::rc::Retained;

use crate::error::{OverlayError, Result};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL, not Rust bool.
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// Look up a runtime class by name.
pub fn get_class(name: &CStr) -> Result<&'static AnyClass> {
    AnyClass::get(name).ok_or_else(|| {
        OverlayError::WindowCreation(format!("class {} not found", name.to_string_lossy()))
    })
}

/// The shared NSApplication instance.
#[allow(non_snake_case)]
pub fn NSApp() -> Result<id> {
    let app: id = unsafe { msg_send![get_class(c"NSApplication")?, sharedApplication] };
    non_nil(app, "NSApplication")
}

/// Fail with `WindowCreation` if AppKit handed back nil.
pub fn non_nil(obj: id, what: &str) -> Result<id> {
    if obj.is_null() {
        Err(OverlayError::WindowCreation(format!("{what} returned nil")))
    } else {
        Ok(obj)
    }
}

pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Run a closure within an autorelease pool.
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}
