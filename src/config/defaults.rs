// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Toast**: Notifier entrance, dwell and exit timings
//! - **Locale**: Fallback language

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Duration of the toast entrance transition (milliseconds).
pub const TOAST_ENTRANCE_MS: u64 = 200;

/// Time a toast stays up, measured from the start of its entrance (milliseconds).
pub const TOAST_DWELL_MS: u64 = 2000;

/// Duration of the toast exit transition (milliseconds).
pub const TOAST_EXIT_MS: u64 = 200;

/// Vertical distance the toast slides in from (logical pixels).
pub const TOAST_SLIDE_DISTANCE: f32 = 15.0;

/// Interval between animation frames while a toast is on screen (milliseconds).
pub const TOAST_FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(TOAST_DWELL_MS > TOAST_ENTRANCE_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
