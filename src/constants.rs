//! Centralized constants for Illumine
//!
//! This module contains all configurable numerical values used throughout
//! the application. Each constant includes documentation on its purpose,
//! unit, and recommended value range.

// ============================================================================
// BRIGHTNESS
// ============================================================================

/// Lowest flashlight brightness.
/// Unit: percent
pub const BRIGHTNESS_MIN: u8 = 0;

/// Highest flashlight brightness.
/// Unit: percent
pub const BRIGHTNESS_MAX: u8 = 100;

/// Brightness used when nothing else is configured.
/// Unit: percent
pub const BRIGHTNESS_DEFAULT: u8 = 100;

// ============================================================================
// STROBE
// ============================================================================

/// Slowest strobe setting.
/// Unit: frequency step (1 = slow)
pub const STROBE_FREQUENCY_MIN: u8 = 1;

/// Fastest strobe setting.
/// Unit: frequency step (10 = fast)
pub const STROBE_FREQUENCY_MAX: u8 = 10;

/// Default strobe setting.
/// Unit: frequency step
pub const STROBE_FREQUENCY_DEFAULT: u8 = 5;

/// Strobe period is `(STROBE_PERIOD_BASE - frequency) * STROBE_PERIOD_STEP_SECS`.
/// Range: Fixed, gives 1.0s at the slowest step and 0.1s at the fastest
pub const STROBE_PERIOD_BASE: u8 = 11;

/// Unit: seconds
pub const STROBE_PERIOD_STEP_SECS: f32 = 0.1;

// ============================================================================
// BATTERY
// ============================================================================

/// Battery level shown before the user adjusts it.
/// Unit: percent
pub const BATTERY_DEFAULT: u8 = 80;

/// Battery levels strictly above this are shown as full.
/// Unit: percent
pub const BATTERY_FULL_ABOVE: u8 = 60;

/// Battery levels strictly above this (and not full) are shown as medium.
/// Unit: percent
pub const BATTERY_MEDIUM_ABOVE: u8 = 20;

// ============================================================================
// PRESENTATION
// ============================================================================

/// Opacity of the light when it is not emitting.
/// Unit: fraction (0.0-1.0)
pub const DIM_OPACITY: f32 = 0.1;

/// Blur applied to the light when it is not emitting.
/// Unit: pixels
pub const DIM_BLUR_PX: u32 = 10;

/// Opacity transition while strobing.
/// Unit: seconds
pub const STROBE_TRANSITION_SECS: f32 = 0.1;

/// Opacity transition in steady modes.
/// Unit: seconds
pub const STEADY_TRANSITION_SECS: f32 = 0.3;

// ============================================================================
// POLLING
// ============================================================================

/// Terminal renderer polling interval.
/// Unit: milliseconds
/// Recommended range: 20-100 (must be well below the shortest SOS step)
pub const RENDER_POLL_INTERVAL_MS: u64 = 25;
