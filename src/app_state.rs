use crate::utils::color::Color;
use anyhow::anyhow;
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use crate::constants::{
    BATTERY_DEFAULT, BRIGHTNESS_DEFAULT, BRIGHTNESS_MAX, STROBE_FREQUENCY_DEFAULT,
    STROBE_FREQUENCY_MAX, STROBE_FREQUENCY_MIN,
};

/// Light mode selected in the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Steady light with manual brightness and color ("Control" tab)
    #[default]
    Normal,
    Strobe,
    Sos,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "Control",
            Mode::Strobe => "Strobe",
            Mode::Sos => "SOS",
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "control" | "manual" => Ok(Mode::Normal),
            "strobe" => Ok(Mode::Strobe),
            "sos" => Ok(Mode::Sos),
            other => Err(anyhow!(
                "Unknown mode '{}' (expected normal, strobe or sos)",
                other
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point-in-time copy of the torch settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorchSettings {
    pub power: bool,
    pub mode: Mode,
    pub color: Color,
    /// Percent, 0-100
    pub brightness: u8,
    /// 1 (slow) to 10 (fast)
    pub strobe_frequency: u8,
    /// Percent, 0-100
    pub battery_level: u8,
}

impl Default for TorchSettings {
    fn default() -> Self {
        Self {
            power: false,
            mode: Mode::Normal,
            color: Color::White,
            brightness: BRIGHTNESS_DEFAULT,
            strobe_frequency: STROBE_FREQUENCY_DEFAULT,
            battery_level: BATTERY_DEFAULT,
        }
    }
}

impl TorchSettings {
    /// Whether the SOS driver should be running
    pub fn sos_requested(&self) -> bool {
        self.power && self.mode == Mode::Sos
    }
}

/// Torch state shared between the UI and the core
///
/// Power and mode are not settable from outside the crate: they gate the SOS
/// driver, so [`crate::IllumineCore`] changes them while holding the lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<TorchSettings>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TorchSettings::default())),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, TorchSettings> {
        self.inner.lock()
    }

    pub fn snapshot(&self) -> TorchSettings {
        *self.inner.lock()
    }

    pub fn is_powered(&self) -> bool {
        self.inner.lock().power
    }

    pub fn get_mode(&self) -> Mode {
        self.inner.lock().mode
    }

    pub fn get_color(&self) -> Color {
        self.inner.lock().color
    }

    pub fn set_color(&self, color: Color) {
        self.inner.lock().color = color;
    }

    /// Values above 100 are clamped
    pub fn set_brightness(&self, brightness: u8) {
        self.inner.lock().brightness = brightness.min(BRIGHTNESS_MAX);
    }

    /// Values outside 1-10 are clamped
    pub fn set_strobe_frequency(&self, frequency: u8) {
        self.inner.lock().strobe_frequency =
            frequency.clamp(STROBE_FREQUENCY_MIN, STROBE_FREQUENCY_MAX);
    }

    /// Values above 100 are clamped
    pub fn set_battery_level(&self, level: u8) {
        self.inner.lock().battery_level = level.min(100);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
