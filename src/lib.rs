// Library interface for Illumine
// This allows tests and the CLI to access the crate's functionality

pub mod advisor;
pub mod app_state;
pub mod config;
pub mod config_file;
pub mod constants;
pub mod signal;
pub mod style;
pub mod timer;
pub mod utils;

use anyhow::{Context, Result};
use app_state::{AppState, Mode, TorchSettings};
use config_file::Config;
use log::{debug, info};
use signal::{DriverState, SosDriver};
use std::sync::Arc;
use style::Frame;
use timer::{Scheduler, ThreadScheduler};
use utils::color::Color;

/// Core torch functionality: settings plus the SOS driver they gate
///
/// Power and mode only change through this type. Each change holds the
/// settings lock while the SOS driver is re-gated, so the driver always ends
/// up matching the last write. Lock order is settings, then driver, then
/// scheduler.
pub struct IllumineCore<S: Scheduler = ThreadScheduler> {
    state: AppState,
    sos: SosDriver<S>,
}

impl IllumineCore<ThreadScheduler> {
    /// Create a core running on real time
    pub fn new() -> Self {
        Self::with_scheduler(Arc::new(ThreadScheduler::new()))
    }
}

impl Default for IllumineCore<ThreadScheduler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scheduler> IllumineCore<S> {
    pub fn with_scheduler(scheduler: Arc<S>) -> Self {
        Self {
            state: AppState::new(),
            sos: SosDriver::new(scheduler),
        }
    }

    /// Apply stored preferences
    pub fn apply_config(&self, cfg: &Config) -> Result<()> {
        let color = cfg.get_color().context("Invalid color in configuration")?;
        self.state.set_brightness(cfg.brightness);
        self.state.set_strobe_frequency(cfg.strobe_frequency);
        self.state.set_battery_level(cfg.battery_level);
        self.state.set_color(color);
        info!(
            "Preferences applied: brightness {}%, strobe {}, color {}",
            cfg.brightness, cfg.strobe_frequency, color
        );
        Ok(())
    }

    /// Point-in-time copy of every setting
    pub fn settings(&self) -> TorchSettings {
        self.state.snapshot()
    }

    pub fn is_powered(&self) -> bool {
        self.state.is_powered()
    }

    pub fn set_power(&self, on: bool) {
        let mut settings = self.state.lock();
        settings.power = on;
        debug!("Torch power {}", if on { "on" } else { "off" });
        self.sos.set_active(settings.sos_requested());
    }

    /// Flip the power switch, returning the new value
    pub fn toggle_power(&self) -> bool {
        let mut settings = self.state.lock();
        settings.power = !settings.power;
        debug!("Torch power toggled {}", if settings.power { "on" } else { "off" });
        self.sos.set_active(settings.sos_requested());
        settings.power
    }

    pub fn mode(&self) -> Mode {
        self.state.get_mode()
    }

    pub fn set_mode(&self, mode: Mode) {
        let mut settings = self.state.lock();
        settings.mode = mode;
        debug!("Mode set to {}", mode);
        self.sos.set_active(settings.sos_requested());
    }

    pub fn color(&self) -> Color {
        self.state.get_color()
    }

    pub fn set_color(&self, color: Color) {
        self.state.set_color(color);
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.state.set_brightness(brightness);
    }

    pub fn set_strobe_frequency(&self, frequency: u8) {
        self.state.set_strobe_frequency(frequency);
    }

    pub fn set_battery_level(&self, level: u8) {
        self.state.set_battery_level(level);
    }

    /// Current SOS driver state (inactive outside SOS mode)
    pub fn sos_state(&self) -> DriverState {
        self.sos.state()
    }

    /// Everything a renderer needs to draw the torch right now
    pub fn frame(&self) -> Frame {
        let settings = self.state.lock();
        style::frame(*settings, self.sos.light_on())
    }
}
