//! Presentation values derived from the torch settings
//!
//! Nothing here holds state. A renderer takes a [`TorchSettings`] snapshot
//! plus the SOS driver's current output and gets back a [`Frame`] describing
//! how the light should look.

use crate::app_state::{Mode, TorchSettings};
use crate::constants::{
    BATTERY_FULL_ABOVE, BATTERY_MEDIUM_ABOVE, DIM_BLUR_PX, DIM_OPACITY, STEADY_TRANSITION_SECS,
    STROBE_TRANSITION_SECS,
};
use crate::utils::color::Color;
use crate::utils::strobe_period_secs;
use std::fmt;

/// One layer of the glow around the light
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowLayer {
    pub blur_px: f32,
    pub spread_px: u32,
    /// Hex color with alpha suffix
    pub color: String,
    pub inset: bool,
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "0 0 {}px {}px {}",
            self.blur_px, self.spread_px, self.color
        )
    }
}

/// Glow drawn while the light is emitting
#[derive(Debug, Clone, PartialEq)]
pub struct Glow {
    pub background: Color,
    pub shadows: Vec<ShadowLayer>,
    pub opacity: f32,
}

impl Glow {
    /// CSS `box-shadow` value for all layers
    pub fn box_shadow(&self) -> String {
        self.shadows
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// (blur, spread, alpha, inset)
const GLOW_LAYERS: [(f32, u32, &str, bool); 4] = [
    (10.0, 5, "33", false),
    (30.0, 15, "22", false),
    (80.0, 40, "11", false),
    (20.0, 0, "88", true),
];

/// Opacity, blur and timing of the element carrying the light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapperStyle {
    pub opacity: f32,
    pub blur_px: u32,
    /// Opacity transition length; `None` when dimmed
    pub transition_secs: Option<f32>,
    /// Strobe animation period, only set while strobing
    pub strobe_period_secs: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryTier {
    Full,
    Medium,
    Low,
}

impl BatteryTier {
    pub fn from_level(level: u8) -> Self {
        if level > BATTERY_FULL_ABOVE {
            BatteryTier::Full
        } else if level > BATTERY_MEDIUM_ABOVE {
            BatteryTier::Medium
        } else {
            BatteryTier::Low
        }
    }

    /// Indicator color name
    pub fn indicator(&self) -> &'static str {
        match self {
            BatteryTier::Full => "green",
            BatteryTier::Medium => "yellow",
            BatteryTier::Low => "red",
        }
    }
}

/// Everything needed to draw the torch at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub settings: TorchSettings,
    pub visible: bool,
    /// Strobe animation should be running
    pub strobing: bool,
    pub glow: Option<Glow>,
    pub wrapper: WrapperStyle,
    pub battery: BatteryTier,
}

impl Frame {
    /// Final opacity of the light element
    pub fn opacity(&self) -> f32 {
        self.wrapper.opacity
    }
}

/// Whether the light is emitting for the given settings and SOS output
pub fn is_light_visible(settings: &TorchSettings, sos_light_on: bool) -> bool {
    if !settings.power {
        return false;
    }
    match settings.mode {
        Mode::Sos => sos_light_on,
        Mode::Normal | Mode::Strobe => true,
    }
}

pub fn glow(settings: &TorchSettings, visible: bool) -> Option<Glow> {
    if !visible {
        return None;
    }
    let opacity = f32::from(settings.brightness) / 100.0;
    let shadows = GLOW_LAYERS
        .iter()
        .map(|&(blur, spread_px, alpha, inset)| ShadowLayer {
            blur_px: blur * opacity,
            spread_px,
            color: settings.color.with_alpha(alpha),
            inset,
        })
        .collect();

    Some(Glow {
        background: settings.color,
        shadows,
        opacity,
    })
}

pub fn wrapper_style(settings: &TorchSettings, visible: bool) -> WrapperStyle {
    if !visible {
        return WrapperStyle {
            opacity: DIM_OPACITY,
            blur_px: DIM_BLUR_PX,
            transition_secs: None,
            strobe_period_secs: None,
        };
    }
    if settings.mode == Mode::Strobe {
        return WrapperStyle {
            opacity: 1.0,
            blur_px: 0,
            transition_secs: Some(STROBE_TRANSITION_SECS),
            strobe_period_secs: Some(strobe_period_secs(settings.strobe_frequency)),
        };
    }
    WrapperStyle {
        opacity: f32::from(settings.brightness) / 100.0,
        blur_px: 0,
        transition_secs: Some(STEADY_TRANSITION_SECS),
        strobe_period_secs: None,
    }
}

pub fn frame(settings: TorchSettings, sos_light_on: bool) -> Frame {
    let visible = is_light_visible(&settings, sos_light_on);
    Frame {
        settings,
        visible,
        strobing: visible && settings.mode == Mode::Strobe,
        glow: glow(&settings, visible),
        wrapper: wrapper_style(&settings, visible),
        battery: BatteryTier::from_level(settings.battery_level),
    }
}
