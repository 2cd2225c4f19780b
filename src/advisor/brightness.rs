use super::{check_percent, run_flow, AdvisorError, FlowInput, FlowOutput, LlmBackend};
use serde::{Deserialize, Serialize};

const TEMPLATE: &str = r#"You are an assistant that tunes screen and flashlight brightness on mobile devices, balancing visibility against power consumption.

You receive the ambient light level in lux (higher means brighter surroundings), the current battery percentage, and the user's brightness preference.

Choose the screen brightness and flashlight strength, both on a 0-100 scale, considering:

* Visibility: the screen and flashlight must be bright enough for comfortable viewing in the current ambient light.
* Battery life: reduce brightness where possible, especially when the battery is low.
* User preference: respect userBrightnessPreference when it is given, and only deviate from it when it is unsafe or wastes battery.

Explain your reasoning for the chosen levels.

Ambient Light Level: {{{ambientLightLevel}}} lux
Current Battery Percentage: {{{currentBatteryPercentage}}}%
User Brightness Preference: {{{userBrightnessPreference}}}%

Reply with a single JSON object with exactly these fields and nothing else:
{"screenBrightness": <0-100>, "flashlightStrength": <0-100>, "reasoning": "<short explanation>"}
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeBrightnessInput {
    /// Lux, higher is brighter
    pub ambient_light_level: f64,
    /// 0-100
    pub current_battery_percentage: u8,
    /// 0-100, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_brightness_preference: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeBrightnessOutput {
    pub screen_brightness: f64,
    pub flashlight_strength: f64,
    pub reasoning: String,
}

impl FlowInput for OptimizeBrightnessInput {
    const FLOW_NAME: &'static str = "optimizeBrightness";
    const TEMPLATE: &'static str = TEMPLATE;

    fn validate(&self) -> Result<(), AdvisorError> {
        if !self.ambient_light_level.is_finite() || self.ambient_light_level < 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "ambient light level must be a non-negative number of lux, got {}",
                self.ambient_light_level
            )));
        }
        if self.current_battery_percentage > 100 {
            return Err(AdvisorError::InvalidInput(format!(
                "battery percentage must be 0-100, got {}",
                self.current_battery_percentage
            )));
        }
        if let Some(preference) = self.user_brightness_preference {
            if preference > 100 {
                return Err(AdvisorError::InvalidInput(format!(
                    "brightness preference must be 0-100, got {}",
                    preference
                )));
            }
        }
        Ok(())
    }
}

impl FlowOutput for OptimizeBrightnessOutput {
    fn validate(&self) -> Result<(), AdvisorError> {
        check_percent("screenBrightness", self.screen_brightness)?;
        check_percent("flashlightStrength", self.flashlight_strength)
    }
}

impl OptimizeBrightnessOutput {
    /// Flashlight strength rounded onto the brightness slider's scale
    pub fn flashlight_percent(&self) -> u8 {
        self.flashlight_strength.round().clamp(0.0, 100.0) as u8
    }
}

/// Ask the provider for screen and flashlight levels suited to the surroundings
pub fn optimize_brightness<B: LlmBackend + ?Sized>(
    backend: &B,
    input: &OptimizeBrightnessInput,
) -> Result<OptimizeBrightnessOutput, AdvisorError> {
    run_flow(backend, input)
}
