use super::{check_not_blank, run_flow, AdvisorError, FlowInput, FlowOutput, LlmBackend};
use serde::{Deserialize, Serialize};

const TEMPLATE: &str = r#"You are an expert in emergency situations and distress signals.

Based on the user's location and environment, give the most appropriate distress signal pattern and describe how to execute it. Follow international standards where they apply.

Location: {{{location}}}
Environment: {{{environment}}}

Be specific about timing (number of short flashes, long flashes and pauses).

Reply with a single JSON object with exactly these fields and nothing else:
{"signalPattern": "<pattern name, e.g. SOS>", "signalDescription": "<how to execute it>"}
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvideDistressSignalInput {
    /// Free-form location, typically including latitude and longitude
    pub location: String,
    /// Surroundings such as "mountain", "sea" or "urban"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvideDistressSignalOutput {
    pub signal_pattern: String,
    pub signal_description: String,
}

impl FlowInput for ProvideDistressSignalInput {
    const FLOW_NAME: &'static str = "provideDistressSignal";
    const TEMPLATE: &'static str = TEMPLATE;

    fn validate(&self) -> Result<(), AdvisorError> {
        if self.location.trim().is_empty() {
            return Err(AdvisorError::InvalidInput(
                "location must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl FlowOutput for ProvideDistressSignalOutput {
    fn validate(&self) -> Result<(), AdvisorError> {
        check_not_blank("signalPattern", &self.signal_pattern)?;
        check_not_blank("signalDescription", &self.signal_description)
    }
}

/// Ask the provider which distress signal fits the user's location
pub fn provide_distress_signal<B: LlmBackend + ?Sized>(
    backend: &B,
    input: &ProvideDistressSignalInput,
) -> Result<ProvideDistressSignalOutput, AdvisorError> {
    run_flow(backend, input)
}
