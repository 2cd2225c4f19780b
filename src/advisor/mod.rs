//! LLM-backed advice
//!
//! Two flows, both shaped the same way: validate the input, render a prompt,
//! hand it to an [`LlmBackend`], then parse and validate the JSON reply.
//! The provider itself lives outside this crate.

pub mod brightness;
pub mod distress;
pub mod prompt;

pub use brightness::{optimize_brightness, OptimizeBrightnessInput, OptimizeBrightnessOutput};
pub use distress::{provide_distress_signal, ProvideDistressSignalInput, ProvideDistressSignalOutput};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider request failed: {0:#}")]
    Provider(anyhow::Error),

    #[error("Malformed provider response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid provider response: {0}")]
    InvalidOutput(String),
}

/// Anything that can turn a prompt into a completion
pub trait LlmBackend {
    fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}

impl<F> LlmBackend for F
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        self(prompt)
    }
}

/// A flow's input: knows how to check itself and which template it fills
pub trait FlowInput: Serialize {
    const FLOW_NAME: &'static str;
    const TEMPLATE: &'static str;

    fn validate(&self) -> Result<(), AdvisorError>;

    /// Rendered prompt for this input
    fn prompt(&self) -> Result<String, AdvisorError> {
        self.validate()?;
        prompt::render(Self::TEMPLATE, self)
    }
}

/// A flow's output: checked after parsing
pub trait FlowOutput: DeserializeOwned {
    fn validate(&self) -> Result<(), AdvisorError>;
}

pub(crate) fn run_flow<I, O, B>(backend: &B, input: &I) -> Result<O, AdvisorError>
where
    I: FlowInput,
    O: FlowOutput,
    B: LlmBackend + ?Sized,
{
    let prompt = input.prompt()?;
    debug!("{}: sending {} byte prompt", I::FLOW_NAME, prompt.len());

    let reply = backend.complete(&prompt).map_err(AdvisorError::Provider)?;
    let output: O = prompt::parse_reply(&reply)?;
    output.validate()?;

    info!("{}: response accepted", I::FLOW_NAME);
    Ok(output)
}

pub(crate) fn check_percent(field: &str, value: f64) -> Result<(), AdvisorError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(AdvisorError::InvalidOutput(format!(
            "{} must be between 0 and 100, got {}",
            field, value
        )))
    }
}

pub(crate) fn check_not_blank(field: &str, value: &str) -> Result<(), AdvisorError> {
    if value.trim().is_empty() {
        Err(AdvisorError::InvalidOutput(format!("{} is empty", field)))
    } else {
        Ok(())
    }
}
