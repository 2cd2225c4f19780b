pub mod color;

use crate::constants::{STROBE_PERIOD_BASE, STROBE_PERIOD_STEP_SECS};

/// Strobe period in seconds for a frequency step (1 = slow, 10 = fast)
pub fn strobe_period_secs(frequency: u8) -> f32 {
    f32::from(STROBE_PERIOD_BASE.saturating_sub(frequency)) * STROBE_PERIOD_STEP_SECS
}
