pub mod driver;
pub mod pattern;

pub use driver::{DriverState, SosDriver};
pub use pattern::{SignalStep, SOS_PATTERN};
