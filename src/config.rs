//! Environment variable overrides for Illumine
//!
//! The primary configuration source is config.toml (see config_file module).
//! These optional variables override it:
//! - ILLUMINE_BRIGHTNESS: Flashlight brightness (0-100)
//! - ILLUMINE_STROBE_FREQUENCY: Strobe frequency step (1-10)
//! - ILLUMINE_COLOR: Color filter name or palette hex code

use crate::constants::{BRIGHTNESS_MAX, BRIGHTNESS_MIN, STROBE_FREQUENCY_MAX, STROBE_FREQUENCY_MIN};
use crate::utils::color::Color;
use log::{debug, info, warn};
use std::env;

pub const BRIGHTNESS_VAR: &str = "ILLUMINE_BRIGHTNESS";
pub const STROBE_FREQUENCY_VAR: &str = "ILLUMINE_STROBE_FREQUENCY";
pub const COLOR_VAR: &str = "ILLUMINE_COLOR";

/// Parse the ILLUMINE_BRIGHTNESS environment variable
///
/// Returns Some(percent) if set to a value within 0-100, None otherwise
pub fn parse_brightness() -> Option<u8> {
    parse_ranged_var(BRIGHTNESS_VAR, BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// Parse the ILLUMINE_STROBE_FREQUENCY environment variable
///
/// Returns Some(step) if set to a value within 1-10, None otherwise
pub fn parse_strobe_frequency() -> Option<u8> {
    parse_ranged_var(STROBE_FREQUENCY_VAR, STROBE_FREQUENCY_MIN, STROBE_FREQUENCY_MAX)
}

/// Parse the ILLUMINE_COLOR environment variable
pub fn parse_color() -> Option<Color> {
    parse_color_var(COLOR_VAR)
}

fn parse_ranged_var(name: &str, min: u8, max: u8) -> Option<u8> {
    match env::var(name) {
        Ok(val) => match val.trim().parse::<u8>() {
            Ok(value) if (min..=max).contains(&value) => {
                info!("{} set via environment variable: {}", name, value);
                Some(value)
            }
            Ok(value) => {
                warn!(
                    "Invalid {}: {} (must be {}-{}). Ignoring.",
                    name, value, min, max
                );
                None
            }
            Err(e) => {
                warn!("Failed to parse {}: {}. Ignoring.", name, e);
                None
            }
        },
        Err(_) => {
            debug!("{} not set.", name);
            None
        }
    }
}

fn parse_color_var(name: &str) -> Option<Color> {
    let val = env::var(name).ok()?;
    match val.parse::<Color>() {
        Ok(color) => {
            info!("{} set via environment variable: {}", name, color);
            Some(color)
        }
        Err(e) => {
            warn!("Invalid {}: {}. Ignoring.", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable name so tests can run in parallel.

    #[test]
    fn test_ranged_valid_values() {
        let var = "ILLUMINE_TEST_RANGED_VALID";
        env::set_var(var, "0");
        assert_eq!(parse_ranged_var(var, 0, 100), Some(0), "Should accept 0");

        env::set_var(var, "55");
        assert_eq!(parse_ranged_var(var, 0, 100), Some(55));

        env::set_var(var, " 100 ");
        assert_eq!(
            parse_ranged_var(var, 0, 100),
            Some(100),
            "Should accept surrounding whitespace"
        );

        env::remove_var(var);
    }

    #[test]
    fn test_ranged_boundary_cases() {
        let var = "ILLUMINE_TEST_RANGED_BOUNDARY";
        env::set_var(var, "0");
        assert_eq!(parse_ranged_var(var, 1, 10), None, "Should reject 0");

        env::set_var(var, "1");
        assert_eq!(parse_ranged_var(var, 1, 10), Some(1));

        env::set_var(var, "10");
        assert_eq!(parse_ranged_var(var, 1, 10), Some(10));

        env::set_var(var, "11");
        assert_eq!(parse_ranged_var(var, 1, 10), None, "Should reject 11");

        env::remove_var(var);
    }

    #[test]
    fn test_ranged_invalid_values() {
        let var = "ILLUMINE_TEST_RANGED_INVALID";
        for bad in ["", "bright", "-5", "50%", "300"] {
            env::set_var(var, bad);
            assert_eq!(
                parse_ranged_var(var, 0, 100),
                None,
                "Should reject {:?}",
                bad
            );
        }
        env::remove_var(var);
    }

    #[test]
    fn test_ranged_not_set() {
        let var = "ILLUMINE_TEST_RANGED_UNSET";
        env::remove_var(var);
        assert_eq!(parse_ranged_var(var, 0, 100), None);
    }

    #[test]
    fn test_color_var() {
        let var = "ILLUMINE_TEST_COLOR";
        env::set_var(var, "Red");
        assert_eq!(parse_color_var(var), Some(Color::Red));

        env::set_var(var, "#ffd700");
        assert_eq!(parse_color_var(var), Some(Color::Amber));

        env::set_var(var, "magenta");
        assert_eq!(parse_color_var(var), None);

        env::remove_var(var);
        assert_eq!(parse_color_var(var), None);
    }
}
