use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color filters the torch can emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Red,
    Amber,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::White, Color::Red, Color::Amber, Color::Blue];

    /// `#RRGGBB` form of the filter
    pub fn hex(&self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Red => "#FF5C5C",
            Color::Amber => "#FFD700",
            Color::Blue => "#5C96FF",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Amber => "amber",
            Color::Blue => "blue",
        }
    }

    /// Hex color with a two-digit alpha suffix appended, e.g. `#FF5C5C33`
    pub fn with_alpha(&self, alpha: &str) -> String {
        format!("{}{}", self.hex(), alpha)
    }

    /// Look up a palette entry by hex code (with or without `#`, any case)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        Self::ALL
            .into_iter()
            .find(|c| c.hex()[1..].eq_ignore_ascii_case(hex))
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Accepts a palette name ("amber", "yellow" is an alias) or a palette hex code
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "white" => Ok(Color::White),
            "red" => Ok(Color::Red),
            "amber" | "yellow" | "gold" => Ok(Color::Amber),
            "blue" => Ok(Color::Blue),
            _ => Color::from_hex(&key).ok_or_else(|| {
                anyhow!(
                    "Unknown color '{}' (expected white, red, amber, blue or one of #FFFFFF, #FF5C5C, #FFD700, #5C96FF)",
                    s.trim()
                )
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
