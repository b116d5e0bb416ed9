use std::{fmt, str::FromStr};

use crate::error_handler::ConfigError;

/// Device profile Google renders the results page for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Desktop,
    Mobile,
    Tablet,
}

impl Device {
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(Device::Desktop),
            "mobile" => Ok(Device::Mobile),
            "tablet" => Ok(Device::Tablet),
            _ => Err(ConfigError::InvalidFormat {
                var: "SEARCH_DEVICE",
                reason: "expected desktop, mobile or tablet",
            }),
        }
    }
}

/// Pass-through parameters for every primary search.
///
/// These are operational settings, not pipeline logic, and are injected
/// into the engine at construction.
///
/// # Fields
///
/// - `hl`: result language (e.g. `"en"`).
/// - `gl`: result geo/locale (e.g. `"in"`).
/// - `device`: device profile.
/// - `num`: number of organic results requested.
/// - `no_cache`: ask the provider to bypass its result cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub hl: String,
    pub gl: String,
    pub device: Device,
    pub num: u32,
    pub no_cache: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            hl: "en".into(),
            gl: "in".into(),
            device: Device::Desktop,
            num: 10,
            no_cache: true,
        }
    }
}
