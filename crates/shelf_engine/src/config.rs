use crate::{
    constants::{
        DEFAULT_DEBOUNCE_MS, DEFAULT_FILLER_UNIT, DEFAULT_PRODUCT_DIMENSION, DEFAULT_SCALE,
        FALLBACK_PRICE_MAX, FALLBACK_PRICE_MIN,
    },
    error::{PlanogramError, Result},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    /// Callers debounce re-runs by this window; the engine itself never waits
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub scale: f64,       // display units per domain unit
    pub filler_unit: f64, // width of one filler slot
    pub default_product_width: f64,
    pub default_product_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            filler_unit: DEFAULT_FILLER_UNIT,
            default_product_width: DEFAULT_PRODUCT_DIMENSION,
            default_product_height: DEFAULT_PRODUCT_DIMENSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Range used when a malformed price range meets a dataset with no numeric price
    pub fallback_price_min: f64,
    pub fallback_price_max: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            fallback_price_min: FALLBACK_PRICE_MIN,
            fallback_price_max: FALLBACK_PRICE_MAX,
        }
    }
}

impl LayoutConfig {
    /// Every layout length must be a positive, finite number
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("scale", self.scale),
            ("filler_unit", self.filler_unit),
            ("default_product_width", self.default_product_width),
            ("default_product_height", self.default_product_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlanogramError::Config(format!(
                    "layout.{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            filter: FilterConfig::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl EngineConfig {
    /// Load and validate a TOML config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanogramError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            PlanogramError::Config(format!(
                "Failed to load config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;

        let filter = &self.filter;
        if filter.fallback_price_min > filter.fallback_price_max {
            return Err(PlanogramError::Config(format!(
                "filter.fallback_price_min ({}) exceeds fallback_price_max ({})",
                filter.fallback_price_min, filter.fallback_price_max
            )));
        }

        Ok(())
    }
}
