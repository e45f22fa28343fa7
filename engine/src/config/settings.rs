// Calculator settings: the fixed parts of the form (owners, acquisition value, slider bounds)
// plus the starting values of the editable inputs.
use serde::{Deserialize, Serialize};
use shared::models::Owner;
use std::collections::HashSet;
use std::path::Path;

use crate::calculator::CalculationRules;
use crate::error::EngineError;

// Bounds of a percentage slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl PercentRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    // Does not panic on an inverted range; settings loaded from disk are validated first.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    fn validate(&self, label: &str) -> Result<(), EngineError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(EngineError::InvalidRange(format!("{} range must be finite", label)));
        }
        if self.min > self.max {
            return Err(EngineError::InvalidRange(format!(
                "{} range min {} is greater than max {}",
                label, self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(EngineError::InvalidRange(format!(
                "{} range step must be positive, got {}",
                label, self.step
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub sale_price: f64,
    pub commission_percent: f64,
    pub capital_gains_tax_percent: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            sale_price: 440_000_000.0,
            commission_percent: 3.0,
            capital_gains_tax_percent: 12.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    pub acquisition_value: f64,
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default = "default_commission_range")]
    pub commission_range: PercentRange,
    #[serde(default = "default_capital_gains_tax_range")]
    pub capital_gains_tax_range: PercentRange,
    #[serde(default)]
    pub rules: CalculationRules,
}

fn default_commission_range() -> PercentRange {
    PercentRange::new(3.0, 3.5, 0.1)
}

fn default_capital_gains_tax_range() -> PercentRange {
    PercentRange::new(10.0, 30.0, 1.0)
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            acquisition_value: 362_514_000.0,
            owners: vec![
                Owner::new("Isabel", 25.0),
                Owner::new("Laura", 56.25),
                Owner::new("Patricia", 6.25),
                Owner::new("Ruth", 6.25),
                Owner::new("Mauricio", 6.25),
            ],
            defaults: InputDefaults::default(),
            commission_range: default_commission_range(),
            capital_gains_tax_range: default_capital_gains_tax_range(),
            rules: CalculationRules::default(),
        }
    }
}

impl CalculatorSettings {
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            owners = settings.owners.len(),
            "Loaded calculator settings"
        );
        Ok(settings)
    }

    // Share totals other than 100 are accepted here; they are reported by `validation::validate_shares`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.acquisition_value.is_finite() || self.acquisition_value < 0.0 {
            return Err(EngineError::ConfigError(format!(
                "Acquisition value must be a non-negative number, got {}",
                self.acquisition_value
            )));
        }
        if self.owners.is_empty() {
            return Err(EngineError::ConfigError("At least one owner is required".to_string()));
        }

        let mut seen = HashSet::new();
        for owner in &self.owners {
            if owner.name.trim().is_empty() {
                return Err(EngineError::InvalidOwner("Owner name cannot be empty".to_string()));
            }
            if !seen.insert(owner.name.as_str()) {
                return Err(EngineError::InvalidOwner(format!("Duplicate owner '{}'", owner.name)));
            }
            if !(owner.share_percent > 0.0 && owner.share_percent <= 100.0) {
                return Err(EngineError::InvalidOwner(format!(
                    "Share of '{}' must be in (0, 100], got {}",
                    owner.name, owner.share_percent
                )));
            }
        }

        self.commission_range.validate("Commission")?;
        self.capital_gains_tax_range.validate("Capital gains tax")?;

        if !self.defaults.sale_price.is_finite() || self.defaults.sale_price < 0.0 {
            return Err(EngineError::ConfigError(format!(
                "Default sale price must be a non-negative number, got {}",
                self.defaults.sale_price
            )));
        }
        if !self.commission_range.contains(self.defaults.commission_percent) {
            return Err(EngineError::ConfigError(format!(
                "Default commission {}% is outside its range",
                self.defaults.commission_percent
            )));
        }
        if !self.capital_gains_tax_range.contains(self.defaults.capital_gains_tax_percent) {
            return Err(EngineError::ConfigError(format!(
                "Default capital gains tax {}% is outside its range",
                self.defaults.capital_gains_tax_percent
            )));
        }
        Ok(())
    }
}
